use std::path::PathBuf;

use clap::Parser;

use crate::config::{Settings, TtsProvider};

#[derive(Debug, Parser)]
#[command(name = "shuffledb")]
#[command(about = "Build the track and playlist database for the iPod shuffle 4g", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Mount path of the iPod
    pub mount_path: PathBuf,

    /// Generate voice-overs for tracks and playlists
    #[arg(short = 'o', long = "voiceover", visible_alias = "vo")]
    pub voiceover: bool,

    /// Generate voice-overs using the given text-to-speech provider
    #[arg(long, value_enum)]
    pub tts: Option<TtsProvider>,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply command-line overrides on top of loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        if self.voiceover || self.tts.is_some() {
            settings.voiceover.enabled = true;
        }
        if let Some(provider) = self.tts {
            settings.voiceover.provider = Some(provider);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mount_path_and_flags() {
        let cli = Cli::try_parse_from(["shuffledb", "/media/ipod", "--vo", "-v"]).unwrap();
        assert_eq!(cli.mount_path, PathBuf::from("/media/ipod"));
        assert!(cli.voiceover);
        assert!(cli.verbose);
        assert_eq!(cli.tts, None);
    }

    #[test]
    fn tts_choice_enables_voiceover() {
        let cli = Cli::try_parse_from(["shuffledb", "/media/ipod", "--tts", "espeak"]).unwrap();
        let mut settings = Settings::default();
        cli.apply(&mut settings);
        assert!(settings.voiceover.enabled);
        assert_eq!(settings.voiceover.provider, Some(TtsProvider::Espeak));
    }

    #[test]
    fn no_flags_leave_settings_alone() {
        let cli = Cli::try_parse_from(["shuffledb", "/media/ipod"]).unwrap();
        let mut settings = Settings::default();
        settings.voiceover.enabled = true;
        cli.apply(&mut settings);
        assert!(settings.voiceover.enabled);
        assert_eq!(settings.voiceover.provider, None);
    }

    #[test]
    fn rejects_unknown_provider_and_missing_mount_path() {
        assert!(Cli::try_parse_from(["shuffledb", "/media/ipod", "--tts", "say"]).is_err());
        assert!(Cli::try_parse_from(["shuffledb"]).is_err());
    }
}
