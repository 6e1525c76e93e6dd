use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/shuffledb/config.toml` or `~/.config/shuffledb/config.toml`
///
/// Precedence (highest wins):
/// 1) Command-line flags
/// 2) Environment variables (prefix `SHUFFLEDB__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub voiceover: VoiceoverSettings,
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VoiceoverSettings {
    /// Generate spoken track and playlist names.
    pub enabled: bool,
    /// Preferred text-to-speech backend. When unset the first one found on
    /// `PATH` is used.
    pub provider: Option<TtsProvider>,
    /// Spoken name of the master playlist.
    pub master_label: String,
}

impl Default for VoiceoverSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: None,
            master_label: "All songs".to_string(),
        }
    }
}

/// Supported text-to-speech backends, in detection order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TtsProvider {
    /// SVOX Pico, via `pico2wave`.
    #[serde(alias = "pico", alias = "pico2wave")]
    Svox,
    /// eSpeak, via `espeak`.
    Espeak,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Whether to follow symlinks while walking the music directory.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Album name used when a track carries no album tag.
    pub unknown_album: String,
    /// Artist name used when a track carries no artist tag.
    pub unknown_artist: String,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            follow_links: false,
            include_hidden: true,
            unknown_album: "Unknown".to_string(),
            unknown_artist: "Unknown".to_string(),
        }
    }
}
