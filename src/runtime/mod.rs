use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::catalog::{self, BuildOptions, Catalog, TrackEntry};
use crate::cli::Cli;
use crate::config::Settings;
use crate::device::Device;
use crate::library::{self, AudioType, Inventory, read_tags};
use crate::voiceover::{self, CommandSynthesizer, Synthesizer};

mod settings;

#[cfg(test)]
mod tests;

/// What a rebuild produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub tracks: usize,
    pub playlists: usize,
    pub albums: usize,
    pub artists: usize,
    pub voiceovers: usize,
    pub bytes: usize,
    pub catalog: PathBuf,
}

/// Rebuild the database of the device mounted at `cli.mount_path`.
pub fn run(cli: &Cli) -> Result<()> {
    let settings = settings::load_settings(cli);

    let device = Device::open(&cli.mount_path).context("Failed to open device")?;
    device
        .prepare()
        .context("Failed to create the control directory tree")?;

    let inventory =
        library::scan(device.root(), &settings.library).context("Failed to scan music")?;

    let mut synth = if settings.voiceover.enabled {
        let provider = voiceover::select_provider(settings.voiceover.provider)?;
        info!("using {} for voice-overs", provider.program());
        Some(CommandSynthesizer::for_provider(provider))
    } else {
        None
    };

    device
        .clear_voiceovers()
        .context("Failed to remove old voice-overs")?;

    let summary = rebuild(
        &device,
        &inventory,
        &settings,
        synth.as_mut().map(|s| s as &mut dyn Synthesizer),
    )?;

    info!(
        "wrote {} ({} bytes): {} tracks, {} playlists, {} albums, {} artists, {} voice-overs",
        summary.catalog.display(),
        summary.bytes,
        summary.tracks,
        summary.playlists,
        summary.albums,
        summary.artists,
        summary.voiceovers
    );
    Ok(())
}

/// Read tags for every inventory track, assign ids, render voice-overs when
/// `synth` is given, then encode and write the catalog.
///
/// Voice-overs are rendered before the catalog is written, so a failing
/// synthesizer leaves the previous catalog in place.
pub fn rebuild(
    device: &Device,
    inventory: &Inventory,
    settings: &Settings,
    synth: Option<&mut dyn Synthesizer>,
) -> Result<Summary> {
    let entries: Vec<TrackEntry> = inventory
        .tracks
        .iter()
        .filter_map(|path| {
            let audio_type = AudioType::from_path(Path::new(path))?;
            Some(TrackEntry {
                path: path.clone(),
                audio_type,
                tags: read_tags(&device.root().join(path), &settings.library),
            })
        })
        .collect();

    let options = BuildOptions {
        voiceover: synth.is_some(),
        master_label: settings.voiceover.master_label.clone(),
    };
    let catalog = Catalog::build(entries, &inventory.playlists, &options);

    let voiceovers = match synth {
        Some(synth) => voiceover::generate(
            &catalog,
            synth,
            &device.speakable_tracks(),
            &device.speakable_playlists(),
        )
        .context("Failed to generate voice-overs")?,
        None => 0,
    };

    let image = catalog::encode(&catalog).context("Failed to encode the database")?;
    let path = device
        .write_catalog(&image)
        .context("Failed to write the database")?;

    Ok(Summary {
        tracks: catalog.tracks.len(),
        playlists: catalog.playlists.len(),
        albums: catalog.albums.len(),
        artists: catalog.artists.len(),
        voiceovers,
        bytes: image.len(),
        catalog: path,
    })
}
