//! Spoken track and playlist names.
//!
//! The firmware looks up a voice-over by the dbid of the track or playlist,
//! so each clip is written as `<dbid>.wav` into the matching `Speakable`
//! directory.

mod provider;
mod synth;

pub use provider::select_provider;
pub use synth::{CommandSynthesizer, Synthesizer};

use std::path::Path;

use tracing::debug;

use crate::catalog::{Catalog, Dbid};
use crate::error::VoiceoverError;

const CLIP_EXTENSION: &str = "wav";

/// File name of the clip for `dbid`: its bytes in reverse order as
/// uppercase hex, plus the `.wav` extension.
pub fn clip_file_name(dbid: &Dbid) -> String {
    let hex: String = dbid.iter().rev().map(|b| format!("{b:02X}")).collect();
    format!("{hex}.{CLIP_EXTENSION}")
}

/// Render a clip for every track into `tracks_dir` and for every playlist
/// into `playlists_dir`. Returns the number of clips written.
///
/// # Errors
///
/// Stops at the first clip `synth` fails to render.
pub fn generate(
    catalog: &Catalog,
    synth: &mut dyn Synthesizer,
    tracks_dir: &Path,
    playlists_dir: &Path,
) -> Result<usize, VoiceoverError> {
    let mut count = 0;

    for track in &catalog.tracks {
        let output = tracks_dir.join(clip_file_name(&track.dbid));
        debug!("speaking {:?} -> {}", track.speech, output.display());
        synth.synthesize(&track.speech, &output)?;
        count += 1;
    }

    for playlist in &catalog.playlists {
        let output = playlists_dir.join(clip_file_name(&playlist.dbid));
        debug!("speaking {:?} -> {}", playlist.speech, output.display());
        synth.synthesize(&playlist.speech, &output)?;
        count += 1;
    }

    Ok(count)
}
