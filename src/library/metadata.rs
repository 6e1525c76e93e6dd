use std::path::Path;

use lofty::prelude::*;

use crate::config::LibrarySettings;

/// The few tag fields the catalog needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackTags {
    pub title: String,
    pub album: String,
    pub artist: String,
    pub duration_ms: u32,
}

impl TrackTags {
    fn unknown(settings: &LibrarySettings) -> Self {
        Self {
            title: String::new(),
            album: settings.unknown_album.clone(),
            artist: settings.unknown_artist.clone(),
            duration_ms: 0,
        }
    }
}

/// Read title, album, artist and duration from `path`.
///
/// Missing tags fall back to an empty title and the configured unknown
/// album/artist names. A file lofty cannot parse gets all defaults and a
/// zero duration.
pub fn read_tags(path: &Path, settings: &LibrarySettings) -> TrackTags {
    let mut tags = TrackTags::unknown(settings);

    let tagged = match lofty::read_from_path(path) {
        Ok(tagged) => tagged,
        Err(e) => {
            tracing::warn!("failed to read tags from {}: {e}", path.display());
            return tags;
        }
    };

    let millis = tagged.properties().duration().as_millis();
    tags.duration_ms = millis.min(u128::from(u32::MAX)) as u32;

    if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
        if let Some(v) = tag.title() {
            tags.title = v.to_string();
        }
        if let Some(v) = tag.album().filter(|v| !v.is_empty()) {
            tags.album = v.to_string();
        }
        if let Some(v) = tag.artist().filter(|v| !v.is_empty()) {
            tags.artist = v.to_string();
        }
    }

    tags
}
