use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::device::MUSIC_DIR;
use crate::error::ScanError;

use super::model::{AudioType, Inventory, PlaylistSource};

const PLAYLIST_EXTENSION: &str = "m3u";

/// A playlist file as read from disk, before its entries are checked
/// against the track inventory.
struct RawPlaylist {
    name: String,
    source: String,
    dir: String,
    entries: Vec<String>,
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn is_playlist_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(PLAYLIST_EXTENSION))
        .unwrap_or(false)
}

/// Convert a host path below `mount` into a device path.
pub(super) fn device_path(mount: &Path, path: &Path) -> Result<String, ScanError> {
    let rel = path.strip_prefix(mount).unwrap_or(path);
    let mut parts: Vec<&str> = Vec::new();
    for component in rel.components() {
        if let Component::Normal(part) = component {
            let part = part
                .to_str()
                .ok_or_else(|| ScanError::NonUtf8Path(path.to_path_buf()))?;
            parts.push(part);
        }
    }
    Ok(parts.join("/"))
}

/// Non-comment, non-blank lines of an `.m3u` file, with `\` separators
/// turned into `/`.
pub(super) fn playlist_entries(text: &str) -> Vec<String> {
    text.trim_start_matches('\u{feff}')
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.replace('\\', "/"))
        .collect()
}

/// Resolve a playlist entry against the device path of the playlist's
/// directory. Entries starting with `/` are taken relative to the mount
/// point. Returns `None` when `..` climbs above the mount point.
pub(super) fn resolve_entry(dir: &str, entry: &str) -> Option<String> {
    let mut parts: Vec<&str> = if entry.starts_with('/') {
        Vec::new()
    } else {
        dir.split('/').filter(|p| !p.is_empty()).collect()
    };

    for part in entry.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop()?;
            }
            p => parts.push(p),
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

fn read_playlist(mount: &Path, path: &Path) -> Result<RawPlaylist, ScanError> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ScanError::NonUtf8Path(path.to_path_buf()))?
        .to_string();
    let source = device_path(mount, path)?;
    let dir = match path.parent() {
        Some(parent) => device_path(mount, parent)?,
        None => String::new(),
    };

    let bytes = fs::read(path).map_err(|source| ScanError::Playlist {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = playlist_entries(&String::from_utf8_lossy(&bytes));

    Ok(RawPlaylist {
        name,
        source,
        dir,
        entries,
    })
}

/// Walk `<mount>/iPod_Control/Music` and collect audio tracks and playlists.
///
/// Tracks come back sorted by device path so the same files always produce
/// the same catalog. Playlist entries that don't resolve to a scanned track
/// are dropped, and a playlist left without members is dropped entirely.
///
/// # Errors
///
/// Returns [`ScanError::NoTracksFound`] when the walk finds no audio files.
pub fn scan(mount: &Path, settings: &LibrarySettings) -> Result<Inventory, ScanError> {
    let music_dir = mount.join(MUSIC_DIR);

    let mut tracks: Vec<String> = Vec::new();
    let mut raw_playlists: Vec<RawPlaylist> = Vec::new();

    let walker = WalkDir::new(&music_dir)
        .follow_links(settings.follow_links)
        .sort_by_file_name();

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("skipping unreadable entry: {e}");
                None
            }
        })
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        if AudioType::from_path(path).is_some() {
            tracks.push(device_path(mount, path)?);
        } else if is_playlist_file(path) {
            raw_playlists.push(read_playlist(mount, path)?);
        }
    }

    if tracks.is_empty() {
        return Err(ScanError::NoTracksFound(music_dir));
    }

    tracks.sort();
    tracks.dedup();

    let known: HashSet<&str> = tracks.iter().map(String::as_str).collect();
    let mut playlists = Vec::with_capacity(raw_playlists.len());

    for raw in raw_playlists {
        let mut members = Vec::with_capacity(raw.entries.len());
        for entry in &raw.entries {
            match resolve_entry(&raw.dir, entry) {
                Some(p) if known.contains(p.as_str()) => members.push(p),
                _ => debug!("{}: dropping unresolved entry {entry}", raw.source),
            }
        }

        if members.is_empty() {
            info!("skipping empty playlist {}", raw.source);
            continue;
        }

        info!("found playlist {} ({} tracks)", raw.source, members.len());
        playlists.push(PlaylistSource {
            name: raw.name,
            source: raw.source,
            members,
        });
    }

    Ok(Inventory { tracks, playlists })
}
