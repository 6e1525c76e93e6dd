use std::collections::HashMap;

use tracing::warn;

use crate::library::{AudioType, PlaylistSource, TrackTags};

use super::ids::{Dbid, IdTable, dbid};

/// A scanned audio file together with its tags.
#[derive(Debug, Clone)]
pub struct TrackEntry {
    /// Device path, relative to the mount point.
    pub path: String,
    pub audio_type: AudioType,
    pub tags: TrackTags,
}

/// A track as it is stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub path: String,
    pub audio_type: AudioType,
    pub duration_ms: u32,
    pub album_id: u32,
    pub artist_id: u32,
    pub dbid: Dbid,
    /// Text spoken for this track: `"<title> - <artist>"`.
    pub speech: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlaylistKind {
    /// Every track, in catalog order.
    Master,
    /// A user playlist read from an `.m3u` file.
    Named,
}

impl PlaylistKind {
    /// Type tag stored in a playlist record.
    pub fn code(self) -> u32 {
        match self {
            Self::Master => 1,
            Self::Named => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub kind: PlaylistKind,
    /// `None` for the master playlist.
    pub name: Option<String>,
    /// Indices into `Catalog::tracks`.
    pub members: Vec<u32>,
    pub dbid: Dbid,
    pub speech: String,
}

#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Whether voice-overs are generated for this catalog.
    pub voiceover: bool,
    /// Spoken name of the master playlist.
    pub master_label: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            voiceover: false,
            master_label: "All songs".to_string(),
        }
    }
}

/// Everything the encoder needs, with ids already assigned.
///
/// Tracks are sorted by path; a track's position is the index playlist
/// records refer to. The master playlist is always `playlists[0]`.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub tracks: Vec<Track>,
    pub playlists: Vec<Playlist>,
    pub albums: IdTable,
    pub artists: IdTable,
}

impl Catalog {
    /// Assign ids over `entries` and resolve `sources` into index lists.
    ///
    /// Album and artist ids are handed out in first-seen order while walking
    /// the path-sorted tracks. Playlist members that aren't among `entries`
    /// are skipped.
    pub fn build(
        mut entries: Vec<TrackEntry>,
        sources: &[PlaylistSource],
        options: &BuildOptions,
    ) -> Self {
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        entries.dedup_by(|a, b| a.path == b.path);

        let mut albums = IdTable::new();
        let mut artists = IdTable::new();

        let tracks: Vec<Track> = entries
            .into_iter()
            .map(|entry| {
                let speech = format!("{} - {}", entry.tags.title, entry.tags.artist);
                Track {
                    album_id: albums.id_for(&entry.tags.album),
                    artist_id: artists.id_for(&entry.tags.artist),
                    dbid: dbid(&speech),
                    duration_ms: entry.tags.duration_ms,
                    audio_type: entry.audio_type,
                    path: entry.path,
                    speech,
                }
            })
            .collect();

        let index: HashMap<&str, u32> = tracks
            .iter()
            .enumerate()
            .map(|(i, t)| (t.path.as_str(), i as u32))
            .collect();

        let mut playlists = Vec::with_capacity(sources.len() + 1);
        playlists.push(Playlist {
            kind: PlaylistKind::Master,
            name: None,
            members: (0..tracks.len() as u32).collect(),
            // All zeros selects the firmware's built-in "All songs" voice-over.
            dbid: if options.voiceover {
                dbid(&options.master_label)
            } else {
                [0u8; 8]
            },
            speech: options.master_label.clone(),
        });

        for source in sources {
            let members: Vec<u32> = source
                .members
                .iter()
                .filter_map(|path| {
                    let found = index.get(path.as_str()).copied();
                    if found.is_none() {
                        warn!("{}: {path} is not in the track list", source.source);
                    }
                    found
                })
                .collect();

            if members.is_empty() {
                warn!("skipping empty playlist {}", source.source);
                continue;
            }

            playlists.push(Playlist {
                kind: PlaylistKind::Named,
                name: Some(source.name.clone()),
                members,
                dbid: dbid(&source.name),
                speech: source.name.clone(),
            });
        }

        Self {
            tracks,
            playlists,
            albums,
            artists,
        }
    }
}
