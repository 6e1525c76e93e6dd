use std::path::Path;

/// Audio container family, as the device firmware encodes it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AudioType {
    Mp3,
    Mp4,
    Wav,
}

impl AudioType {
    /// Classify a file extension (without dot, any case).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "mp3" | "mpg" => Some(Self::Mp3),
            "m4a" | "m4b" | "m4p" | "aa" => Some(Self::Mp4),
            "wav" => Some(Self::Wav),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|s| s.to_str())
            .and_then(Self::from_extension)
    }

    /// Type code stored in a track record.
    pub fn code(self) -> u32 {
        match self {
            Self::Mp3 => 1,
            Self::Mp4 => 2,
            Self::Wav => 4,
        }
    }
}

/// A playlist file with its members resolved to device paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSource {
    /// File stem of the `.m3u` file.
    pub name: String,
    /// Device path of the `.m3u` file.
    pub source: String,
    /// Members in file order. Every entry is also in `Inventory::tracks`.
    pub members: Vec<String>,
}

/// Result of a scan.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    /// Device paths of all audio files, sorted bytewise and unique.
    pub tracks: Vec<String>,
    /// Non-empty playlists in discovery order.
    pub playlists: Vec<PlaylistSource>,
}
