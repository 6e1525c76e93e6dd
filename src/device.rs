//! Layout of the device's control directory tree.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::DeviceError;

pub const MUSIC_DIR: &str = "iPod_Control/Music";
pub const ITUNES_DIR: &str = "iPod_Control/iTunes";
pub const CATALOG_FILE: &str = "iPod_Control/iTunes/iTunesSD";
pub const SPEAKABLE_TRACKS_DIR: &str = "iPod_Control/Speakable/Tracks";
pub const SPEAKABLE_PLAYLISTS_DIR: &str = "iPod_Control/Speakable/Playlists";

/// A mounted, writable device.
#[derive(Debug, Clone)]
pub struct Device {
    root: PathBuf,
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> DeviceError + '_ {
    move |source| DeviceError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl Device {
    /// Check that `mount` is a writable directory.
    pub fn open(mount: &Path) -> Result<Self, DeviceError> {
        if !mount.is_dir() {
            return Err(DeviceError::MountPathMissing(mount.to_path_buf()));
        }

        let meta = fs::metadata(mount).map_err(io_error(mount))?;
        if meta.permissions().readonly() {
            return Err(DeviceError::MountPathNotWritable(mount.to_path_buf()));
        }

        Ok(Self {
            root: mount.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn speakable_tracks(&self) -> PathBuf {
        self.root.join(SPEAKABLE_TRACKS_DIR)
    }

    pub fn speakable_playlists(&self) -> PathBuf {
        self.root.join(SPEAKABLE_PLAYLISTS_DIR)
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root.join(CATALOG_FILE)
    }

    /// Create any missing directory of the control tree.
    pub fn prepare(&self) -> Result<(), DeviceError> {
        for dir in [
            ITUNES_DIR,
            MUSIC_DIR,
            SPEAKABLE_PLAYLISTS_DIR,
            SPEAKABLE_TRACKS_DIR,
        ] {
            let path = self.root.join(dir);
            fs::create_dir_all(&path).map_err(io_error(&path))?;
        }
        Ok(())
    }

    /// Delete the regular files in both voice-over directories. Returns how
    /// many were removed.
    pub fn clear_voiceovers(&self) -> Result<usize, DeviceError> {
        let mut removed = 0;
        for dir in [self.speakable_playlists(), self.speakable_tracks()] {
            for entry in fs::read_dir(&dir).map_err(io_error(&dir))? {
                let entry = entry.map_err(io_error(&dir))?;
                let path = entry.path();
                if path.is_file() {
                    fs::remove_file(&path).map_err(io_error(&path))?;
                    removed += 1;
                }
            }
        }
        debug!("removed {removed} voice-over files");
        Ok(removed)
    }

    /// Write the catalog image, replacing any previous one.
    pub fn write_catalog(&self, image: &[u8]) -> Result<PathBuf, DeviceError> {
        let path = self.catalog_path();
        fs::write(&path, image).map_err(io_error(&path))?;
        Ok(path)
    }
}
