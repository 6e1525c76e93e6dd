//! Error types for every stage of a database rebuild.
//!
//! Each stage owns one enum. None of them are retried; the runtime wraps them
//! with context and the process exits.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Problems with the mounted device itself.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("couldn't find mount path {0}")]
    MountPathMissing(PathBuf),

    #[error("no write permissions to mount path {0}")]
    MountPathNotWritable(PathBuf),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Problems discovered while building the media inventory.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("no tracks found in {0}, copy your music to the device")]
    NoTracksFound(PathBuf),

    #[error("path is not valid UTF-8: {0}")]
    NonUtf8Path(PathBuf),

    #[error("failed to read playlist {path}: {source}")]
    Playlist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Input that cannot be represented in the catalog image.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("track path is {len} bytes, the catalog allows at most {max}: {path}")]
    PathTooLong { path: String, len: usize, max: usize },

    #[error("catalog image exceeds the 32-bit offset range ({0} bytes)")]
    ImageTooLarge(usize),
}

/// Failures of the text-to-speech backend.
#[derive(Debug, Error)]
pub enum VoiceoverError {
    #[error("no text-to-speech provider found, install either svox (pico2wave) or espeak")]
    NoProviderFound,

    #[error("command failed with {status}: {command}")]
    SynthesisFailed { command: String, status: String },

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}
