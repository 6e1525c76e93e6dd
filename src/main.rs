//! # shuffledb
//!
//! Rebuilds `iPod_Control/iTunes/iTunesSD`, the track and playlist database
//! of an iPod shuffle (4th generation), from the music copied onto it.
//!
//! Every audio file under `iPod_Control/Music` becomes a track, every
//! `.m3u` file there becomes a playlist, and an implicit master playlist
//! holds all tracks. Optionally each track and playlist gets a spoken name
//! rendered by an external text-to-speech program.

mod catalog;
mod cli;
mod config;
mod device;
mod error;
mod library;
mod runtime;
mod voiceover;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    runtime::run(&cli)
}
