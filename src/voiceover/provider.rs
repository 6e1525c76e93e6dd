use std::env;
use std::ffi::OsString;
use std::path::Path;

use crate::config::TtsProvider;
use crate::error::VoiceoverError;

/// Detection order when no provider is configured.
const PREFERENCE: [TtsProvider; 2] = [TtsProvider::Svox, TtsProvider::Espeak];

impl TtsProvider {
    /// Executable that renders speech for this provider.
    pub fn program(self) -> &'static str {
        match self {
            Self::Svox => "pico2wave",
            Self::Espeak => "espeak",
        }
    }

    /// Arguments placed before `<output> <text>`.
    pub fn args(self) -> &'static [&'static str] {
        match self {
            Self::Svox | Self::Espeak => &["-w"],
        }
    }
}

fn on_path(program: &str, path_var: &OsString) -> bool {
    env::split_paths(path_var).any(|dir| is_executable(&dir.join(program)))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// First provider in preference order whose program is on `path_var`.
pub(super) fn detect_provider(path_var: Option<&OsString>) -> Option<TtsProvider> {
    let path_var = path_var?;
    PREFERENCE
        .into_iter()
        .find(|p| on_path(p.program(), path_var))
}

/// Use `preferred` if given, otherwise the first provider found on `PATH`.
///
/// # Errors
///
/// Returns [`VoiceoverError::NoProviderFound`] when nothing is configured
/// and no known program is installed.
pub fn select_provider(preferred: Option<TtsProvider>) -> Result<TtsProvider, VoiceoverError> {
    if let Some(p) = preferred {
        return Ok(p);
    }
    detect_provider(env::var_os("PATH").as_ref()).ok_or(VoiceoverError::NoProviderFound)
}
