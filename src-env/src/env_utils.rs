//! Environment variable utilities for eqpreset
//!
//! This module resolves where converted presets are written, using the
//! EQPRESET_OUTPUT_DIR variable when no explicit directory is given.

use crate::constants::{DEFAULT_OUTPUT_DIR, OUTPUT_DIR_VAR};
use std::env;
use std::path::{Path, PathBuf};

/// Error type for environment variable issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("EQPRESET_OUTPUT_DIR is not a directory: {0}")]
    OutputDirNotADirectory(PathBuf),

    #[error("Failed to create output directory {0}: {1}")]
    OutputDirCreationFailed(PathBuf, std::io::Error),
}

/// Pick the output directory from an explicit choice, then the environment value, then the default.
///
/// Pure helper behind [`get_output_dir`], kept separate so it can be tested
/// without touching the process environment.
pub fn resolve_output_dir(explicit: Option<&Path>, env_value: Option<String>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_OUTPUT_DIR),
    }
}

/// Get the directory converted presets are written to, creating it if necessary
///
/// # Arguments
/// * `explicit` - Directory given on the command line, if any
///
/// # Errors
///
/// Returns an error if:
/// - the resolved path exists but is not a directory
/// - the directory cannot be created
///
/// # Example
///
/// ```no_run
/// use eqpreset_env::env_utils::get_output_dir;
///
/// let out = get_output_dir(None)?;
/// println!("Writing presets to {}", out.display());
/// # Ok::<(), eqpreset_env::env_utils::EnvError>(())
/// ```
pub fn get_output_dir(explicit: Option<&Path>) -> Result<PathBuf, EnvError> {
    let dir = resolve_output_dir(explicit, env::var(OUTPUT_DIR_VAR).ok());

    if dir.exists() {
        if !dir.is_dir() {
            return Err(EnvError::OutputDirNotADirectory(dir));
        }
    } else {
        std::fs::create_dir_all(&dir)
            .map_err(|e| EnvError::OutputDirCreationFailed(dir.clone(), e))?;
        log::debug!("created output directory {}", dir.display());
    }

    Ok(dir)
}
