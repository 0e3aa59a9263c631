//! Shared environment helpers for the eqpreset crates
//!
//! - `constants`: names of environment variables and defaults
//! - `env_utils`: output directory resolution
//! - `logging`: one-shot `env_logger` setup

/// Environment variable names and default values
pub mod constants;
/// Output directory helpers
pub mod env_utils;
/// Logger initialisation
pub mod logging;

pub use constants::*;
pub use env_utils::EnvError;
pub use logging::init_logging;
