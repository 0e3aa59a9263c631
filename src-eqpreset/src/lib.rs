//! eqpreset - read, write and convert equalizer plug-in presets
//!
//! This crate ties the workspace together:
//!
//! - `eqpreset_formats`: binary codecs and plug-in models
//! - `eqpreset_convert`: band converters between models
//! - `eqpreset_env`: logging and output directory setup

pub use eqpreset_convert as convert;
pub use eqpreset_env as env;
pub use eqpreset_formats as formats;

/// Command-line interface definitions
pub mod cli;
/// File level steps behind each subcommand
pub mod workflow;

pub use cli::*;
pub use workflow::*;
