/// Environment variable holding the default output directory for converted presets
pub const OUTPUT_DIR_VAR: &str = "EQPRESET_OUTPUT_DIR";

/// Environment variable holding the log filter (same syntax as `RUST_LOG`)
pub const LOG_VAR: &str = "EQPRESET_LOG";

/// Log filter used when neither `EQPRESET_LOG` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Directory name used below the current directory when no output dir is configured
pub const DEFAULT_OUTPUT_DIR: &str = "converted";
