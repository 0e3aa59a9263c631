use crate::constants::{DEFAULT_LOG_FILTER, LOG_VAR};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize `env_logger` once for the whole process.
///
/// The filter is read from `EQPRESET_LOG`, then `RUST_LOG`, and defaults to `info`.
/// Calling this more than once is harmless.
pub fn init_logging() {
    INIT.call_once(|| {
        let fallback = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
        let env = env_logger::Env::default().filter_or(LOG_VAR, fallback);
        // try_init: tests may have installed a logger already
        let _ = env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .try_init();
        log::debug!(
            "logging initialised (eqpreset-env v{})",
            env!("CARGO_PKG_VERSION")
        );
    });
}
