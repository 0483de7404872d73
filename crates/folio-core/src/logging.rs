#![forbid(unsafe_code)]

//! Logging bootstrap.
//!
//! With the `tracing` feature the usual macros are re-exported so dependent
//! crates can log through `folio_core::debug!` without naming `tracing`
//! themselves. With `tracing-json`, [`init_json_logging`] installs a global
//! JSON subscriber filtered by the `FOLIO_LOG` environment variable
//! (default `info`).

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, error, info, trace, trace_span, warn};

/// Environment variable read by [`init_json_logging`].
pub const LOG_ENV_VAR: &str = "FOLIO_LOG";

/// Errors from installing the global subscriber.
#[derive(Debug)]
pub enum LoggingError {
    /// A global subscriber was already installed.
    AlreadyInitialized(String),
}

impl core::fmt::Display for LoggingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AlreadyInitialized(msg) => write!(f, "logging already initialized: {msg}"),
        }
    }
}

impl std::error::Error for LoggingError {}

/// Install a JSON `tracing` subscriber writing to stdout.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging() -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(true)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}
