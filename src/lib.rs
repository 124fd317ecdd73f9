//! daylog - leveled logging to the console and a per-day log file
//!
//! Eight severities share three gates (general, memory, network). Every line
//! that passes its gates is printed to stdout and appended to
//! `log_<dd-mm-yyyy>.txt` in the log directory.

use std::sync::OnceLock;

pub mod config;
pub mod error;
pub mod logging;
mod macros;
pub mod memory;

pub use config::Config;
pub use error::{InitError, SinkError};
pub use logging::{
    AppendOutcome, ChannelRegistry, Clock, Console, FileSink, LineBuffer, Logger, ManualClock,
    Severity, SourceLocation, StdoutConsole, SystemClock,
};

/// Process-wide logger used by the `log_*!` macros
static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Get the process-wide logger
///
/// Built from the loaded [`Config`] on first use unless [`init`] ran before.
pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(|| Logger::from_config(&Config::load_or_default()))
}

/// Install the process-wide logger
///
/// Fails if a logger was already installed or lazily built by [`logger`].
pub fn init(logger: Logger) -> Result<(), InitError> {
    LOGGER
        .set(logger)
        .map_err(|_| InitError::AlreadyInitialized)?;
    tracing::debug!("Process-wide logger installed");
    Ok(())
}
