//! Leveled logging to the console and per-day log files
//!
//! A [`Logger`] checks the [`ChannelRegistry`] gates, formats one line per
//! call, echoes it on a [`Console`] and appends it to the [`FileSink`].

mod channels;
mod clock;
mod console;
mod file_writer;
mod format;
mod logger;
mod severity;

pub use channels::ChannelRegistry;
pub use clock::{Clock, ManualClock, SystemClock, DEFAULT_DAY_FORMAT, DEFAULT_TIMESTAMP_FORMAT};
pub use console::{Console, LineBuffer, StdoutConsole};
pub use file_writer::{AppendOutcome, FileSink};
pub use format::{format_line, memory_message, source_file_name, SourceLocation};
pub use logger::Logger;
pub use severity::{GateRule, Severity, UnknownSeverity};
