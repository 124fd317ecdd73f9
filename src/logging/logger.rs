//! Logger facade tying gates, formatting, console and file sink together

use std::fmt::Display;
use std::sync::Arc;

use crate::config::Config;
use crate::memory::{self, MemoryProbe};

use super::channels::ChannelRegistry;
use super::clock::{render, Clock, SystemClock, DEFAULT_TIMESTAMP_FORMAT};
use super::console::{Console, StdoutConsole};
use super::file_writer::FileSink;
use super::format::{format_line, memory_message, SourceLocation};
use super::severity::Severity;

/// Leveled logger writing every produced line to a console and a day file
pub struct Logger {
    channels: Arc<ChannelRegistry>,
    sink: FileSink,
    console: Arc<dyn Console>,
    clock: Arc<dyn Clock>,
    timestamp_format: String,
    memory_probe: MemoryProbe,
}

impl Logger {
    /// Create a logger with all gates open, the default timestamp layout and
    /// the platform memory probe
    pub fn new(sink: FileSink, console: Arc<dyn Console>, clock: Arc<dyn Clock>) -> Self {
        Self {
            channels: Arc::new(ChannelRegistry::default()),
            sink,
            console,
            clock,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            memory_probe: memory::resident_bytes,
        }
    }

    /// Create a logger printing to stdout and writing to the configured directory
    pub fn from_config(config: &Config) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let console: Arc<dyn Console> = Arc::new(StdoutConsole);
        let sink = FileSink::new(config.log_dir(), Arc::clone(&clock), Arc::clone(&console))
            .with_day_format(config.day_format.clone());

        Self::new(sink, console, clock)
            .with_channels(Arc::new(ChannelRegistry::from_config(config)))
            .with_timestamp_format(config.timestamp_format.clone())
    }

    /// Share a gate registry with other code
    pub fn with_channels(mut self, channels: Arc<ChannelRegistry>) -> Self {
        self.channels = channels;
        self
    }

    pub fn with_timestamp_format(mut self, timestamp_format: impl Into<String>) -> Self {
        self.timestamp_format = timestamp_format.into();
        self
    }

    /// Replace the function used to measure memory for memory lines
    pub fn with_memory_probe(mut self, probe: MemoryProbe) -> Self {
        self.memory_probe = probe;
        self
    }

    /// Gate registry consulted before every call
    pub fn channels(&self) -> &ChannelRegistry {
        &self.channels
    }

    /// Shared handle to the gate registry
    pub fn channels_handle(&self) -> Arc<ChannelRegistry> {
        Arc::clone(&self.channels)
    }

    /// File sink receiving every produced line
    pub fn sink(&self) -> &FileSink {
        &self.sink
    }

    /// Log one message
    ///
    /// Nothing is formatted or written when the severity's gates are closed.
    /// Memory lines replace the message with the memory footprint segment.
    pub fn log(&self, severity: Severity, message: impl Display, location: SourceLocation<'_>) {
        if !self.channels.is_open(severity) {
            return;
        }

        let timestamp = render(
            &self.clock.now(),
            &self.timestamp_format,
            DEFAULT_TIMESTAMP_FORMAT,
        );
        let message = message.to_string();
        let message = match severity {
            Severity::Memory => {
                let footprint = memory::format_footprint((self.memory_probe)());
                memory_message(&message, &footprint)
            }
            _ => message,
        };

        let line = format_line(severity.glyph(), &timestamp, &location, &message);
        self.console.write_line(&line);
        self.sink.append(&line);
    }
}
