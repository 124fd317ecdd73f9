//! Console side-channel
//!
//! Every produced line is echoed here, and the file sink reports its own
//! failures here as well. Writing to a console must never fail the caller.

use std::collections::VecDeque;
use std::io::Write;
use std::sync::RwLock;

/// Destination for console output
pub trait Console: Send + Sync {
    /// Write one line; implementations swallow their own errors
    fn write_line(&self, line: &str);
}

/// Writes lines to the process's standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn write_line(&self, line: &str) {
        // println! would panic on a closed stdout
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", line);
    }
}

/// Thread-safe ring buffer of the most recent console lines
pub struct LineBuffer {
    lines: RwLock<VecDeque<String>>,
    /// Maximum lines to keep
    max_lines: usize,
}

impl LineBuffer {
    /// Create a new buffer holding at most `max_lines` lines
    pub fn new(max_lines: usize) -> Self {
        Self {
            lines: RwLock::new(VecDeque::with_capacity(max_lines.min(1024))),
            max_lines,
        }
    }

    /// Push a line, evicting the oldest one when full
    pub fn push(&self, line: impl Into<String>) {
        if self.max_lines == 0 {
            return;
        }
        if let Ok(mut lines) = self.lines.write() {
            if lines.len() >= self.max_lines {
                lines.pop_front();
            }
            lines.push_back(line.into());
        }
    }

    /// Get all buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .read()
            .map(|l| l.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Get the number of buffered lines
    pub fn len(&self) -> usize {
        self.lines.read().map(|l| l.len()).unwrap_or(0)
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all buffered lines
    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.write() {
            lines.clear();
        }
    }
}

impl Console for LineBuffer {
    fn write_line(&self, line: &str) {
        self.push(line);
    }
}
