//! Line layout for log entries
//!
//! Lines are meant for humans, so nothing is escaped:
//! `<timestamp> <glyph>[<file>]:<line> <column> <function> -> <message>`

/// Where a log call was made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation<'a> {
    /// Source file path as reported by `file!()`
    pub file: &'a str,
    pub line: u32,
    pub column: u32,
    /// Name of the enclosing function
    pub function: &'a str,
}

impl<'a> SourceLocation<'a> {
    pub fn new(file: &'a str, line: u32, column: u32, function: &'a str) -> Self {
        Self {
            file,
            line,
            column,
            function,
        }
    }

    /// File name without its directory prefix
    pub fn file_name(&self) -> &'a str {
        source_file_name(self.file)
    }
}

/// Strip a path down to its final component
///
/// Both `/` and `\` count as separators since `file!()` uses the host's style.
pub fn source_file_name(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path)
}

/// Build a complete log line
pub fn format_line(
    glyph: &str,
    timestamp: &str,
    location: &SourceLocation<'_>,
    message: &str,
) -> String {
    format!(
        "{} {}[{}]:{} {} {} -> {}",
        timestamp,
        glyph,
        location.file_name(),
        location.line,
        location.column,
        location.function,
        message
    )
}

/// Build the message part of a memory line
///
/// An empty message drops the `Message:` segment entirely.
pub fn memory_message(message: &str, footprint: &str) -> String {
    if message.is_empty() {
        format!("*** {} ***", footprint)
    } else {
        format!("Message: {} *** {} ***", message, footprint)
    }
}
