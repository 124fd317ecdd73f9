//! Error types for the log sink and logger setup

use std::io;
use std::path::PathBuf;

/// Categories of disk errors for readable console reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskErrorKind {
    /// Disk is full or quota exceeded
    DiskFull,
    /// Permission denied (read or write)
    PermissionDenied,
    /// File or directory not found
    NotFound,
    /// File already exists
    AlreadyExists,
    /// Other IO error
    Other,
}

impl DiskErrorKind {
    /// Get a short description for this error kind
    pub fn description(&self) -> &'static str {
        match self {
            DiskErrorKind::DiskFull => "disk full",
            DiskErrorKind::PermissionDenied => "permission denied",
            DiskErrorKind::NotFound => "file or directory not found",
            DiskErrorKind::AlreadyExists => "file already exists",
            DiskErrorKind::Other => "I/O error",
        }
    }
}

/// Categorize an IO error
pub fn categorize_io_error(e: &io::Error) -> DiskErrorKind {
    use io::ErrorKind;

    match e.kind() {
        ErrorKind::WriteZero => DiskErrorKind::DiskFull,
        ErrorKind::PermissionDenied => DiskErrorKind::PermissionDenied,
        ErrorKind::NotFound => DiskErrorKind::NotFound,
        ErrorKind::AlreadyExists => DiskErrorKind::AlreadyExists,

        _ => {
            #[cfg(unix)]
            {
                if let Some(os_error) = e.raw_os_error() {
                    // ENOSPC is 28 on Linux and macOS, EDQUOT is 122 on Linux and 69 on macOS
                    if os_error == libc::ENOSPC || os_error == libc::EDQUOT {
                        return DiskErrorKind::DiskFull;
                    }
                    if os_error == libc::EACCES {
                        return DiskErrorKind::PermissionDenied;
                    }
                }
            }
            DiskErrorKind::Other
        }
    }
}

/// Render an IO error as `<description> (<os message>)`
fn describe(e: &io::Error) -> String {
    match categorize_io_error(e) {
        DiskErrorKind::Other => e.to_string(),
        kind => format!("{} ({})", kind.description(), e),
    }
}

/// Failure of one write attempt in the file sink
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Appending to an existing day file failed
    #[error("Could not append to {}: {}", .path.display(), describe(.source))]
    Append {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Creating a fresh day file failed, the line is dropped
    #[error("Could not create {}, line dropped: {}", .path.display(), describe(.source))]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SinkError {
    /// Category of the underlying IO error
    pub fn kind(&self) -> DiskErrorKind {
        match self {
            SinkError::Append { source, .. } | SinkError::Create { source, .. } => {
                categorize_io_error(source)
            }
        }
    }
}

/// Failure to install the process-wide logger
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("the process-wide logger is already initialized")]
    AlreadyInitialized,
}
