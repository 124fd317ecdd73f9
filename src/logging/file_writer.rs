//! Per-day append-only log files
//!
//! Each line goes to `<dir>/log_<day key>.txt`, where the day key is computed
//! from the clock on every append. Rolling over at midnight needs no extra
//! state: the first append of a new day simply targets a new file.
//!
//! Appends first try to open the existing day file. If that fails (usually
//! because it is the first line of the day) the failure is reported on the
//! console and a fresh file is created with the line as its only content. If
//! that fails too the line is reported and dropped. Nothing is ever returned
//! to the caller.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::SinkError;

use super::clock::{render, Clock, DEFAULT_DAY_FORMAT};
use super::console::Console;

/// How a line reached its day file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// Appended to an existing file
    Appended,
    /// The append failed and the file was created with this line
    Created,
}

/// Shared append target for all log lines of the process
pub struct FileSink {
    dir: PathBuf,
    day_format: String,
    clock: Arc<dyn Clock>,
    console: Arc<dyn Console>,
    /// Serializes appends so concurrent writers never race the create fallback
    write_lock: Mutex<()>,
}

impl FileSink {
    /// Create a sink writing into `dir`
    ///
    /// The directory is not created; a missing directory shows up as a
    /// reported, dropped line on every append.
    pub fn new(dir: impl Into<PathBuf>, clock: Arc<dyn Clock>, console: Arc<dyn Console>) -> Self {
        Self {
            dir: dir.into(),
            day_format: DEFAULT_DAY_FORMAT.to_string(),
            clock,
            console,
            write_lock: Mutex::new(()),
        }
    }

    /// Use a different strftime layout for the day key
    pub fn with_day_format(mut self, day_format: impl Into<String>) -> Self {
        self.day_format = day_format.into();
        self
    }

    /// Directory holding the day files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Day key for the current clock reading
    ///
    /// An unusable layout (invalid specifier, or one that renders a path
    /// separator) falls back to the default `dd-mm-yyyy` key.
    pub fn day_key(&self) -> String {
        let now = self.clock.now();
        let key = render(&now, &self.day_format, DEFAULT_DAY_FORMAT);
        if key.is_empty() || key.contains(|c: char| c == '/' || c == '\\') {
            return render(&now, DEFAULT_DAY_FORMAT, DEFAULT_DAY_FORMAT);
        }
        key
    }

    /// Path of the file for a given day key
    pub fn path_for_day(&self, day_key: &str) -> PathBuf {
        self.dir.join(format!("log_{}.txt", day_key))
    }

    /// Path of today's file
    pub fn current_path(&self) -> PathBuf {
        self.path_for_day(&self.day_key())
    }

    /// Append a line to today's file, reporting failures on the console
    pub fn append(&self, line: &str) {
        let path = self.current_path();
        let bytes = with_newline(line);
        let _guard = self.lock();

        if let Err(err) = append_existing(&path, &bytes) {
            tracing::debug!(path = %path.display(), error = %err, "Append to day file failed");
            self.console.write_line(&err.to_string());

            if let Err(err) = create_fresh(&path, &bytes) {
                tracing::debug!(path = %path.display(), error = %err, "Creating day file failed");
                self.console.write_line(&err.to_string());
            }
        }
    }

    /// Same two attempts as [`FileSink::append`], without console reports
    ///
    /// Returns the error of the last attempt when the line was dropped.
    pub fn try_append(&self, line: &str) -> Result<AppendOutcome, SinkError> {
        let path = self.current_path();
        let bytes = with_newline(line);
        let _guard = self.lock();

        match append_existing(&path, &bytes) {
            Ok(()) => Ok(AppendOutcome::Appended),
            Err(_) => create_fresh(&path, &bytes).map(|()| AppendOutcome::Created),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ()> {
        // The guarded data is (), so a poisoned lock is still usable
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn with_newline(line: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(line.len() + 1);
    bytes.extend_from_slice(line.as_bytes());
    bytes.push(b'\n');
    bytes
}

/// Primary path: the file must already exist
fn append_existing(path: &Path, bytes: &[u8]) -> Result<(), SinkError> {
    let to_err = |source| SinkError::Append {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(to_err)?;
    file.write_all(bytes).map_err(to_err)
}

/// Fallback path: create the file with `bytes` as its entire content
///
/// Refuses to replace a file that appeared in the meantime, so an existing
/// day file is never truncated.
fn create_fresh(path: &Path, bytes: &[u8]) -> Result<(), SinkError> {
    let to_err = |source| SinkError::Create {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(to_err)?;
    file.write_all(bytes).map_err(to_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::clock::ManualClock;
    use crate::logging::console::LineBuffer;
    use chrono::{Duration, Local, TimeZone};
    use tempfile::TempDir;

    fn test_sink(dir: &Path) -> (FileSink, Arc<ManualClock>, Arc<LineBuffer>) {
        let clock = Arc::new(ManualClock::new(
            Local.with_ymd_and_hms(2026, 1, 21, 14, 30, 45).unwrap(),
        ));
        let console = Arc::new(LineBuffer::new(100));
        let sink = FileSink::new(dir, clock.clone(), console.clone());
        (sink, clock, console)
    }

    #[test]
    fn test_path_for_day() {
        let temp_dir = TempDir::new().unwrap();
        let (sink, _, _) = test_sink(temp_dir.path());
        assert_eq!(sink.day_key(), "21-01-2026");
        assert_eq!(
            sink.current_path(),
            temp_dir.path().join("log_21-01-2026.txt")
        );
    }

    #[test]
    fn test_custom_day_format() {
        let temp_dir = TempDir::new().unwrap();
        let (sink, _, _) = test_sink(temp_dir.path());
        let sink = sink.with_day_format("%Y%m%d");
        assert_eq!(sink.current_path(), temp_dir.path().join("log_20260121.txt"));
    }

    #[test]
    fn test_first_append_creates_file_with_one_line() {
        let temp_dir = TempDir::new().unwrap();
        let (sink, _, console) = test_sink(temp_dir.path());
        let path = sink.current_path();
        assert!(!path.exists());

        sink.append("first line");

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first line\n");
        // The failed primary attempt is reported once
        let reports = console.lines();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].starts_with("Could not append to"));
    }

    #[test]
    fn test_sequential_appends_keep_order() {
        let temp_dir = TempDir::new().unwrap();
        let (sink, _, console) = test_sink(temp_dir.path());

        for i in 0..10 {
            sink.append(&format!("line {}", i));
        }

        let content = std::fs::read_to_string(sink.current_path()).unwrap();
        let expected: String = (0..10).map(|i| format!("line {}\n", i)).collect();
        assert_eq!(content, expected);
        // Only the very first append had to fall back
        assert_eq!(console.len(), 1);
    }

    #[test]
    fn test_appends_to_file_left_by_earlier_run() {
        let temp_dir = TempDir::new().unwrap();
        let (sink, _, console) = test_sink(temp_dir.path());
        std::fs::write(sink.current_path(), "from yesterday's process\n").unwrap();

        sink.append("after restart");

        assert_eq!(
            std::fs::read_to_string(sink.current_path()).unwrap(),
            "from yesterday's process\nafter restart\n"
        );
        assert!(console.is_empty());
    }

    #[test]
    fn test_day_change_rolls_over_to_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let (sink, clock, _) = test_sink(temp_dir.path());

        sink.append("day one");
        let first = sink.current_path();

        clock.advance(Duration::days(1));
        sink.append("day two");
        let second = sink.current_path();

        assert_ne!(first, second);
        assert_eq!(std::fs::read_to_string(&first).unwrap(), "day one\n");
        assert_eq!(std::fs::read_to_string(&second).unwrap(), "day two\n");
        assert_eq!(second, temp_dir.path().join("log_22-01-2026.txt"));
    }

    #[test]
    fn test_missing_directory_drops_line_and_reports_twice() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("does-not-exist");
        let (sink, _, console) = test_sink(&dir);

        sink.append("lost");

        assert!(!sink.current_path().exists());
        let reports = console.lines();
        assert_eq!(reports.len(), 2);
        assert!(reports[0].starts_with("Could not append to"));
        assert!(reports[1].starts_with("Could not create"));
        assert!(reports[1].contains("line dropped"));
    }

    #[test]
    fn test_try_append_outcomes() {
        let temp_dir = TempDir::new().unwrap();
        let (sink, _, console) = test_sink(temp_dir.path());

        assert_eq!(sink.try_append("a").unwrap(), AppendOutcome::Created);
        assert_eq!(sink.try_append("b").unwrap(), AppendOutcome::Appended);
        assert!(console.is_empty());

        let (missing, _, _) = test_sink(&temp_dir.path().join("missing"));
        let err = missing.try_append("c").unwrap_err();
        assert!(matches!(err, SinkError::Create { .. }));
    }

    #[test]
    fn test_concurrent_appends_lose_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let (sink, _, _) = test_sink(temp_dir.path());
        let sink = Arc::new(sink);

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let sink = Arc::clone(&sink);
                std::thread::spawn(move || {
                    for i in 0..25 {
                        sink.append(&format!("thread {} line {}", t, i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let content = std::fs::read_to_string(sink.current_path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 200);
        for t in 0..8 {
            let own: Vec<&str> = lines
                .iter()
                .copied()
                .filter(|l| l.starts_with(&format!("thread {} ", t)))
                .collect();
            let expected: Vec<String> = (0..25).map(|i| format!("thread {} line {}", t, i)).collect();
            assert_eq!(own, expected);
        }
    }

    #[test]
    fn test_invalid_day_format_falls_back_to_default_key() {
        let temp_dir = TempDir::new().unwrap();
        let (sink, _, _) = test_sink(temp_dir.path());
        let sink = sink.with_day_format("%Q");

        assert_eq!(sink.day_key(), "21-01-2026");
        sink.append("kept");
        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join("log_21-01-2026.txt")).unwrap(),
            "kept\n"
        );
    }

    #[test]
    fn test_day_format_with_separator_stays_in_dir() {
        let temp_dir = TempDir::new().unwrap();
        let (sink, _, _) = test_sink(temp_dir.path());
        let sink = sink.with_day_format("%Y/%m/%d");

        assert_eq!(sink.day_key(), "21-01-2026");
        assert_eq!(sink.current_path(), temp_dir.path().join("log_21-01-2026.txt"));
    }

    #[test]
    fn test_create_fresh_never_truncates_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log_21-01-2026.txt");
        std::fs::write(&path, "earlier\n").unwrap();

        let err = create_fresh(&path, b"x\n").unwrap_err();

        assert!(matches!(err, SinkError::Create { .. }));
        assert_eq!(err.kind(), crate::error::DiskErrorKind::AlreadyExists);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "earlier\n");
    }

    #[test]
    fn test_day_path_taken_by_directory_fails_both_attempts() {
        let temp_dir = TempDir::new().unwrap();
        let (sink, _, console) = test_sink(temp_dir.path());
        let path = sink.current_path();
        std::fs::create_dir(&path).unwrap();

        let err = sink.try_append("nowhere").unwrap_err();
        assert!(matches!(err, SinkError::Create { .. }));

        sink.append("nowhere either");
        let reports = console.lines();
        assert_eq!(reports.len(), 2);
        assert!(reports[0].starts_with("Could not append to"));
        assert!(reports[1].starts_with("Could not create"));
        assert!(path.is_dir());
        assert_eq!(std::fs::read_dir(&path).unwrap().count(), 0);
    }
}
