//! Call-site macros, one per severity
//!
//! Each macro captures the file, line, column and enclosing function of the
//! call site and accepts `format!` style arguments. Prefix the arguments with
//! `logger: <expr>,` to log through a specific [`Logger`](crate::Logger)
//! instead of the process-wide one.
//!
//! ```no_run
//! use daylog::{log_info, log_memory, log_network};
//!
//! fn fetch(url: &str) {
//!     log_network!("GET {}", url);
//!     log_memory!();
//!     log_info!("done");
//! }
//! ```

/// Name of the enclosing function, without its module path
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        let name = name.trim_end_matches("::{{closure}}");
        match name.rfind("::") {
            Some(pos) => &name[pos + 2..],
            None => name,
        }
    }};
}

/// [`SourceLocation`](crate::SourceLocation) of the call site
#[macro_export]
macro_rules! location {
    () => {
        $crate::SourceLocation::new(
            ::std::file!(),
            ::std::line!(),
            ::std::column!(),
            $crate::function_name!(),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($severity:expr; logger: $logger:expr, $($arg:tt)+) => {
        $logger.log($severity, ::std::format_args!($($arg)+), $crate::location!())
    };
    ($severity:expr; logger: $logger:expr) => {
        $logger.log($severity, "", $crate::location!())
    };
    ($severity:expr; $($arg:tt)+) => {
        $crate::logger().log($severity, ::std::format_args!($($arg)+), $crate::location!())
    };
    ($severity:expr;) => {
        $crate::logger().log($severity, "", $crate::location!())
    };
}

/// Log an error line (general gate)
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::__log!($crate::Severity::Error; $($arg)*) };
}

/// Log an info line (general gate)
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::__log!($crate::Severity::Info; $($arg)*) };
}

/// Log a debug line (general gate)
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::__log!($crate::Severity::Debug; $($arg)*) };
}

/// Log a verbose line (general gate)
#[macro_export]
macro_rules! log_verbose {
    ($($arg:tt)*) => { $crate::__log!($crate::Severity::Verbose; $($arg)*) };
}

/// Log a warning line (general gate)
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => { $crate::__log!($crate::Severity::Warning; $($arg)*) };
}

/// Log a severe line (general gate)
#[macro_export]
macro_rules! log_severe {
    ($($arg:tt)*) => { $crate::__log!($crate::Severity::Severe; $($arg)*) };
}

/// Log the memory footprint (memory gate), with an optional message
#[macro_export]
macro_rules! log_memory {
    ($($arg:tt)*) => { $crate::__log!($crate::Severity::Memory; $($arg)*) };
}

/// Log a network line (general and network gates)
#[macro_export]
macro_rules! log_network {
    ($($arg:tt)*) => { $crate::__log!($crate::Severity::Network; $($arg)*) };
}
