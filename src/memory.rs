//! Process memory footprint for memory-severity lines

/// Function returning the current resident memory in bytes, if known
pub type MemoryProbe = fn() -> Option<u64>;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Resident set size of the current process
///
/// Reads `/proc/self/statm`, whose second field is the number of resident pages.
#[cfg(target_os = "linux")]
pub fn resident_bytes() -> Option<u64> {
    let statm = std::fs::read_to_string("/proc/self/statm").ok()?;
    let pages: u64 = statm.split_whitespace().nth(1)?.parse().ok()?;

    // SAFETY: sysconf has no preconditions
    let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    if page_size <= 0 {
        return None;
    }

    pages.checked_mul(page_size as u64)
}

/// Resident set size of the current process
///
/// Asks the kernel for this task's info via `proc_pidinfo(PROC_PIDTASKINFO)`.
#[cfg(target_os = "macos")]
pub fn resident_bytes() -> Option<u64> {
    // SAFETY: proc_taskinfo is plain integers, all-zero is a valid value
    let mut info: libc::proc_taskinfo = unsafe { std::mem::zeroed() };
    let size = std::mem::size_of::<libc::proc_taskinfo>() as libc::c_int;

    // SAFETY: the buffer is a properly sized, writable proc_taskinfo
    let written = unsafe {
        libc::proc_pidinfo(
            libc::getpid(),
            libc::PROC_PIDTASKINFO,
            0,
            &mut info as *mut libc::proc_taskinfo as *mut libc::c_void,
            size,
        )
    };
    if written != size {
        return None;
    }

    Some(info.pti_resident_size)
}

/// Resident set size of the current process (unavailable on this platform)
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
pub fn resident_bytes() -> Option<u64> {
    None
}

/// Format a footprint as `Memory Used by App: <N>MB`
///
/// An unknown footprint is reported as zero.
pub fn format_footprint(bytes: Option<u64>) -> String {
    let mb = bytes.unwrap_or(0) as f64 / BYTES_PER_MB;
    format!("Memory Used by App: {:.1}MB", mb)
}
