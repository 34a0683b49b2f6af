//! Process hardening for secret material
//!
//! Disables core dumps via `setrlimit(RLIMIT_CORE, 0)` so a crash (including
//! the deliberate abort on entropy failure) never writes entropy or word
//! indices to disk.
//!
//! Best-effort: containers and unprivileged users may refuse the call, in
//! which case a warning is logged and generation continues.

use std::sync::atomic::{AtomicBool, Ordering};

static CORE_DUMPS_DISABLED: AtomicBool = AtomicBool::new(false);

/// Disable core dumps for the current process.
///
/// Returns `true` if core dumps are off. Later calls are no-ops returning
/// `true`.
///
/// # Example
/// ```
/// seedphrase_core::memory::disable_core_dumps();
/// ```
pub fn disable_core_dumps() -> bool {
    if CORE_DUMPS_DISABLED.swap(true, Ordering::SeqCst) {
        return true;
    }

    #[cfg(unix)]
    {
        unix::set_core_limit_zero()
    }

    #[cfg(not(unix))]
    {
        log::warn!("core dump prevention not supported on this platform");
        false
    }
}

#[cfg(unix)]
mod unix {
    pub fn set_core_limit_zero() -> bool {
        let rlim = libc::rlimit {
            rlim_cur: 0,
            rlim_max: 0,
        };
        // SAFETY: setrlimit only reads the struct we pass by reference
        let result = unsafe { libc::setrlimit(libc::RLIMIT_CORE, &rlim) };
        if result != 0 {
            log::warn!(
                "failed to disable core dumps: {}",
                std::io::Error::last_os_error()
            );
            return false;
        }
        log::debug!("core dumps disabled");
        true
    }
}
