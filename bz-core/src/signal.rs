//! Interrupt handling for graceful cancellation.
//!
//! A SIGINT handler sets a process-wide flag and does nothing else: no
//! allocation, no logging, no file handles. Running pipelines poll the flag
//! between blocks and perform the cleanup themselves. The flag is never
//! cleared, so one interrupt aborts the one in-flight operation.
#![allow(unsafe_code)]

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

/// Set once the interrupt signal has been received.
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Read-only view of a cancellation flag, polled by the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct CancelToken<'a> {
    flag: &'a AtomicBool,
}

impl CancelToken<'static> {
    /// The token backed by the process-wide interrupt flag.
    pub fn global() -> Self {
        Self { flag: &INTERRUPTED }
    }
}

impl<'a> CancelToken<'a> {
    /// A token backed by a caller-owned flag.
    pub const fn new(flag: &'a AtomicBool) -> Self {
        Self { flag }
    }

    /// Whether cancellation has been requested.
    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Signal handler for SIGINT (Ctrl+C).
#[cfg(unix)]
extern "C" fn handle_sigint(_signum: libc::c_int) {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Installs the SIGINT handler.
///
/// Interrupted system calls are restarted, so blocking reads and writes
/// resume and the flag is noticed at the next block boundary.
///
/// # Errors
///
/// Returns the OS error if the handler cannot be installed.
#[cfg(unix)]
pub fn install_interrupt_handler() -> io::Result<()> {
    // SAFETY: `sigaction` is zero-initialisable, the mask is initialised by
    // `sigemptyset`, and the handler only performs an atomic store, which is
    // async-signal-safe.
    unsafe {
        let mut action: libc::sigaction = std::mem::zeroed();
        action.sa_sigaction = handle_sigint as libc::sighandler_t;
        action.sa_flags = libc::SA_RESTART;
        libc::sigemptyset(&mut action.sa_mask as *mut libc::sigset_t);

        if libc::sigaction(libc::SIGINT, &action, std::ptr::null_mut()) != 0 {
            return Err(io::Error::last_os_error());
        }
    }

    log::debug!("SIGINT handler installed");
    Ok(())
}

/// Installs the interrupt handler. Not supported on this platform.
///
/// # Errors
///
/// Never fails; operations simply cannot be interrupted gracefully.
#[cfg(not(unix))]
pub fn install_interrupt_handler() -> io::Result<()> {
    log::debug!("interrupt handling is not supported on this platform");
    Ok(())
}
