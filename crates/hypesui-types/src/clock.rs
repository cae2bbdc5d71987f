//! Time source for permit deadline checks.
//!
//! The execution environment owns time; the ledger only reads it. Permit
//! deadlines are Unix timestamps in seconds.

use chrono::Utc;

/// Supplies the current Unix time in seconds.
pub trait Clock: Send + Sync {
    /// Current time, seconds since the Unix epoch.
    fn now_unix(&self) -> u64;
}

/// Wall-clock time from the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> u64 {
        u64::try_from(Utc::now().timestamp()).unwrap_or_default()
    }
}
