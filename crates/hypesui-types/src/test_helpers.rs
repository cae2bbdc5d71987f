//! Test fixtures. **Never use in production.**

use std::sync::atomic::{AtomicU64, Ordering};

use alloy_primitives::Address;

use crate::Clock;

/// A random, non-null account identifier.
#[must_use]
pub fn random_account() -> Address {
    loop {
        let addr = Address::from(rand::random::<[u8; 20]>());
        if addr != Address::ZERO {
            return addr;
        }
    }
}

/// Clock whose time only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    #[must_use]
    pub fn at(now: u64) -> Self {
        Self {
            now: AtomicU64::new(now),
        }
    }

    pub fn set(&self, now: u64) {
        self.now.store(now, Ordering::SeqCst);
    }

    pub fn advance(&self, secs: u64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_unix(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}
