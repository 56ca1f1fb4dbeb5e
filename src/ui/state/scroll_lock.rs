// SPDX-License-Identifier: MPL-2.0
//! Scroll lock for the catalog content behind modal overlays.
//!
//! The lock counts live [`ScrollLockGuard`]s. The content stays frozen while
//! any guard is alive and becomes scrollable again once the last one is
//! dropped, whichever path released it.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared "content may scroll" state.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the catalog content is currently frozen.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders.load(Ordering::Acquire) > 0
    }

    /// Freezes scrolling until the returned guard is dropped.
    #[must_use = "scrolling is restored as soon as the guard is dropped"]
    pub fn acquire(&self) -> ScrollLockGuard {
        self.holders.fetch_add(1, Ordering::AcqRel);
        ScrollLockGuard {
            holders: Arc::clone(&self.holders),
        }
    }
}

/// Keeps the scroll lock engaged while alive.
#[derive(Debug)]
pub struct ScrollLockGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::AcqRel);
    }
}
