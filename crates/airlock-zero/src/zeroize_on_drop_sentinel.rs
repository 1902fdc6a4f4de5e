// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::FastZeroizable;

/// Runtime verification that zeroization happened before drop.
///
/// Wraps a shared flag (`Arc<AtomicBool>`), initially pristine. Zeroizing the
/// sentinel clears the flag for every clone, so a test can keep a clone
/// around, drop the owner, and still observe whether the owner zeroized.
///
/// The sentinel itself does **not** zeroize on drop; only its owner may mark
/// it. Otherwise every owner would look zeroized.
///
/// ```rust
/// use airlock_zero::{FastZeroizable, ZeroizeOnDropSentinel};
///
/// let mut sentinel = ZeroizeOnDropSentinel::default();
/// let observer = sentinel.clone();
///
/// assert!(!observer.is_zeroized());
/// sentinel.fast_zeroize();
/// assert!(observer.is_zeroized());
/// ```
#[derive(Clone, Debug)]
pub struct ZeroizeOnDropSentinel(Arc<AtomicBool>);

impl PartialEq for ZeroizeOnDropSentinel {
    fn eq(&self, other: &Self) -> bool {
        self.0.load(Ordering::Relaxed) == other.0.load(Ordering::Relaxed)
    }
}

impl Eq for ZeroizeOnDropSentinel {}

impl ZeroizeOnDropSentinel {
    /// Resets the sentinel to the pristine (not zeroized) state.
    pub fn reset(&mut self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once the owner has zeroized.
    pub fn is_zeroized(&self) -> bool {
        !self.0.load(Ordering::Relaxed)
    }
}

impl Default for ZeroizeOnDropSentinel {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl FastZeroizable for ZeroizeOnDropSentinel {
    fn fast_zeroize(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
