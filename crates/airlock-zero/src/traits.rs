// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core traits for systematic zeroization.

use super::zeroize_on_drop_sentinel::ZeroizeOnDropSentinel;

/// Trait for verifying that a value has been zeroized.
///
/// Used in tests and assertions to check that no sensitive data remains in
/// the storage a value controls.
pub trait ZeroizationProbe {
    /// Returns `true` if every byte the value controls is 0.
    fn is_zeroized(&self) -> bool;
}

/// Trait for types that can be zeroized in place.
///
/// Dyn-compatible, so it can be used as `&mut dyn FastZeroizable`.
pub trait FastZeroizable {
    /// Overwrites the value with zeros.
    ///
    /// Implementations must use writes the optimizer cannot elide.
    fn fast_zeroize(&mut self);
}

/// Trait for types that verify zeroization happened before drop.
///
/// Types implementing this trait contain a [`ZeroizeOnDropSentinel`] and mark
/// it from their `Drop` impl. A test clones the sentinel, drops the value and
/// checks the clone, which never requires touching deallocated memory.
pub trait AssertZeroizeOnDrop {
    /// Clones the internal [`ZeroizeOnDropSentinel`] for verification.
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel;

    /// Asserts that zeroization happens when this value is dropped.
    ///
    /// # Panics
    ///
    /// Panics if the value's `Drop` did not zeroize.
    fn assert_zeroize_on_drop(self);
}
