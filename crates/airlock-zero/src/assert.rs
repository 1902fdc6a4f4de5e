// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::any::type_name;

use super::traits::AssertZeroizeOnDrop;

/// Drops `value` and panics unless its `Drop` zeroized it.
///
/// The check goes through a clone of the value's
/// [`ZeroizeOnDropSentinel`](crate::ZeroizeOnDropSentinel), re-armed first so
/// an earlier explicit zeroize cannot satisfy it. Freed memory is never read.
pub fn assert_zeroize_on_drop<T: AssertZeroizeOnDrop>(value: T) {
    let mut observer = value.clone_sentinel();
    observer.reset();

    drop(value);

    assert!(
        observer.is_zeroized(),
        "{} was dropped without zeroizing",
        type_name::<T>()
    );
}
