// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Low-level memory helpers shared by the Airlock crates.
//!
//! Two families live here:
//!
//! - **Zeroing**: writes that the optimizer is not allowed to drop, even when
//!   the storage is about to be freed.
//! - **Single-pass copies**: volatile reads out of memory another party may be
//!   writing to, so every element is fetched exactly once.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

use core::ptr;
use core::sync::atomic::{Ordering, compiler_fence};

/// Verifies that every byte of a slice is zero.
///
/// # Example
///
/// ```
/// use airlock_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 10]));
/// assert!(!is_slice_zeroized(&[0u8, 1, 0, 0]));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Zeroes the `size_of::<T>()` bytes behind `dst` with volatile stores.
///
/// # Safety
///
/// - `dst` must be valid for writes of `size_of::<T>()` bytes.
/// - The all-zero bit pattern must be a valid `T`, and `T` must not need
///   dropping (the previous value is overwritten, not dropped).
///
/// # Example
///
/// ```
/// use airlock_util::zeroize_raw;
///
/// let mut pin = 0xDEAD_BEEFu32;
/// unsafe { zeroize_raw(&mut pin) };
/// assert_eq!(pin, 0);
/// ```
#[inline(never)]
pub unsafe fn zeroize_raw<T>(dst: *mut T) {
    let base = dst.cast::<u8>();
    for offset in 0..core::mem::size_of::<T>() {
        // SAFETY: caller guarantees `dst` is writable for size_of::<T>() bytes.
        unsafe { ptr::write_volatile(base.add(offset), 0) };
    }
    compiler_fence(Ordering::SeqCst);
}

/// Returns `true` if all `size_of::<T>()` bytes behind `src` are zero.
///
/// # Safety
///
/// `src` must be valid for reads of `size_of::<T>()` bytes, and `T` must
/// have no padding bytes (every byte must be initialized).
#[inline(never)]
pub unsafe fn is_raw_zeroized<T>(src: *const T) -> bool {
    let base = src.cast::<u8>();
    (0..core::mem::size_of::<T>()).all(|offset| {
        // SAFETY: caller guarantees `src` is readable and fully initialized.
        unsafe { ptr::read_volatile(base.add(offset)) == 0 }
    })
}

/// Copies `dst.len()` elements starting at `src` into `dst`, fetching every
/// source element with exactly one volatile read.
///
/// Unlike `ptr::copy_nonoverlapping`, the compiler may neither re-read the
/// source nor merge the reads with later accesses, so the destination is a
/// snapshot of what the source held at the moment each element was fetched.
///
/// # Safety
///
/// - `src` must be valid for reads of `dst.len()` elements of `T`.
/// - `src` must be properly aligned for `T`.
/// - The source range must not overlap `dst`.
///
/// # Example
///
/// ```
/// use airlock_util::volatile_copy_to_slice;
///
/// let source = [1u16, 2, 3, 4];
/// let mut copy = [0u16; 3];
/// unsafe { volatile_copy_to_slice(source.as_ptr(), &mut copy) };
/// assert_eq!(copy, [1, 2, 3]);
/// ```
#[inline]
pub unsafe fn volatile_copy_to_slice<T: Copy>(src: *const T, dst: &mut [T]) {
    for (index, slot) in dst.iter_mut().enumerate() {
        // SAFETY: caller guarantees `src` is readable for dst.len() elements.
        *slot = unsafe { ptr::read_volatile(src.add(index)) };
    }
    compiler_fence(Ordering::SeqCst);
}
