// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The plain-layout capability.

use core::mem;

/// Types that can be copied as a flat byte sequence.
///
/// A `Plain` type owns nothing (no heap, no handles, no drop glue) and can be
/// reconstructed from any sequence of `size_of::<Self>()` bytes. This is what
/// makes it acceptable to lift one out of memory that an adversary writes to:
/// whatever bits are there, the copy is a valid value.
///
/// # Safety
///
/// Implementors must guarantee that:
///
/// - every bit pattern of `size_of::<Self>()` bytes is a valid `Self`
///   (rules out `bool`, `char`, references, most enums);
/// - the type contains no padding bytes;
/// - the type has no drop glue (implied by `Copy`).
///
/// Raw pointers qualify: an arbitrary address is a valid pointer *value*;
/// whether it may be dereferenced is a separate question, and answering it
/// is exactly what `Tainted::verify` is for.
pub unsafe trait Plain: Copy + 'static {}

macro_rules! impl_plain {
    ($($ty:ty),* $(,)?) => {
        $(
            // SAFETY: primitive integer/float, no padding, any bit pattern valid.
            unsafe impl Plain for $ty {}
        )*
    };
}

impl_plain!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

// SAFETY: zero-sized, trivially valid.
unsafe impl Plain for () {}

// SAFETY: a thin raw pointer is an address; every address is a valid value.
unsafe impl<T: 'static> Plain for *const T {}

// SAFETY: same as `*const T`.
unsafe impl<T: 'static> Plain for *mut T {}

// SAFETY: arrays of padding-free elements have no padding themselves.
unsafe impl<T: Plain, const N: usize> Plain for [T; N] {}

/// Returns the all-zero value of a [`Plain`] type.
///
/// # Example
///
/// ```rust
/// use airlock_zero::zeroed;
///
/// let key: [u8; 16] = zeroed();
/// assert_eq!(key, [0u8; 16]);
/// ```
#[inline(always)]
pub fn zeroed<T: Plain>() -> T {
    // SAFETY: `Plain` guarantees the all-zero pattern is a valid `T`.
    unsafe { mem::zeroed() }
}

/// Views a [`Plain`] value as its raw bytes.
///
/// # Example
///
/// ```rust
/// use airlock_zero::as_bytes;
///
/// let word = 0x0102_0304u32;
/// assert_eq!(as_bytes(&word), &word.to_ne_bytes());
/// ```
#[inline(always)]
pub fn as_bytes<T: Plain>(value: &T) -> &[u8] {
    // SAFETY: `Plain` has no padding, so every byte is initialized; the slice
    // borrows `value` for its whole size.
    unsafe {
        core::slice::from_raw_parts((value as *const T).cast::<u8>(), mem::size_of::<T>())
    }
}
