// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Secret container whose storage never holds stale plaintext.
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

use alloc::boxed::Box;
use core::fmt;
use core::ptr;

use airlock_util::{is_raw_zeroized, zeroize_raw};
use airlock_zero::{
    AssertZeroizeOnDrop, FastZeroizable, Plain, ZeroizationProbe, ZeroizeOnDropSentinel,
    assert_zeroize_on_drop, zeroed,
};

/// Owns exactly one secret `T` and zeroes its storage whenever the value
/// stops being reachable through it.
///
/// At every moment the storage holds either the live value or all-zero
/// bytes:
///
/// - [`transfer`](SecretValue::transfer) moves the bits into a new container
///   and zeroes the source in the same call;
/// - `Drop` zeroes the storage with volatile writes before it is released.
///
/// The value lives on the heap, so moving a `SecretValue` around (returning
/// it, storing it in a struct) only moves a pointer and never leaves a stray
/// copy of the secret bytes in an old stack slot.
///
/// # Design Principles
///
/// - **No `Deref`/`Clone`/`Copy`**: access is scoped through closures
/// - **Redacted `Debug`**: prints `[REDACTED SecretValue]`
/// - **Drop verification**: contains a [`ZeroizeOnDropSentinel`]
///
/// # Usage
///
/// ```rust
/// use airlock_secret::SecretValue;
/// use airlock_zero::ZeroizationProbe;
///
/// let mut key = SecretValue::<[u8; 16]>::new(|key| {
///     for (i, byte) in key.iter_mut().enumerate() {
///         *byte = i as u8;
///     }
/// });
///
/// key.with_exclusive_access(|key| key[0] = 0xFF);
/// assert!(key.with_access(|key| key[0] == 0xFF && key[15] == 15));
///
/// let moved = key.transfer();
/// assert!(key.is_zeroized());
/// assert!(!moved.is_zeroized());
/// ```
///
/// A secret cannot be duplicated:
///
/// ```rust,compile_fail
/// use airlock_secret::SecretValue;
///
/// let secret = SecretValue::<u64>::default();
/// let copy = secret.clone();
/// ```
///
/// Only flat, padding-free types can be held:
///
/// ```rust,compile_fail
/// use airlock_secret::SecretValue;
///
/// let secret = SecretValue::<Vec<u8>>::default();
/// ```
///
/// # ⚠️ Warning: returning copies out of the closures
///
/// `with_access(|k| *k)` hands back a plain copy that nobody will zeroize.
/// Keep secret-dependent work inside the closure and return derived,
/// non-secret results only.
pub struct SecretValue<T: Plain> {
    inner: Box<T>,
    __sentinel: ZeroizeOnDropSentinel,
}

impl<T: Plain> fmt::Debug for SecretValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED SecretValue]")
    }
}

impl<T: Plain> Default for SecretValue<T> {
    fn default() -> Self {
        Self {
            inner: Box::new(zeroed()),
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }
}

impl<T: Plain> SecretValue<T> {
    /// Creates a secret from zeroed storage, then runs `init` on it.
    ///
    /// The secret is built directly in its final location; no plaintext
    /// copy exists anywhere else.
    pub fn new(init: impl FnOnce(&mut T)) -> Self {
        let mut secret = Self::default();
        init(&mut *secret.inner);
        secret
    }

    /// Creates a secret by moving the value out of `sensitive_data`,
    /// zeroizing the source.
    ///
    /// ```rust
    /// use airlock_secret::SecretValue;
    ///
    /// let mut pin = 0xDEAD_BEEFu32;
    /// let secret = SecretValue::from_mut(&mut pin);
    ///
    /// assert_eq!(pin, 0);
    /// assert_eq!(secret.with_access(|pin| *pin == 0xDEAD_BEEF), true);
    /// ```
    pub fn from_mut(sensitive_data: &mut T) -> Self {
        let mut secret = Self::default();
        secret.replace(sensitive_data);
        secret
    }

    /// Replaces the held value, zeroizing both the old value and the source.
    pub fn replace(&mut self, value: &mut T) {
        let dst: *mut T = &mut *self.inner;
        let src: *mut T = value;

        // SAFETY: both pointers come from live exclusive borrows of `T`;
        // `T: Plain` makes all-zero valid and has no drop glue.
        unsafe {
            zeroize_raw(dst);
            ptr::copy_nonoverlapping(src, dst, 1);
            zeroize_raw(src);
        }
    }

    /// Runs `f` with exclusive, mutable access to the held value.
    #[inline]
    pub fn with_exclusive_access<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut *self.inner)
    }

    /// Runs `f` with shared, read-only access to the held value.
    #[inline]
    pub fn with_access<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.inner)
    }

    /// Moves the secret into a new container, zeroing this one.
    ///
    /// The destination receives the live bits; this container's storage is
    /// all zero when the call returns. There is no state in between that a
    /// caller could observe or skip.
    pub fn transfer(&mut self) -> Self {
        let mut destination = Self::default();
        let src: *mut T = &mut *self.inner;
        let dst: *mut T = &mut *destination.inner;

        // SAFETY: distinct heap allocations, both valid for one `T`.
        unsafe {
            ptr::copy_nonoverlapping(src, dst, 1);
            zeroize_raw(src);
        }

        destination
    }
}

impl<T: Plain> FastZeroizable for SecretValue<T> {
    fn fast_zeroize(&mut self) {
        // SAFETY: the box is live and `T: Plain` accepts the all-zero pattern.
        unsafe { zeroize_raw::<T>(&mut *self.inner) };
        self.__sentinel.fast_zeroize();
    }
}

impl<T: Plain> ZeroizationProbe for SecretValue<T> {
    fn is_zeroized(&self) -> bool {
        // SAFETY: the box is live and `T: Plain` has no padding.
        unsafe { is_raw_zeroized::<T>(&*self.inner) }
    }
}

impl<T: Plain> AssertZeroizeOnDrop for SecretValue<T> {
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel {
        self.__sentinel.clone()
    }

    fn assert_zeroize_on_drop(self) {
        assert_zeroize_on_drop(self);
    }
}

impl<T: Plain> Drop for SecretValue<T> {
    fn drop(&mut self) {
        self.fast_zeroize();
    }
}
