// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::marker::PhantomData;
use core::ptr::{self, NonNull};

use airlock_zero::Plain;

/// Reads the value behind an address at most once.
///
/// The first [`read`](OnceToken::read) copies the value with a single
/// volatile load and marks the token consumed; every later call returns
/// `None`, whatever has been written to the address since.
///
/// Moving a token moves the right to read. `core::mem::take` leaves the
/// source consumed and hands the unread state to the destination:
///
/// ```rust
/// use airlock_once::OnceToken;
///
/// let shared = 7u64;
/// let mut first = OnceToken::new(&shared);
/// let mut second = core::mem::take(&mut first);
///
/// assert_eq!(first.read(), None);
/// assert_eq!(second.read(), Some(7));
/// ```
///
/// Duplicating a token would let two holders read the same value:
///
/// ```rust,compile_fail
/// use airlock_once::OnceToken;
///
/// let shared = 7u64;
/// let token = OnceToken::new(&shared);
/// let copy = token.clone();
/// ```
///
/// ```rust,compile_fail
/// use airlock_once::OnceToken;
///
/// fn duplicate<T: Copy>(value: T) -> (T, T) {
///     (value, value)
/// }
///
/// let shared = 7u64;
/// let (_a, _b) = duplicate(OnceToken::new(&shared));
/// ```
pub struct OnceToken<'a, T: Plain> {
    source: Option<NonNull<T>>,
    _marker: PhantomData<&'a T>,
}

impl<'a, T: Plain> OnceToken<'a, T> {
    /// Creates an unread token over a borrowed value.
    pub fn new(source: &'a T) -> Self {
        Self {
            source: Some(NonNull::from(source)),
            _marker: PhantomData,
        }
    }

    /// Creates an unread token over a raw address.
    ///
    /// A null `source` yields an already consumed token.
    ///
    /// # Safety
    ///
    /// Unless null, `source` must be aligned for `T` and valid for reads of
    /// `size_of::<T>()` bytes for the whole lifetime `'a`. Other parties may
    /// write to it concurrently; the token only ever reads it once.
    pub unsafe fn from_raw(source: *const T) -> Self {
        Self {
            source: NonNull::new(source.cast_mut()),
            _marker: PhantomData,
        }
    }

    /// Copies the value out on the first call; returns `None` afterwards.
    pub fn read(&mut self) -> Option<T> {
        let source = self.source.take()?;

        // SAFETY: the constructors guarantee `source` is aligned and readable
        // for 'a; `T: Plain` accepts whatever bits are there.
        Some(unsafe { ptr::read_volatile(source.as_ptr()) })
    }

    /// Returns `true` once there is nothing left to read.
    #[inline]
    pub fn is_consumed(&self) -> bool {
        self.source.is_none()
    }
}

impl<T: Plain> Default for OnceToken<'_, T> {
    fn default() -> Self {
        Self {
            source: None,
            _marker: PhantomData,
        }
    }
}

impl<T: Plain> fmt::Debug for OnceToken<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnceToken")
            .field("consumed", &self.is_consumed())
            .finish()
    }
}
