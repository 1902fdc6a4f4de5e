// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use airlock_util::volatile_copy_to_slice;
use airlock_zero::{Plain, zeroed};

/// Reads a bounded sequence in prefixes, never delivering an element twice.
///
/// The token is a cursor: a base address plus the number of elements still
/// unread. Each [`read`](OnceSequenceToken::read) copies
/// `min(requested, remaining)` elements, advances the cursor past them and
/// returns how many were copied. Across any number of calls the total never
/// exceeds the length given at construction, and consecutive results
/// concatenate to the original sequence with no gap and no overlap.
///
/// ```rust
/// use airlock_once::OnceSequenceToken;
///
/// let shared = [1.0f32, 2.0, 3.5, 4.2, 213123.23];
/// let mut token = OnceSequenceToken::new(&shared);
/// let mut buffer = [f32::INFINITY; 3];
///
/// assert_eq!(token.read(&mut buffer[..1]), 1);
/// assert_eq!(buffer[0], 1.0);
///
/// assert_eq!(token.read(&mut buffer), 3);
/// assert_eq!(buffer, [2.0, 3.5, 4.2]);
///
/// assert_eq!(token.read(&mut buffer), 1);
/// assert_eq!(buffer[0], 213123.23);
///
/// assert_eq!(token.read(&mut buffer), 0);
/// ```
///
/// ```rust,compile_fail
/// use airlock_once::OnceSequenceToken;
///
/// let shared = [1u8, 2, 3];
/// let token = OnceSequenceToken::new(&shared);
/// let copy = token.clone();
/// ```
pub struct OnceSequenceToken<'a, T: Plain> {
    cursor: NonNull<T>,
    remaining: usize,
    _marker: PhantomData<&'a [T]>,
}

impl<'a, T: Plain> OnceSequenceToken<'a, T> {
    /// Creates a token over a borrowed slice.
    pub fn new(source: &'a [T]) -> Self {
        Self {
            cursor: NonNull::from(source).cast(),
            remaining: source.len(),
            _marker: PhantomData,
        }
    }

    /// Creates a token over `len` elements starting at `source`.
    ///
    /// A null `source` yields an exhausted token.
    ///
    /// # Safety
    ///
    /// Unless null, `source` must be aligned for `T` and valid for reads of
    /// `len` elements for the whole lifetime `'a`. Other parties may write to
    /// it concurrently; each element is read at most once.
    pub unsafe fn from_raw(source: *const T, len: usize) -> Self {
        match NonNull::new(source.cast_mut()) {
            Some(cursor) => Self {
                cursor,
                remaining: len,
                _marker: PhantomData,
            },
            None => Self::default(),
        }
    }

    /// Copies up to `destination.len()` unread elements into `destination`.
    ///
    /// Returns the number of elements copied; `0` when `destination` is
    /// empty or nothing is left, in which case no memory is touched.
    pub fn read(&mut self, destination: &mut [T]) -> usize {
        let count = destination.len().min(self.remaining);
        if count == 0 {
            return 0;
        }

        // SAFETY: the constructors guarantee `remaining` readable elements
        // at `cursor`, and `count <= remaining`.
        unsafe {
            volatile_copy_to_slice(self.cursor.as_ptr(), &mut destination[..count]);
            self.cursor = self.cursor.add(count);
        }
        self.remaining -= count;

        count
    }

    /// Copies up to `requested` unread elements into a new `Vec`.
    pub fn read_to_vec(&mut self, requested: usize) -> Vec<T> {
        let mut buffer = vec![zeroed::<T>(); requested.min(self.remaining)];
        let copied = self.read(&mut buffer);
        debug_assert_eq!(copied, buffer.len());
        buffer
    }

    /// Number of elements not yet delivered.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Returns `true` once every element has been delivered.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

impl<T: Plain> Default for OnceSequenceToken<'_, T> {
    fn default() -> Self {
        Self {
            cursor: NonNull::dangling(),
            remaining: 0,
            _marker: PhantomData,
        }
    }
}

impl<T: Plain> fmt::Debug for OnceSequenceToken<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnceSequenceToken")
            .field("remaining", &self.remaining)
            .finish()
    }
}
