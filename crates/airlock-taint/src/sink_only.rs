// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::marker::PhantomData;
use core::ptr::{self, NonNull};

/// A destination that can be overwritten but never read through this handle.
///
/// A component that both reads and writes a shared result slot gives the
/// other side two points to race against: it can watch the slot to learn a
/// pending decision, or overwrite it between the decision and a later
/// re-read. `SinkOnly` removes the read side entirely.
///
/// ```rust
/// use airlock_taint::SinkOnly;
///
/// let mut slot = 16;
/// {
///     let mut sink = SinkOnly::new(&mut slot);
///     sink.assign(18);
/// }
/// assert_eq!(slot, 18);
/// ```
///
/// There is no accessor for the current contents:
///
/// ```rust,compile_fail
/// use airlock_taint::SinkOnly;
///
/// let mut slot = 16;
/// let sink = SinkOnly::new(&mut slot);
/// let peeked = *sink;
/// ```
pub struct SinkOnly<'a, T: Copy> {
    destination: NonNull<T>,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T: Copy> SinkOnly<'a, T> {
    /// Creates a sink over a borrowed destination.
    pub fn new(destination: &'a mut T) -> Self {
        Self {
            destination: NonNull::from(destination),
            _marker: PhantomData,
        }
    }

    /// Creates a sink over a raw destination; `None` if it is null.
    ///
    /// # Safety
    ///
    /// `destination` must be aligned for `T` and valid for writes of
    /// `size_of::<T>()` bytes for the whole lifetime `'a`.
    pub unsafe fn from_raw(destination: *mut T) -> Option<Self> {
        NonNull::new(destination).map(|destination| Self {
            destination,
            _marker: PhantomData,
        })
    }

    /// Stores `value` at the destination with a single volatile write.
    pub fn assign(&mut self, value: T) {
        // SAFETY: the constructors guarantee an aligned, writable destination
        // for 'a; `T: Copy` has no drop glue to skip.
        unsafe { ptr::write_volatile(self.destination.as_ptr(), value) };
    }
}

impl<T: Copy> fmt::Debug for SinkOnly<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SinkOnly(..)")
    }
}
