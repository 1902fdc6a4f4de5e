// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cell::UnsafeCell;
use core::fmt;
use core::mem;
use core::ops::Range;
use core::ptr;

use airlock_once::{OnceSequenceToken, OnceToken};
use airlock_zero::Plain;

use crate::error::RegionError;
use crate::policy::AddressOracle;

/// A block of memory both sides of the exchange can write to.
///
/// Models an OS shared-memory mapping inside one process: the producer
/// places records, messages and status slots at byte offsets, and may keep
/// rewriting any of them between (and during) the validator's steps. Every
/// access goes through volatile reads and writes on raw pointers; the
/// region never hands out a Rust reference to its contents.
///
/// The backing storage is `u64`-aligned and zero-initialized.
///
/// The region is not `Sync`. Volatile accesses are not atomic, so two
/// threads writing the same bytes through safe methods would be a data
/// race:
///
/// ```rust,compile_fail
/// fn shared_between_threads<T: Sync>() {}
///
/// shared_between_threads::<airlock_protocol::SharedRegion>();
/// ```
pub struct SharedRegion {
    words: Box<[UnsafeCell<u64>]>,
    len: usize,
}

impl SharedRegion {
    /// Creates a zero-filled region of `len` bytes.
    pub fn new(len: usize) -> Self {
        let words: Vec<UnsafeCell<u64>> = (0..len.div_ceil(mem::size_of::<u64>()))
            .map(|_| UnsafeCell::new(0))
            .collect();

        Self {
            words: words.into_boxed_slice(),
            len,
        }
    }

    /// Region size in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for a zero-length region.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Address of the first byte.
    #[inline]
    pub fn base(&self) -> *mut u8 {
        UnsafeCell::raw_get(self.words.as_ptr()).cast::<u8>()
    }

    /// The region's address range.
    pub fn span(&self) -> Range<usize> {
        let start = self.base() as usize;
        start..start + self.len
    }

    /// Returns `true` if `[address, address + len)` lies inside the region.
    ///
    /// A zero-length range must still start inside the region (or exactly at
    /// its end), so a null or wild address never passes.
    pub fn contains(&self, address: usize, len: usize) -> bool {
        let span = self.span();
        match address.checked_add(len) {
            Some(end) => address >= span.start && end <= span.end,
            None => false,
        }
    }

    /// Pointer to a `T` at `offset`, checked for bounds and alignment.
    pub fn ptr_at<T>(&self, offset: usize) -> Result<*mut T, RegionError> {
        self.check(offset, mem::size_of::<T>())?;

        let align = mem::align_of::<T>();
        // `base` is u64-aligned, so offset alignment is address alignment
        // for every T with align <= 8.
        if (self.base() as usize + offset) % align != 0 {
            return Err(RegionError::Misaligned { offset, align });
        }

        // SAFETY: `check` proved `offset + size_of::<T>() <= len`.
        Ok(unsafe { self.base().add(offset) }.cast::<T>())
    }

    /// Copies `bytes` into the region at `offset`, one volatile store per
    /// byte.
    pub fn write_bytes(&self, offset: usize, bytes: &[u8]) -> Result<(), RegionError> {
        self.check(offset, bytes.len())?;
        let base = self.base();

        for (index, byte) in bytes.iter().enumerate() {
            // SAFETY: `check` covered `[offset, offset + bytes.len())`.
            unsafe { ptr::write_volatile(base.add(offset + index), *byte) };
        }

        Ok(())
    }

    /// Stores `value` at `offset` and returns its address.
    pub fn write_value<T: Plain>(&self, offset: usize, value: T) -> Result<*mut T, RegionError> {
        let dst = self.ptr_at::<T>(offset)?;
        // SAFETY: `ptr_at` checked bounds and alignment; `T: Plain` owns
        // nothing, so overwriting without dropping is fine.
        unsafe { ptr::write_volatile(dst, value) };

        Ok(dst)
    }

    /// Reads the `T` currently stored at `offset`.
    ///
    /// This is the producer's view of its own memory (for example, polling
    /// its status slot). The validator never uses it.
    pub fn read_value<T: Plain>(&self, offset: usize) -> Result<T, RegionError> {
        let src = self.ptr_at::<T>(offset)?;
        // SAFETY: checked bounds and alignment; `T: Plain` accepts any bits.
        Ok(unsafe { ptr::read_volatile(src) })
    }

    /// Copies `len` bytes out of the region.
    pub fn read_bytes(&self, offset: usize, len: usize) -> Result<Vec<u8>, RegionError> {
        Ok(self.once_sequence::<u8>(offset, len)?.read_to_vec(len))
    }

    /// Single-shot reader for the `T` at `offset`.
    pub fn once<T: Plain>(&self, offset: usize) -> Result<OnceToken<'_, T>, RegionError> {
        let src = self.ptr_at::<T>(offset)?;
        // SAFETY: checked bounds and alignment; the region outlives '_.
        Ok(unsafe { OnceToken::from_raw(src) })
    }

    /// Single-pass reader for `count` consecutive `T`s at `offset`.
    pub fn once_sequence<T: Plain>(
        &self,
        offset: usize,
        count: usize,
    ) -> Result<OnceSequenceToken<'_, T>, RegionError> {
        let bytes = count
            .checked_mul(mem::size_of::<T>())
            .ok_or(RegionError::OutOfBounds {
                offset,
                len: usize::MAX,
                capacity: self.len,
            })?;
        self.check(offset, bytes)?;
        if count == 0 {
            return Ok(OnceSequenceToken::default());
        }
        let src = self.ptr_at::<T>(offset)?;

        // SAFETY: `[offset, offset + count * size_of::<T>())` is in bounds
        // and aligned; the region outlives '_.
        Ok(unsafe { OnceSequenceToken::from_raw(src, count) })
    }

    /// Places `record` at `offset` and hands back the consumer's single-shot
    /// token for it.
    pub fn post<T: Plain>(&self, offset: usize, record: T) -> Result<OnceToken<'_, T>, RegionError> {
        self.write_value(offset, record)?;
        self.once(offset)
    }

    /// Overwrites `len` bytes at `offset` with `pattern`.
    pub fn fill(&self, offset: usize, len: usize, pattern: u8) -> Result<(), RegionError> {
        self.check(offset, len)?;
        let base = self.base();
        for index in offset..offset + len {
            // SAFETY: `check` covered the range.
            unsafe { ptr::write_volatile(base.add(index), pattern) };
        }

        Ok(())
    }

    fn check(&self, offset: usize, len: usize) -> Result<(), RegionError> {
        match offset.checked_add(len) {
            Some(end) if end <= self.len => Ok(()),
            _ => Err(RegionError::OutOfBounds {
                offset,
                len,
                capacity: self.len,
            }),
        }
    }
}

// SAFETY: the region's span is backed by its own allocation, which stays
// alive (and readable/writable through raw pointers) for as long as the
// oracle is borrowed.
unsafe impl AddressOracle for SharedRegion {
    fn permits(&self, address: usize, len: usize) -> bool {
        self.contains(address, len)
    }
}

impl fmt::Debug for SharedRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedRegion")
            .field("span", &self.span())
            .finish()
    }
}

