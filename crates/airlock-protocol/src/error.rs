// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for airlock-protocol.
use thiserror::Error;

/// Why the validator refused a record.
///
/// Which variants leave a status behind in the producer's result slot:
///
/// | Variant                   | Slot written        |
/// |---------------------------|---------------------|
/// | `SourceExhausted`         | no                  |
/// | `UntrustedResultPointer`  | no                  |
/// | `UntrustedContentPointer` | yes, `Rejected`     |
/// | `ContentRejected`         | yes, `Rejected`     |
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[repr(u8)]
pub enum ValidationError {
    /// The record token had already been read.
    #[error("record source already consumed")]
    SourceExhausted = 0,

    /// The result pointer is null, misaligned or outside the permitted range.
    #[error("result pointer rejected by address oracle")]
    UntrustedResultPointer = 1,

    /// The content range is outside the permitted range.
    #[error("content pointer rejected by address oracle")]
    UntrustedContentPointer = 2,

    /// The copied content failed the content policy.
    #[error("content rejected by policy")]
    ContentRejected = 3,
}

/// Errors from placing data into a [`SharedRegion`](crate::SharedRegion).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum RegionError {
    /// The requested range does not fit in the region.
    #[error("range at offset {offset} with length {len} exceeds region of {capacity} bytes")]
    OutOfBounds {
        /// Start of the requested range.
        offset: usize,
        /// Length of the requested range in bytes.
        len: usize,
        /// Region size in bytes.
        capacity: usize,
    },

    /// The offset is not a multiple of the value's alignment.
    #[error("offset {offset} is not aligned to {align}")]
    Misaligned {
        /// Requested offset.
        offset: usize,
        /// Required alignment.
        align: usize,
    },
}
