// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # airlock-zero
//!
//! Zeroization traits and the [`Plain`] layout capability.
//!
//! - [`Plain`]: marker for types that are a flat byte sequence (no padding,
//!   no pointers owned, every bit pattern valid). The single-shot readers
//!   only copy `Plain` values out of shared memory, and `SecretValue` only
//!   holds `Plain` values.
//! - [`FastZeroizable`] / [`ZeroizationProbe`]: zero a value in place and
//!   check that it happened.
//! - [`ZeroizeOnDropSentinel`] / [`AssertZeroizeOnDrop`]: verify from a test
//!   that a type zeroized itself in `Drop`, without reading freed memory.
//!
//! ```rust
//! use airlock_zero::{Plain, as_bytes, zeroed};
//!
//! #[derive(Clone, Copy)]
//! #[repr(C)]
//! struct Header {
//!     magic: u32,
//!     length: u32,
//! }
//!
//! // SAFETY: repr(C), two u32 fields, no padding, any bit pattern is valid.
//! unsafe impl Plain for Header {}
//!
//! let header: Header = zeroed();
//! assert!(as_bytes(&header).iter().all(|b| *b == 0));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod assert;
mod plain;
mod traits;
mod zeroize_on_drop_sentinel;

pub use assert::assert_zeroize_on_drop;
pub use plain::{Plain, as_bytes, zeroed};
pub use traits::{AssertZeroizeOnDrop, FastZeroizable, ZeroizationProbe};
pub use zeroize_on_drop_sentinel::ZeroizeOnDropSentinel;
