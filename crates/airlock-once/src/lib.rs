// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Single-shot readers for values that live in memory another party can
//! keep writing to.
//!
//! Asking "what is the value at this address" twice is the seam where a
//! concurrent writer changes the answer between a check and its use. The
//! readers in this crate make the second question impossible:
//!
//! - [`OnceToken`] yields the pointed-to value exactly once.
//! - [`OnceSequenceToken`] yields a bounded sequence in prefixes and never
//!   re-delivers an element.
//!
//! Neither type is `Clone` or `Copy`. Both implement `Default` as the
//! exhausted state, so `core::mem::take` is the explicit "move the right to
//! read out of here" operation and leaves the source with nothing to read.
//!
//! ```rust
//! use airlock_once::OnceToken;
//!
//! let shared = 42u32;
//! let mut token = OnceToken::new(&shared);
//!
//! assert_eq!(token.read(), Some(42));
//! assert_eq!(token.read(), None);
//! ```
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod once_sequence_token;
mod once_token;

pub use once_sequence_token::OnceSequenceToken;
pub use once_token::OnceToken;
