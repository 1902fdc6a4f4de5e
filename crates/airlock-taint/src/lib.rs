// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The two ends of a trust boundary.
//!
//! - [`Tainted`]: a value that came in across the boundary. The only ways
//!   out are [`sanitize`](Tainted::sanitize) (repair) and
//!   [`verify`](Tainted::verify) (accept or reject).
//! - [`SinkOnly`]: a destination that goes out across the boundary. The only
//!   operation is [`assign`](SinkOnly::assign); it cannot be read back.
//!
//! Wrapping a pointer is not the same as wrapping the pointee. Verifying a
//! `Tainted<&[u8]>` that still aliases memory the other side can write only
//! proves what the bytes were while the predicate ran. Copy first, then
//! verify the copy.
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod sink_only;
mod tainted;

pub use sink_only::SinkOnly;
pub use tainted::Tainted;
