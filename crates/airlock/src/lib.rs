// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Safe consumption of untrusted data from shared memory in Rust.</em></p>
//!
//! ---
//!
//! Airlock is a set of small ownership primitives for code that has to read
//! what another, hostile party keeps writing: a kernel reading a syscall
//! argument, a firmware reading a mailbox, a service reading a shared ring.
//!
//! # Features
//!
//! - 🔂 **Read once**: [`OnceToken`](once::OnceToken) and
//!   [`OnceSequenceToken`](once::OnceSequenceToken) deliver each value at most
//!   once, so there is no second read to race against
//! - 🧪 **Untrusted until proven**: [`Tainted`](taint::Tainted) only lets a
//!   value out through a sanitizer or a predicate
//! - ✍️ **Write-only results**: [`SinkOnly`](taint::SinkOnly) reports a
//!   decision without any way to read it back
//! - 🧹 **No stale secrets**: [`SecretValue`](secret::SecretValue) zeroes its
//!   storage on transfer and on drop
//! - 🛂 **End-to-end validator**: [`Validator`](protocol::Validator) copies a
//!   record once, checks its pointers, copies the content and judges the copy
//! - 📦 **`no_std` compatible**: only `alloc` is required
//!
//! # Quick Start
//!
//! ```rust
//! use airlock::protocol::{FnPolicy, Mailbox, Status, Validator};
//!
//! let mailbox = Mailbox::default();
//! let policy = FnPolicy::new(
//!     |content: &[u8]| content.is_ascii(),
//!     |length: usize| length.min(64),
//! );
//! let mut validator = Validator::new(policy, mailbox.region());
//!
//! let accepted = validator.process(mailbox.post(b"hello")?)?;
//!
//! assert_eq!(accepted.as_str(), Some("hello"));
//! assert_eq!(mailbox.status(), Some(Status::Accepted));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! See [demos/billboard](https://github.com/memparanoid/airlock/tree/main/demos/billboard)
//! for the full attack walkthrough.
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]

pub mod support;

pub use airlock_once as once;
pub use airlock_protocol as protocol;
pub use airlock_secret as secret;
pub use airlock_taint as taint;
pub use airlock_util as util;
pub use airlock_zero as zero;
