// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Accepting records from memory the other side can keep writing to.
//!
//! A [`CommandRecord`] is `{ content pointer, content length, result
//! pointer }`, posted by an untrusted producer into a [`SharedRegion`]. The
//! [`Validator`] consumes it in a fixed order:
//!
//! 1. Copy the whole record out in one shot through a `OnceToken`. From here
//!    on, only the copy exists as far as decisions are concerned.
//! 2. Wrap every field as `Tainted` ([`UntrustedCommand`]).
//! 3. Clamp the length (sanitize).
//! 4. Verify both pointers against the [`AddressOracle`].
//! 5. Copy the content itself (not a view of it) into owned storage.
//! 6. Judge the owned copy with the [`ContentPolicy`].
//! 7. Report the local decision through a `SinkOnly`; never read it back.
//!
//! ```rust
//! use airlock_protocol::{FnPolicy, Mailbox, Status, Validator};
//!
//! let mailbox = Mailbox::default();
//! let policy = FnPolicy::new(
//!     |content: &[u8]| !content.windows(5).any(|w| w == b"sucks"),
//!     |length: usize| length.min(50),
//! );
//! let mut validator = Validator::new(policy, mailbox.region());
//!
//! let accepted = validator.process(mailbox.post(b"hello")?)?;
//! assert_eq!(accepted.as_bytes(), b"hello");
//! assert_eq!(mailbox.status(), Some(Status::Accepted));
//!
//! assert!(validator.process(mailbox.post(b"hello sucks")?).is_err());
//! assert_eq!(mailbox.status(), Some(Status::Rejected));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

#[cfg(any(test, feature = "test-utils"))]
pub mod support;

mod error;
mod mailbox;
mod policy;
mod record;
mod region;
mod status;
mod validator;

pub use error::{RegionError, ValidationError};
pub use mailbox::{Mailbox, MailboxLayout};
pub use policy::{
    AddressOracle, ContentPolicy, DecisionObserver, FnObserver, FnPolicy, WordFilter,
};
pub use record::{CommandRecord, UntrustedCommand};
pub use region::SharedRegion;
pub use status::Status;
pub use validator::{Accepted, Validator};
