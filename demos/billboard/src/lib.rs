// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The "friendly billboard": a device that shows whatever message a user
//! posts into its shared mailbox, unless the message is unfriendly.
//!
//! [`Firmware`] comes in two generations: a naive one that keeps reading
//! the mailbox while it works, and one built on Airlock's
//! [`Validator`](airlock::protocol::Validator). [`exploits`] replays the
//! classic attacks on both; [`walkthrough`] shows each primitive on its own.

use airlock::protocol::WordFilter;

pub mod exploits;
pub mod walkthrough;

mod firmware;

pub use firmware::Firmware;

/// What the billboard is willing to display: up to 50 bytes, nothing
/// containing "sucks".
pub const BILLBOARD_POLICY: WordFilter = WordFilter::new(b"sucks", 50);
