// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ptr;

use airlock_taint::Tainted;
use airlock_zero::Plain;

use crate::status::Status;

/// The fixed-layout command a producer posts into shared memory.
///
/// Every field is attacker-chosen. `content` and `result` are plain
/// addresses; nothing about them is trusted until the validator has checked
/// them against its oracle.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[repr(C)]
pub struct CommandRecord {
    /// Start of the message bytes.
    pub content: *const u8,
    /// Claimed message length in bytes.
    pub length: usize,
    /// Where the producer wants the decision written.
    pub result: *mut Status,
}

// SAFETY: repr(C) of three pointer-sized fields (no padding); every bit
// pattern is a valid pointer or usize value.
unsafe impl Plain for CommandRecord {}

impl CommandRecord {
    /// Builds a record from its three fields.
    pub const fn new(content: *const u8, length: usize, result: *mut Status) -> Self {
        Self {
            content,
            length,
            result,
        }
    }
}

impl Default for CommandRecord {
    fn default() -> Self {
        Self::new(ptr::null(), 0, ptr::null_mut())
    }
}

/// A [`CommandRecord`] after it has been copied out, with every field still
/// marked as untrusted.
#[derive(Debug)]
pub struct UntrustedCommand {
    /// Untrusted content address.
    pub content: Tainted<*const u8>,
    /// Untrusted length.
    pub length: Tainted<usize>,
    /// Untrusted result address.
    pub result: Tainted<*mut Status>,
}

impl From<CommandRecord> for UntrustedCommand {
    fn from(record: CommandRecord) -> Self {
        Self {
            content: Tainted::new(record.content),
            length: Tainted::new(record.length),
            result: Tainted::new(record.result),
        }
    }
}
