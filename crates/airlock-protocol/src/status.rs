// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Decision reported back to the producer through its result slot.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[repr(u32)]
pub enum Status {
    /// Initial value the producer leaves in the slot.
    #[default]
    Waiting = 0,
    /// The content was accepted.
    Accepted = 1,
    /// The content was refused, or its pointer was.
    Rejected = 2,
}

impl Status {
    /// Decodes a raw slot value; `None` for anything outside the enum.
    ///
    /// The slot lives in shared memory and may contain arbitrary bits, so
    /// it is read as `u32` and decoded here rather than read as `Status`.
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Waiting),
            1 => Some(Self::Accepted),
            2 => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Raw slot encoding.
    #[inline]
    pub fn as_raw(self) -> u32 {
        self as u32
    }
}

