// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities re-exported from airlock-protocol

#[cfg(feature = "test-utils")]
pub mod protocol {
    pub use airlock_protocol::support::test_utils::*;
}
