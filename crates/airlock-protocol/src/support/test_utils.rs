// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixtures shared by the protocol tests and downstream crates.

use crate::policy::WordFilter;

/// Word the [`billboard_policy`] refuses.
pub const FORBIDDEN_WORD: &[u8] = b"sucks";

/// Longest message the [`billboard_policy`] copies.
pub const MAX_TEXT_LENGTH: usize = 50;

/// Returns `true` if `needle` occurs anywhere in `haystack`.
///
/// An empty needle occurs everywhere. Independent of [`WordFilter`], so
/// property tests can use it as their oracle.
pub fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}

/// Policy of a public message board: at most [`MAX_TEXT_LENGTH`] bytes, and
/// nothing containing [`FORBIDDEN_WORD`].
pub fn billboard_policy() -> WordFilter {
    WordFilter::new(FORBIDDEN_WORD, MAX_TEXT_LENGTH)
}
