// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Caller-supplied decisions: what content is acceptable, which addresses a
//! record may reference, and who hears about the outcome.

use crate::status::Status;

/// Judges message content and bounds its length.
pub trait ContentPolicy {
    /// Returns `true` if `content` is acceptable.
    ///
    /// Called exactly once per record, on the validator's private copy.
    fn accept(&self, content: &[u8]) -> bool;

    /// Maps an untrusted length to the number of bytes the validator will
    /// copy.
    ///
    /// Only shrinking takes effect: the validator copies at most `length`
    /// bytes whatever this returns.
    fn clamp_length(&self, length: usize) -> usize;
}

/// [`ContentPolicy`] built from two closures.
///
/// ```rust
/// use airlock_protocol::{ContentPolicy, FnPolicy};
///
/// let policy = FnPolicy::new(|content: &[u8]| content.is_ascii(), |len: usize| len.min(8));
///
/// assert!(policy.accept(b"plain"));
/// assert!(!policy.accept("ñ".as_bytes()));
/// assert_eq!(policy.clamp_length(100), 8);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnPolicy<A, C> {
    accept: A,
    clamp: C,
}

impl<A, C> FnPolicy<A, C>
where
    A: Fn(&[u8]) -> bool,
    C: Fn(usize) -> usize,
{
    /// Wraps an acceptance predicate and a length clamp.
    pub fn new(accept: A, clamp: C) -> Self {
        Self { accept, clamp }
    }
}

impl<A, C> ContentPolicy for FnPolicy<A, C>
where
    A: Fn(&[u8]) -> bool,
    C: Fn(usize) -> usize,
{
    fn accept(&self, content: &[u8]) -> bool {
        (self.accept)(content)
    }

    fn clamp_length(&self, length: usize) -> usize {
        (self.clamp)(length).min(length)
    }
}

/// [`ContentPolicy`] for public text: refuses content containing a word and
/// truncates everything to a maximum length.
///
/// ```rust
/// use airlock_protocol::{ContentPolicy, WordFilter};
///
/// let policy = WordFilter::new(b"sucks", 8);
///
/// assert!(policy.accept(b"Rust rocks!"));
/// assert!(!policy.accept(b"Rust sucks!"));
/// assert_eq!(policy.clamp_length(100), 8);
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct WordFilter {
    /// Content containing these bytes is refused. Empty refuses nothing.
    pub forbidden: &'static [u8],
    /// Longest content copied; longer content is truncated.
    pub max_length: usize,
}

impl WordFilter {
    /// Refuses `forbidden`, truncates to `max_length`.
    pub const fn new(forbidden: &'static [u8], max_length: usize) -> Self {
        Self {
            forbidden,
            max_length,
        }
    }
}

impl ContentPolicy for WordFilter {
    fn accept(&self, content: &[u8]) -> bool {
        self.forbidden.is_empty()
            || !content
                .windows(self.forbidden.len())
                .any(|window| window == self.forbidden)
    }

    fn clamp_length(&self, length: usize) -> usize {
        length.min(self.max_length)
    }
}

/// Decides which address ranges a record may point into.
///
/// # Safety
///
/// The validator dereferences any range this oracle permits: it reads
/// `len` bytes at a permitted content address and writes one
/// [`Status`] at a permitted result address. Implementors must only
/// return `true` for ranges that stay valid for volatile reads and writes
/// for as long as the oracle itself is borrowed.
pub unsafe trait AddressOracle {
    /// Returns `true` if `[address, address + len)` may be accessed.
    fn permits(&self, address: usize, len: usize) -> bool;
}

// SAFETY: forwards to an oracle that upholds the contract; the borrow keeps
// it alive.
unsafe impl<O: AddressOracle + ?Sized> AddressOracle for &O {
    fn permits(&self, address: usize, len: usize) -> bool {
        (**self).permits(address, len)
    }
}

/// Hears every decision right after it has been written to the result
/// slot.
///
/// The hook runs after the content has been copied and judged, which is
/// exactly the moment an attacker would try to swap the content or forge
/// the status. Tests use it to stage those attacks deterministically.
pub trait DecisionObserver {
    /// Called once per decided record.
    fn on_decision(&mut self, status: Status);
}

impl DecisionObserver for () {
    #[inline(always)]
    fn on_decision(&mut self, _status: Status) {}
}

/// [`DecisionObserver`] wrapping a closure.
#[derive(Debug, Clone, Copy)]
pub struct FnObserver<F>(pub F);

impl<F: FnMut(Status)> DecisionObserver for FnObserver<F> {
    fn on_decision(&mut self, status: Status) {
        (self.0)(status)
    }
}
