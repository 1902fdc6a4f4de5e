// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

/// A value that crossed a trust boundary and has not been judged yet.
///
/// Every escape consumes the wrapper, so one wrapped value backs exactly one
/// decision:
///
/// - [`sanitize`](Tainted::sanitize) always succeeds and returns whatever the
///   transform makes of the value (clamp a length, mask flags).
/// - [`verify`](Tainted::verify) returns the value if the predicate accepts
///   it and drops it otherwise.
///
/// ```rust
/// use airlock_taint::Tainted;
///
/// for (input, sanitized, verified) in [(5, 5, None), (42, 40, Some(42))] {
///     assert_eq!(Tainted::new(input).sanitize(|x: i32| x.min(40)), sanitized);
///     assert_eq!(Tainted::new(input).verify(|x| *x > 40), verified);
/// }
/// ```
///
/// `Tainted` is deliberately not `Clone`: running a second predicate over the
/// "same" untrusted value would split one decision into two.
///
/// ```rust,compile_fail
/// use airlock_taint::Tainted;
///
/// let length = Tainted::new(64usize);
/// let second_opinion = length.clone();
/// ```
///
/// Nor can the value be reached without going through a decision:
///
/// ```rust,compile_fail
/// use airlock_taint::Tainted;
///
/// let length = Tainted::new(64usize);
/// let raw: usize = *length;
/// ```
pub struct Tainted<T> {
    value: T,
}

impl<T> Tainted<T> {
    /// Wraps a value that came in across a trust boundary.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Unconditionally transforms the value into a trusted result.
    ///
    /// Use this for repair policies, where every input maps to something
    /// acceptable.
    #[inline]
    pub fn sanitize<U>(self, sanitizer: impl FnOnce(T) -> U) -> U {
        sanitizer(self.value)
    }

    /// Releases the value if `predicate` accepts it; drops it otherwise.
    #[inline]
    pub fn verify(self, predicate: impl FnOnce(&T) -> bool) -> Option<T> {
        if predicate(&self.value) {
            Some(self.value)
        } else {
            None
        }
    }

    /// Like [`verify`](Tainted::verify), but reports rejection as `error`.
    ///
    /// ```rust
    /// use airlock_taint::Tainted;
    ///
    /// let port = Tainted::new(80u16);
    /// assert_eq!(port.verify_or(|p| *p >= 1024, "privileged port"), Err("privileged port"));
    /// ```
    #[inline]
    pub fn verify_or<E>(self, predicate: impl FnOnce(&T) -> bool, error: E) -> Result<T, E> {
        self.verify(predicate).ok_or(error)
    }

    /// Transforms the value while keeping it untrusted.
    ///
    /// Useful to combine an untrusted field with an already trusted one
    /// before the single decision on the combination.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Tainted<U> {
        Tainted::new(f(self.value))
    }
}

impl<T> From<T> for Tainted<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> fmt::Debug for Tainted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tainted(..)")
    }
}
