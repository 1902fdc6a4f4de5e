// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec::Vec;
use core::mem;

use airlock_once::{OnceSequenceToken, OnceToken};
use airlock_taint::{SinkOnly, Tainted};
use tracing::{debug, trace, warn};

use crate::error::ValidationError;
use crate::policy::{AddressOracle, ContentPolicy, DecisionObserver};
use crate::record::{CommandRecord, UntrustedCommand};
use crate::status::Status;

/// Content the validator accepted, as its own copy.
///
/// These are exactly the bytes the policy judged. Nothing the producer
/// writes afterwards can reach them.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Accepted {
    content: Vec<u8>,
}

impl Accepted {
    /// The accepted bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    /// The accepted bytes as UTF-8, if they are.
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.content).ok()
    }

    /// Takes the accepted bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.content
    }

    /// Takes the accepted bytes as a `String`, replacing invalid UTF-8.
    pub fn into_string_lossy(self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

/// Consumes [`CommandRecord`]s from untrusted shared memory.
///
/// The validator holds no state between records besides its policy, oracle
/// and observer. See the crate docs for the processing order.
///
/// `O` decides which addresses a record may reference. Passing the
/// exchange's [`SharedRegion`](crate::SharedRegion) confines every read and
/// write to that region, so a record pointing at validator-private memory
/// (or anywhere else) is refused before it is touched.
#[derive(Debug)]
pub struct Validator<P, O, B = ()> {
    policy: P,
    oracle: O,
    observer: B,
}

impl<P, O> Validator<P, O>
where
    P: ContentPolicy,
    O: AddressOracle,
{
    /// Creates a validator with no observer.
    pub fn new(policy: P, oracle: O) -> Self {
        Self {
            policy,
            oracle,
            observer: (),
        }
    }
}

impl<P, O, B> Validator<P, O, B>
where
    P: ContentPolicy,
    O: AddressOracle,
    B: DecisionObserver,
{
    /// Replaces the decision observer.
    pub fn with_observer<N: DecisionObserver>(self, observer: N) -> Validator<P, O, N> {
        Validator {
            policy: self.policy,
            oracle: self.oracle,
            observer,
        }
    }

    /// The content policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Processes one record end to end.
    ///
    /// Returns the accepted copy, or why the record was refused. Whether the
    /// result slot was written follows [`ValidationError`]'s table; on
    /// success it holds `Accepted`. The slot is written once and never read.
    pub fn process(
        &mut self,
        mut source: OnceToken<'_, CommandRecord>,
    ) -> Result<Accepted, ValidationError> {
        let record = source.read().ok_or(ValidationError::SourceExhausted)?;
        trace!(
            content = record.content as usize,
            length = record.length,
            result = record.result as usize,
            "record copied"
        );

        let UntrustedCommand {
            content,
            length,
            result,
        } = UntrustedCommand::from(record);

        // A policy may only shrink the claimed length, never grow it.
        let length = length.sanitize(|length| self.policy.clamp_length(length).min(length));

        let Some(mut sink) = self.verify_result(result) else {
            warn!(result = record.result as usize, "result pointer rejected");
            return Err(ValidationError::UntrustedResultPointer);
        };

        let Some(content) = content.verify(|ptr| self.oracle.permits(*ptr as usize, length)) else {
            warn!(
                content = record.content as usize,
                length, "content pointer rejected"
            );
            self.decide(&mut sink, Status::Rejected);
            return Err(ValidationError::UntrustedContentPointer);
        };

        // SAFETY: the oracle permitted `[content, content + length)`, which by
        // its contract is readable while `self.oracle` is borrowed.
        let mut reader = unsafe { OnceSequenceToken::from_raw(content, length) };
        let copy = reader.read_to_vec(length);
        trace!(copied = copy.len(), "content copied");

        let verdict = Tainted::new(copy)
            .verify_or(|bytes| self.policy.accept(bytes), ValidationError::ContentRejected);
        let status = match verdict {
            Ok(_) => Status::Accepted,
            Err(_) => Status::Rejected,
        };
        self.decide(&mut sink, status);

        verdict.map(|content| Accepted { content })
    }

    fn verify_result<'s>(&self, result: Tainted<*mut Status>) -> Option<SinkOnly<'s, Status>> {
        let ptr = result.verify(|ptr| {
            !ptr.is_null()
                && ptr.is_aligned()
                && self.oracle.permits(*ptr as usize, mem::size_of::<Status>())
        })?;

        // SAFETY: non-null, aligned and permitted by the oracle for one
        // `Status`; valid for writes while `self.oracle` is borrowed, which
        // covers the rest of `process`.
        unsafe { SinkOnly::from_raw(ptr) }
    }

    fn decide(&mut self, sink: &mut SinkOnly<'_, Status>, status: Status) {
        sink.assign(status);
        debug!(?status, "decision written");
        self.observer.on_decision(status);
    }
}
