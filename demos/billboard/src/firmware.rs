// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use airlock::once::OnceToken;
use airlock::protocol::{
    CommandRecord, ContentPolicy, FnObserver, Mailbox, Status, ValidationError, Validator,
    WordFilter,
};

/// Which firmware the billboard runs.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Firmware {
    /// Judges the message where it lies in the mailbox, reports through the
    /// status slot, then reads the slot and the message again to display.
    Naive,
    /// Airlock's [`Validator`]: one copy of the record, one copy of the
    /// message, a write-only report.
    Validator,
}

impl Firmware {
    /// Both generations, oldest first.
    pub const ALL: [Firmware; 2] = [Firmware::Naive, Firmware::Validator];

    /// Handles the record just posted to `mailbox`.
    ///
    /// `on_decision` fires right after the decision is reported, the moment
    /// an attacker strikes.
    pub(crate) fn process(
        self,
        mailbox: &Mailbox,
        token: OnceToken<'_, CommandRecord>,
        policy: &WordFilter,
        mut on_decision: impl FnMut(Status),
    ) -> Result<String, ValidationError> {
        match self {
            Firmware::Naive => process_naive(mailbox, policy, on_decision),
            Firmware::Validator => Validator::new(*policy, mailbox.region())
                .with_observer(FnObserver(&mut on_decision))
                .process(token)
                .map(|accepted| accepted.into_string_lossy()),
        }
    }
}

impl fmt::Display for Firmware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Firmware::Naive => f.write_str("naive firmware"),
            Firmware::Validator => f.write_str("airlock firmware"),
        }
    }
}

// Every step goes back to shared memory, so whatever the sender writes in
// between is what gets displayed.
fn process_naive(
    mailbox: &Mailbox,
    policy: &WordFilter,
    mut on_decision: impl FnMut(Status),
) -> Result<String, ValidationError> {
    let message = message_in_place(mailbox, policy).ok_or(ValidationError::UntrustedContentPointer)?;
    let status = if policy.accept(&message) {
        Status::Accepted
    } else {
        Status::Rejected
    };

    mailbox
        .overwrite_status(status)
        .map_err(|_| ValidationError::UntrustedResultPointer)?;
    on_decision(status);

    if mailbox.status() != Some(Status::Accepted) {
        return Err(ValidationError::ContentRejected);
    }

    let shown = message_in_place(mailbox, policy).ok_or(ValidationError::UntrustedContentPointer)?;
    Ok(String::from_utf8_lossy(&shown).into_owned())
}

// The message the current record points at. Reads stay inside the
// mailbox: a pointer anywhere else yields `None`.
fn message_in_place(mailbox: &Mailbox, policy: &WordFilter) -> Option<Vec<u8>> {
    let region = mailbox.region();
    let record = region
        .read_value::<CommandRecord>(mailbox.layout().record_offset)
        .ok()?;
    let offset = (record.content as usize).checked_sub(region.base() as usize)?;

    region
        .read_bytes(offset, policy.clamp_length(record.length))
        .ok()
}
