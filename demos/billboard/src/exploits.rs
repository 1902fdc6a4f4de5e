// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The attacks a hostile user mounts against the billboard's mailbox.

use core::fmt;

use airlock::protocol::{
    CommandRecord, ContentPolicy, Mailbox, RegionError, Status, ValidationError, WordFilter,
};
use airlock::secret::SecretValue;
use tracing::{info, warn};

use crate::firmware::Firmware;

/// A friendly message.
pub const GOOD_MESSAGE: &str = "Rust rocks!";

/// An unfriendly message of the same length.
pub const BAD_MESSAGE: &str = "Rust sucks!";

/// Length of the device's wifi password.
pub const WIFI_PASSWORD_LEN: usize = 30;

/// One scenario from the suite.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Exploit {
    /// Baseline: a friendly message.
    GoodMessage,
    /// Baseline: an unfriendly message.
    UnfriendlyMessage,
    /// Point the content at the wifi password, hoping it gets displayed.
    SecretPointer,
    /// Rewrite the status slot to `Accepted` right after a rejection.
    StatusOverride,
    /// Swap the message for an unfriendly one right after it was approved.
    MessageToctou,
}

impl Exploit {
    /// Every scenario, in presentation order.
    pub const ALL: [Exploit; 5] = [
        Exploit::GoodMessage,
        Exploit::UnfriendlyMessage,
        Exploit::SecretPointer,
        Exploit::StatusOverride,
        Exploit::MessageToctou,
    ];
}

impl fmt::Display for Exploit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self {
            Exploit::GoodMessage => "Sending good message",
            Exploit::UnfriendlyMessage => "Sending unfriendly message",
            Exploit::SecretPointer => "Exploit: content pointer aimed at the wifi password",
            Exploit::StatusOverride => "Exploit: status override",
            Exploit::MessageToctou => "Exploit: message TOCTOU",
        };
        f.write_str(title)
    }
}

/// What happened during one scenario.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Report {
    /// The firmware under attack.
    pub firmware: Firmware,
    /// The scenario.
    pub exploit: Exploit,
    /// Decisions the firmware made, in order.
    pub decisions: Vec<Status>,
    /// What the billboard displayed, or why it refused.
    pub outcome: Result<String, ValidationError>,
    /// The status slot as the attacker sees it afterwards.
    pub producer_status: Option<Status>,
    /// Payload bytes left in the mailbox afterwards.
    pub payload_after: String,
}

impl Report {
    /// Returns `true` if the billboard displayed something unfriendly or
    /// something that was not in the mailbox at all.
    pub fn is_compromised(&self, policy: &WordFilter) -> bool {
        match (&self.outcome, self.exploit) {
            (Err(_), _) => false,
            (Ok(_), Exploit::SecretPointer) => true,
            (Ok(shown), _) => !policy.accept(shown.as_bytes()),
        }
    }
}

/// Runs `exploit` against a fresh billboard running `firmware`.
pub fn run(
    firmware: Firmware,
    exploit: Exploit,
    policy: &WordFilter,
    wifi_password: &SecretValue<[u8; WIFI_PASSWORD_LEN]>,
) -> Result<Report, RegionError> {
    let mailbox = Mailbox::default();
    let mut decisions = Vec::new();

    let outcome = {
        let on_decision = |status: Status| {
            info!(%firmware, ?status, "decision");
            decisions.push(status);
            strike(exploit, &mailbox);
        };

        let token = match exploit {
            Exploit::GoodMessage | Exploit::MessageToctou => mailbox.post(GOOD_MESSAGE.as_bytes())?,
            Exploit::UnfriendlyMessage | Exploit::StatusOverride => {
                mailbox.post(BAD_MESSAGE.as_bytes())?
            }
            Exploit::SecretPointer => {
                let password = wifi_password.with_access(|password| password.as_ptr());
                mailbox.overwrite_status(Status::Waiting)?;
                mailbox.post_record(CommandRecord::new(
                    password,
                    WIFI_PASSWORD_LEN,
                    mailbox.status_ptr(),
                ))?
            }
        };

        firmware.process(&mailbox, token, policy, on_decision)
    };

    let payload_after = mailbox
        .region()
        .read_bytes(mailbox.layout().payload_offset, GOOD_MESSAGE.len())?;

    Ok(Report {
        firmware,
        exploit,
        decisions,
        outcome,
        producer_status: mailbox.status(),
        payload_after: String::from_utf8_lossy(&payload_after).into_owned(),
    })
}

/// Runs every scenario against every firmware, oldest firmware first.
pub fn run_all(
    policy: &WordFilter,
    wifi_password: &SecretValue<[u8; WIFI_PASSWORD_LEN]>,
) -> Result<Vec<Report>, RegionError> {
    Firmware::ALL
        .iter()
        .flat_map(|firmware| Exploit::ALL.iter().map(move |exploit| (*firmware, *exploit)))
        .map(|(firmware, exploit)| run(firmware, exploit, policy, wifi_password))
        .collect()
}

// The attacker's move, timed to land right after the decision.
fn strike(exploit: Exploit, mailbox: &Mailbox) {
    let result = match exploit {
        Exploit::StatusOverride => {
            info!("overwriting status -> Accepted");
            mailbox.overwrite_status(Status::Accepted)
        }
        Exploit::MessageToctou => {
            info!("swapping message");
            mailbox.overwrite_payload(BAD_MESSAGE.as_bytes())
        }
        _ => Ok(()),
    };

    if let Err(err) = result {
        warn!(%err, "attack could not be staged");
    }
}
