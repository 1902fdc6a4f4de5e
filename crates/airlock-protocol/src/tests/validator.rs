// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::RefCell;

use airlock_once::OnceToken;
use proptest::prelude::*;

use crate::error::ValidationError;
use crate::mailbox::Mailbox;
use crate::policy::{ContentPolicy, FnObserver, FnPolicy};
use crate::record::CommandRecord;
use crate::status::Status;
use crate::support::test_utils::{MAX_TEXT_LENGTH, billboard_policy, contains_subslice};
use crate::validator::Validator;

#[test]
fn test_friendly_message_is_accepted() {
    let mailbox = Mailbox::default();
    let mut validator = Validator::new(billboard_policy(), mailbox.region());

    let accepted = validator
        .process(mailbox.post(b"Rust rocks!").expect("Failed to post(..)"))
        .expect("Failed to process(..)");

    assert_eq!(accepted.as_str(), Some("Rust rocks!"));
    assert_eq!(mailbox.status(), Some(Status::Accepted));
}

#[test]
fn test_forbidden_message_is_rejected() {
    let mailbox = Mailbox::default();
    let mut validator = Validator::new(billboard_policy(), mailbox.region());

    let result = validator.process(mailbox.post(b"Rust sucks!").expect("Failed to post(..)"));

    assert_eq!(result, Err(ValidationError::ContentRejected));
    assert_eq!(mailbox.status(), Some(Status::Rejected));
}

#[test]
fn test_length_is_clamped_before_copy() {
    let mailbox = Mailbox::default();
    let mut validator = Validator::new(billboard_policy(), mailbox.region());
    // The forbidden word sits past the clamp, so it is never copied.
    let mut message = vec![b'a'; MAX_TEXT_LENGTH];
    message.extend_from_slice(b" sucks");

    let accepted = validator
        .process(mailbox.post(&message).expect("Failed to post(..)"))
        .expect("Failed to process(..)");

    assert_eq!(accepted.as_bytes(), &message[..MAX_TEXT_LENGTH]);
}

#[test]
fn test_empty_message() {
    let mailbox = Mailbox::default();
    let mut validator = Validator::new(billboard_policy(), mailbox.region());

    let accepted = validator
        .process(mailbox.post(b"").expect("Failed to post(..)"))
        .expect("Failed to process(..)");

    assert!(accepted.as_bytes().is_empty());
    assert_eq!(mailbox.status(), Some(Status::Accepted));
}

#[test]
fn test_consumed_token_is_refused_without_writing() {
    let mailbox = Mailbox::default();
    let mut validator = Validator::new(billboard_policy(), mailbox.region());

    let mut token = mailbox.post(b"Rust rocks!").expect("Failed to post(..)");
    let _ = token.read();

    assert_eq!(validator.process(token), Err(ValidationError::SourceExhausted));
    assert_eq!(validator.process(OnceToken::default()), Err(ValidationError::SourceExhausted));
    assert_eq!(mailbox.status(), Some(Status::Waiting));
}

#[test]
fn test_policy_sees_content_once() {
    let mailbox = Mailbox::default();
    let calls = RefCell::new(Vec::new());
    let policy = FnPolicy::new(
        |content: &[u8]| {
            calls.borrow_mut().push(content.to_vec());
            true
        },
        |length: usize| length,
    );
    let mut validator = Validator::new(policy, mailbox.region());

    validator
        .process(mailbox.post(b"once").expect("Failed to post(..)"))
        .expect("Failed to process(..)");

    assert_eq!(*calls.borrow(), vec![b"once".to_vec()]);
}

#[test]
fn test_fn_policy_never_grows_length() {
    let policy = FnPolicy::new(|_: &[u8]| true, |length: usize| length + 10);
    assert_eq!(policy.clamp_length(5), 5);
}

/// Custom policy whose clamp claims more than the sender did.
struct GrowingPolicy;

impl ContentPolicy for GrowingPolicy {
    fn accept(&self, content: &[u8]) -> bool {
        !contains_subslice(content, b"sucks")
    }

    fn clamp_length(&self, length: usize) -> usize {
        length + 16
    }
}

#[test]
fn test_growing_clamp_never_copies_past_claimed_length() {
    let mailbox = Mailbox::default();
    let mut validator = Validator::new(GrowingPolicy, mailbox.region());
    mailbox
        .overwrite_payload(b"hi sucks!")
        .expect("Failed to overwrite_payload(..)");

    // Only "hi" is claimed; the rest of the payload was never sent.
    let record = CommandRecord::new(mailbox.payload_ptr(), 2, mailbox.status_ptr());
    let token = mailbox.post_record(record).expect("Failed to post_record(..)");

    let accepted = validator.process(token).expect("Failed to process(..)");
    assert_eq!(accepted.as_bytes(), b"hi");
    assert_eq!(mailbox.status(), Some(Status::Accepted));
}

#[test]
fn test_observer_hears_each_decision() {
    let mailbox = Mailbox::default();
    let mut heard = Vec::new();

    {
        let observer = FnObserver(|status: Status| heard.push(status));
        let mut validator =
            Validator::new(billboard_policy(), mailbox.region()).with_observer(observer);

        let _ = validator.process(mailbox.post(b"Rust rocks!").expect("Failed to post(..)"));
        let _ = validator.process(mailbox.post(b"Rust sucks!").expect("Failed to post(..)"));
        let _ = validator.process(OnceToken::default());
    }

    assert_eq!(heard, vec![Status::Accepted, Status::Rejected]);
}

#[test]
fn test_null_result_pointer_is_refused() {
    let mailbox = Mailbox::default();
    let mut validator = Validator::new(billboard_policy(), mailbox.region());
    mailbox
        .overwrite_payload(b"Rust rocks!")
        .expect("Failed to overwrite_payload(..)");

    let record = CommandRecord::new(mailbox.payload_ptr(), 11, core::ptr::null_mut());
    let token = mailbox.post_record(record).expect("Failed to post_record(..)");

    assert_eq!(validator.process(token), Err(ValidationError::UntrustedResultPointer));
}

#[test]
fn test_misaligned_result_pointer_is_refused() {
    let mailbox = Mailbox::default();
    let mut validator = Validator::new(billboard_policy(), mailbox.region());

    let result = mailbox.status_ptr().cast::<u8>().wrapping_add(1).cast::<Status>();
    let record = CommandRecord::new(mailbox.payload_ptr(), 0, result);
    let token = mailbox.post_record(record).expect("Failed to post_record(..)");

    assert_eq!(validator.process(token), Err(ValidationError::UntrustedResultPointer));
    assert_eq!(mailbox.status(), Some(Status::Waiting));
}

#[test]
fn test_content_running_past_region_is_refused() {
    let mailbox = Mailbox::default();
    let mut validator = Validator::new(billboard_policy(), mailbox.region());

    let near_end = mailbox.region().base().wrapping_add(mailbox.region().len() - 4);
    let record = CommandRecord::new(near_end, 8, mailbox.status_ptr());
    let token = mailbox.post_record(record).expect("Failed to post_record(..)");

    assert_eq!(validator.process(token), Err(ValidationError::UntrustedContentPointer));
    assert_eq!(mailbox.status(), Some(Status::Rejected));
}

#[test]
fn test_content_check_uses_clamped_length() {
    let mailbox = Mailbox::default();
    let mut validator = Validator::new(billboard_policy(), mailbox.region());
    mailbox
        .overwrite_payload(b"Rust rocks!")
        .expect("Failed to overwrite_payload(..)");

    // Claimed length reaches far beyond the region; the clamp brings it back.
    let record = CommandRecord::new(mailbox.payload_ptr(), usize::MAX, mailbox.status_ptr());
    let token = mailbox.post_record(record).expect("Failed to post_record(..)");

    let accepted = validator.process(token).expect("Failed to process(..)");
    assert_eq!(accepted.as_bytes().len(), MAX_TEXT_LENGTH);
    assert!(accepted.as_bytes().starts_with(b"Rust rocks!"));
}

proptest! {
    #[test]
    fn prop_decision_matches_policy(message in proptest::collection::vec(
        prop_oneof![Just(b's'), Just(b'u'), Just(b'c'), Just(b'k'), any::<u8>()],
        0..80,
    )) {
        let mailbox = Mailbox::default();
        let mut validator = Validator::new(billboard_policy(), mailbox.region());
        let judged = &message[..message.len().min(MAX_TEXT_LENGTH)];

        let result = validator.process(mailbox.post(&message).expect("Failed to post(..)"));

        if contains_subslice(judged, b"sucks") {
            prop_assert_eq!(result, Err(ValidationError::ContentRejected));
            prop_assert_eq!(mailbox.status(), Some(Status::Rejected));
        } else {
            let accepted = result.expect("Failed to process(..)");
            prop_assert_eq!(accepted.as_bytes(), judged);
            prop_assert_eq!(mailbox.status(), Some(Status::Accepted));
        }
    }
}
