// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;
use core::mem;

use proptest::prelude::*;

use crate::OnceSequenceToken;

#[test]
fn test_requests_one_three_three_over_five() {
    let shared = [1.0f32, 2.0, 3.5, 4.2, 213123.23];
    let mut token = OnceSequenceToken::new(&shared);
    let mut buffer = [f32::INFINITY; 3];

    assert_eq!(token.read(&mut buffer[..1]), 1);
    assert_eq!(buffer, [1.0, f32::INFINITY, f32::INFINITY]);

    buffer.fill(f32::INFINITY);
    assert_eq!(token.read(&mut buffer), 3);
    assert_eq!(buffer, [2.0, 3.5, 4.2]);

    buffer.fill(f32::INFINITY);
    assert_eq!(token.read(&mut buffer), 1);
    assert_eq!(buffer, [213123.23, f32::INFINITY, f32::INFINITY]);

    assert!(token.is_exhausted());
}

#[test]
fn test_zero_request_copies_nothing() {
    let shared = [1u8, 2, 3];
    let mut token = OnceSequenceToken::new(&shared);
    let mut empty: [u8; 0] = [];

    assert_eq!(token.read(&mut empty), 0);
    assert_eq!(token.remaining(), 3);
}

#[test]
fn test_exhausted_read_leaves_destination_untouched() {
    let shared = [1u8, 2];
    let mut token = OnceSequenceToken::new(&shared);
    let mut buffer = [0xEEu8; 4];

    assert_eq!(token.read(&mut buffer), 2);
    buffer.fill(0xEE);

    assert_eq!(token.read(&mut buffer), 0);
    assert_eq!(buffer, [0xEE; 4]);
}

#[test]
fn test_null_source_is_exhausted() {
    let mut token = unsafe { OnceSequenceToken::<u32>::from_raw(core::ptr::null(), 16) };
    let mut buffer = [0u32; 4];

    assert!(token.is_exhausted());
    assert_eq!(token.read(&mut buffer), 0);
}

#[test]
fn test_already_read_elements_are_not_redelivered_after_rewrite() {
    let mut backing = [1u8, 2, 3, 4];
    let whole: &Cell<[u8]> = Cell::from_mut(&mut backing[..]);
    let mut token = unsafe { OnceSequenceToken::from_raw(whole.as_ptr().cast::<u8>(), 4) };
    let shared = whole.as_slice_of_cells();

    assert_eq!(token.read_to_vec(2), vec![1, 2]);

    for cell in shared {
        cell.set(0xFF);
    }

    // Only the unread suffix reflects the rewrite.
    assert_eq!(token.read_to_vec(8), vec![0xFF, 0xFF]);
    assert!(token.read_to_vec(8).is_empty());
}

#[test]
fn test_take_transfers_remaining_count() {
    let shared = [10u64, 20, 30];
    let mut source = OnceSequenceToken::new(&shared);
    let _ = source.read_to_vec(1);

    let mut destination = mem::take(&mut source);

    assert!(source.is_exhausted());
    assert_eq!(destination.remaining(), 2);
    assert_eq!(destination.read_to_vec(5), vec![20, 30]);
}

#[test]
fn test_debug_shows_remaining_only() {
    let shared = [0xABu8; 3];
    let token = OnceSequenceToken::new(&shared);

    assert_eq!(format!("{:?}", token), "OnceSequenceToken { remaining: 3 }");
}

proptest! {
    #[test]
    fn reads_never_overlap_or_exceed_length(
        source in proptest::collection::vec(any::<u32>(), 0..128),
        requests in proptest::collection::vec(0..48usize, 0..32),
    ) {
        let mut token = OnceSequenceToken::new(&source);
        let mut delivered: Vec<u32> = Vec::new();
        let mut total = 0usize;

        for requested in &requests {
            let mut buffer = vec![0u32; *requested];
            let copied = token.read(&mut buffer);

            prop_assert!(copied <= *requested);
            total += copied;
            prop_assert!(total <= source.len());
            prop_assert_eq!(total + token.remaining(), source.len());

            delivered.extend_from_slice(&buffer[..copied]);
        }

        let expected = source.len().min(requests.iter().sum());
        prop_assert_eq!(delivered.len(), expected);
        prop_assert_eq!(&delivered[..], &source[..expected]);
    }
}
