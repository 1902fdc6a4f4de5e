// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::error::RegionError;
use crate::policy::AddressOracle;
use crate::region::SharedRegion;

#[test]
fn test_new_region_is_zeroed() {
    let region = SharedRegion::new(13);

    assert_eq!(region.len(), 13);
    assert!(!region.is_empty());
    assert_eq!(region.read_bytes(0, 13), Ok(vec![0u8; 13]));
}

#[test]
fn test_base_is_word_aligned() {
    let region = SharedRegion::new(64);
    assert_eq!(region.base() as usize % 8, 0);
}

#[test]
fn test_write_then_read_bytes() {
    let region = SharedRegion::new(16);

    region.write_bytes(3, b"abc").expect("Failed to write_bytes(..)");

    assert_eq!(region.read_bytes(2, 5), Ok(vec![0, b'a', b'b', b'c', 0]));
}

#[test]
fn test_write_bytes_out_of_bounds() {
    let region = SharedRegion::new(8);

    assert_eq!(
        region.write_bytes(6, b"abc"),
        Err(RegionError::OutOfBounds {
            offset: 6,
            len: 3,
            capacity: 8
        })
    );
    assert_eq!(
        region.write_bytes(usize::MAX, b"a"),
        Err(RegionError::OutOfBounds {
            offset: usize::MAX,
            len: 1,
            capacity: 8
        })
    );
    // Nothing was written.
    assert_eq!(region.read_bytes(0, 8), Ok(vec![0u8; 8]));
}

#[test]
fn test_empty_write_at_end_is_allowed() {
    let region = SharedRegion::new(8);
    assert_eq!(region.write_bytes(8, b""), Ok(()));
}

#[test]
fn test_write_value_rejects_misaligned_offset() {
    let region = SharedRegion::new(32);

    assert_eq!(
        region.write_value::<u32>(2, 7),
        Err(RegionError::Misaligned {
            offset: 2,
            align: 4
        })
    );
}

#[test]
fn test_write_value_returns_its_address() {
    let region = SharedRegion::new(32);

    let ptr = region
        .write_value::<u64>(8, 0xAABB)
        .expect("Failed to write_value(..)");

    assert_eq!(ptr as usize, region.base() as usize + 8);
    assert_eq!(region.read_value::<u64>(8), Ok(0xAABB));
}

#[test]
fn test_once_reads_value_posted() {
    let region = SharedRegion::new(32);
    let mut token = region.post(16, 42u64).expect("Failed to post(..)");

    assert_eq!(token.read(), Some(42));
    assert_eq!(token.read(), None);
}

#[test]
fn test_once_sequence_bounds() {
    let region = SharedRegion::new(16);

    assert!(region.once_sequence::<u8>(10, 7).is_err());
    assert!(region.once_sequence::<u64>(0, usize::MAX).is_err());

    let token = region
        .once_sequence::<u8>(16, 0)
        .expect("Failed to once_sequence(..)");
    assert!(token.is_exhausted());
}

#[test]
fn test_fill_overwrites_range() {
    let region = SharedRegion::new(8);

    region.fill(2, 4, 0xEE).expect("Failed to fill(..)");

    assert_eq!(region.read_bytes(0, 8), Ok(vec![0, 0, 0xEE, 0xEE, 0xEE, 0xEE, 0, 0]));
}

#[test]
fn test_oracle_permits_only_inside_span() {
    let region = SharedRegion::new(64);
    let span = region.span();

    assert!(region.permits(span.start, 64));
    assert!(region.permits(span.start + 60, 4));
    assert!(region.permits(span.end, 0));

    assert!(!region.permits(span.start - 1, 1));
    assert!(!region.permits(span.start + 60, 5));
    assert!(!region.permits(0, 0));
    assert!(!region.permits(span.start, usize::MAX));
}

#[test]
fn test_oracle_through_reference() {
    let region = SharedRegion::new(8);
    let oracle: &SharedRegion = &region;

    assert!(AddressOracle::permits(&oracle, region.base() as usize, 8));
}

#[test]
fn test_region_moves_to_another_thread() {
    let region = SharedRegion::new(64);

    let region = std::thread::spawn(move || {
        region
            .write_value::<u64>(16, 17)
            .expect("Failed to write_value(..)");
        region
    })
    .join()
    .expect("Failed to join(..)");

    assert_eq!(region.read_value::<u64>(16), Ok(17));
}

proptest! {
    #[test]
    fn prop_contains_matches_arithmetic(offset in 0usize..256, len in 0usize..256) {
        let region = SharedRegion::new(128);
        let address = region.base() as usize + offset;

        prop_assert_eq!(region.contains(address, len), offset + len <= 128);
    }
}
