// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Each primitive on its own, with values small enough to print.

use airlock::once::{OnceSequenceToken, OnceToken};
use airlock::secret::SecretValue;
use airlock::taint::{SinkOnly, Tainted};
use airlock::zero::{AssertZeroizeOnDrop, ZeroizationProbe};

/// `raw`, `sanitize(min(raw, 40))`, `verify(raw > 40)`.
pub fn untrusted(inputs: &[i32]) -> Vec<(i32, i32, Option<i32>)> {
    inputs
        .iter()
        .map(|&raw| {
            let sanitized = Tainted::new(raw).sanitize(|x| x.min(40));
            let verified = Tainted::new(raw).verify(|x| *x > 40);
            (raw, sanitized, verified)
        })
        .collect()
}

/// A 16-byte key at each stage of its life.
///
/// Every stage is its own [`SecretValue`], so the snapshots are zeroized
/// when the caller drops them.
#[derive(Debug)]
pub struct SecretStages {
    /// The key right after it was written.
    pub initial: SecretValue<[u8; 16]>,
    /// The source container after `transfer`.
    pub source_after_transfer: SecretValue<[u8; 16]>,
    /// The destination container after `transfer`.
    pub destination_after_transfer: SecretValue<[u8; 16]>,
    /// Whether the destination zeroized itself when dropped.
    pub destination_zeroized_on_drop: bool,
}

/// Writes `0, 1, .., 15` into a key, transfers it and drops it.
pub fn secret() -> SecretStages {
    let mut source = SecretValue::<[u8; 16]>::new(|key| {
        for (i, byte) in key.iter_mut().enumerate() {
            *byte = i as u8;
        }
    });
    let initial = snapshot(&source);

    let destination = source.transfer();
    let source_after_transfer = snapshot(&source);
    let destination_after_transfer = snapshot(&destination);
    debug_assert!(source.is_zeroized());

    let sentinel = destination.clone_sentinel();
    drop(destination);

    SecretStages {
        initial,
        source_after_transfer,
        destination_after_transfer,
        destination_zeroized_on_drop: sentinel.is_zeroized(),
    }
}

// Copies the key into a fresh container without it ever leaving one.
fn snapshot(secret: &SecretValue<[u8; 16]>) -> SecretValue<[u8; 16]> {
    SecretValue::new(|copy| secret.with_access(|key| *copy = *key))
}

/// Two reads of the same `OnceToken`.
pub fn once_scalar(value: i32) -> (Option<i32>, Option<i32>) {
    let mut token = OnceToken::new(&value);
    let first = token.read();
    let second = token.read();

    (first, second)
}

/// Requests `requested` elements at a time from a sequence token over
/// `source`, into a buffer refilled with infinity before each read.
pub fn once_sequence(source: &[f32], requested: &[usize]) -> Vec<(usize, usize, [f32; 3])> {
    let mut token = OnceSequenceToken::new(source);

    requested
        .iter()
        .map(|&requested| {
            let mut buffer = [f32::INFINITY; 3];
            let read = token.read(&mut buffer[..requested.min(3)]);
            (requested, read, buffer)
        })
        .collect()
}

/// Value of a slot before and after a write through `SinkOnly`.
pub fn write_only(before: i32, after: i32) -> (i32, i32) {
    let mut slot = before;
    let observed_before = slot;

    SinkOnly::new(&mut slot).assign(after);

    (observed_before, slot)
}
