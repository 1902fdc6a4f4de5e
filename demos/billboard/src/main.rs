// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Demo: the friendly billboard
//
// Walks through each Airlock primitive, then runs both generations of the
// billboard firmware against a hostile user. Set RUST_LOG=airlock_protocol=trace to follow the
// validator step by step.

use airlock::secret::SecretValue;
use billboard::BILLBOARD_POLICY;
use billboard::exploits::{self, WIFI_PASSWORD_LEN};
use billboard::walkthrough;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    println!("### untrusted ###");
    for (raw, sanitized, verified) in walkthrough::untrusted(&[5, 42]) {
        println!("raw:       {raw}");
        println!("sanitized: {sanitized}");
        println!("verified:  {verified:?}\n");
    }

    println!("### secret ###");
    let stages = walkthrough::secret();
    for (label, stage) in [
        ("Initial memory:", &stages.initial),
        ("Source after transfer:", &stages.source_after_transfer),
        ("Destination after transfer:", &stages.destination_after_transfer),
    ] {
        stage.with_access(|key| println!("{label:<32} {key:02x?}"));
    }
    println!("{:<32} {}\n", "Zeroized on drop:", stages.destination_zeroized_on_drop);

    println!("### read once ###");
    let (first, second) = walkthrough::once_scalar(42);
    println!("first read:  {first:?}");
    println!("second read: {second:?}");
    for (requested, read, buffer) in
        walkthrough::once_sequence(&[1.0, 2.0, 3.5, 4.2, 213123.23], &[1, 3, 3])
    {
        println!("requested {requested}, read {read}: {buffer:?}");
    }
    println!();

    println!("### write only ###");
    let (before, after) = walkthrough::write_only(16, 18);
    println!("x = {before}");
    println!("x = {after}\n");

    println!("### friendly billboard ###");
    let policy = BILLBOARD_POLICY;
    let mut password = *b"nobody_will_ever_guess_this_pw";
    let wifi_password = SecretValue::<[u8; WIFI_PASSWORD_LEN]>::from_mut(&mut password);

    let mut current = None;
    for report in exploits::run_all(&policy, &wifi_password)? {
        if current != Some(report.firmware) {
            println!("=== {} ===\n", report.firmware);
            current = Some(report.firmware);
        }

        println!("{}:", report.exploit);
        match &report.outcome {
            Ok(shown) => println!("  Billboard: {shown:?}"),
            Err(err) => println!("  Refused: {err}"),
        }
        println!("  Status seen by sender: {:?}", report.producer_status);
        if report.is_compromised(&policy) {
            println!("  COMPROMISED");
        }
        println!();
    }

    Ok(())
}
