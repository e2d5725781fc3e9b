// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Unit tests for the cycle timing configuration.

use blink_common::{CycleTiming, Phase, TimingError, CYCLE_MS, OFF_HOLD_MS, ON_HOLD_MS};

#[test]
fn test_default_shape() {
    let timing = CycleTiming::DEFAULT;

    assert_eq!(timing.on_hold_ms(), 1000);
    assert_eq!(timing.cycle_ms(), 3000);
    assert_eq!(timing.off_hold_ms(), 2000);
    assert_eq!(timing.period_ticks(), 3001);
    assert_eq!(CycleTiming::default(), timing);
    assert_eq!(OFF_HOLD_MS, CYCLE_MS - ON_HOLD_MS);
}

#[test]
fn test_new_rejects_empty_on_hold() {
    assert_eq!(CycleTiming::new(0, 3000), Err(TimingError::EmptyOnHold));
}

#[test]
fn test_new_rejects_empty_off_hold() {
    assert_eq!(
        CycleTiming::new(1000, 1000),
        Err(TimingError::EmptyOffHold {
            on_hold_ms: 1000,
            cycle_ms: 1000
        })
    );
    assert!(CycleTiming::new(1000, 999).is_err());
    assert!(CycleTiming::new(1000, 1001).is_ok());
}

#[test]
fn test_phase_at_boundaries() {
    let timing = CycleTiming::DEFAULT;

    assert_eq!(timing.phase_at(0), Phase::OnEdge);
    assert_eq!(timing.phase_at(1), Phase::OnHold);
    assert_eq!(timing.phase_at(999), Phase::OnHold);
    assert_eq!(timing.phase_at(1000), Phase::OffHold);
    assert_eq!(timing.phase_at(2999), Phase::OffHold);
    assert_eq!(timing.phase_at(3000), Phase::Reset);
    assert_eq!(timing.phase_at(u32::MAX), Phase::Reset);
}

#[test]
fn test_output_level() {
    let timing = CycleTiming::DEFAULT;

    assert!(!timing.output_level(false, 0));
    assert!(!timing.output_level(false, 500));
    assert!(!timing.output_level(true, 0));
    assert!(timing.output_level(true, 1));
    assert!(timing.output_level(true, 1000));
    assert!(!timing.output_level(true, 1001));
    assert!(!timing.output_level(true, 3000));
}

#[test]
fn test_error_display() {
    let msg = TimingError::EmptyOffHold {
        on_hold_ms: 10,
        cycle_ms: 5,
    }
    .to_string();

    assert!(msg.contains("5 ms"));
    assert!(msg.contains("10 ms"));
}

#[test]
fn test_period_of_longest_cycle() {
    let timing = CycleTiming::new(1, u32::MAX).unwrap();

    assert_eq!(timing.period_ticks(), u32::MAX as u64 + 1);
    assert_eq!(timing.off_hold_ms(), u32::MAX - 1);
    assert_eq!(timing.phase_at(u32::MAX), Phase::Reset);
}
