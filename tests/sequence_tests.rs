//! Integration tests for PeriodicFunction and FunctionSequence

mod common;
use common::*;

use rgb_blender::{BlendError, FunctionSequence, InputRange, Periodic, PeriodicFunction};

fn countdown(x: f32) -> f32 {
    10.0 - x
}

/// Builds a sequence whose members each return their own period
fn sequence_of(periods: &[u32]) -> FunctionSequence<PeriodicFunction, 8> {
    fn five(_x: f32) -> f32 {
        5.0
    }
    fn ten(_x: f32) -> f32 {
        10.0
    }
    fn fifteen(_x: f32) -> f32 {
        15.0
    }

    let mut seq = FunctionSequence::new();
    for &period in periods {
        let function: fn(f32) -> f32 = match period {
            5 => five,
            10 => ten,
            15 => fifteen,
            _ => zero,
        };
        seq.append(PeriodicFunction::new(function, period, (0.0, 1.0)))
            .unwrap();
    }
    seq
}

#[test]
fn periodic_function_sweeps_input_range() {
    let f = PeriodicFunction::new(countdown, 10, (0.0, 10.0));
    assert_eq!(f.value_at(5), 5.0);
    assert_eq!(f.value_at(17), 3.0);
    assert_eq!(f.value_at(0), 10.0);
}

#[test]
fn periodic_function_reports_period() {
    let f = PeriodicFunction::new(countdown, 10, (0.0, 10.0));
    assert_eq!(f.period(), 10);
}

#[test]
fn malformed_range_degenerates_to_zero_width() {
    let bounds: &[f32] = &[2.0, 4.0, 6.0];
    let f = PeriodicFunction::new(identity, 4, bounds);

    assert_eq!(f.input_range(), InputRange::EMPTY);
    assert_eq!(f.value_at(3), 0.0);
}

#[test]
fn set_funcs_sums_periods() {
    let mut seq = FunctionSequence::<PeriodicFunction, 4>::new();
    seq.set_funcs([with_period(1), with_period(2), with_period(3)])
        .unwrap();

    assert_eq!(seq.len(), 3);
    assert_eq!(seq.period(), 6);
}

#[test]
fn set_funcs_replaces_existing_members() {
    let mut seq = FunctionSequence::<PeriodicFunction, 4>::new();
    seq.append(with_period(40)).unwrap();
    seq.set_funcs([with_period(1), with_period(2)]).unwrap();

    assert_eq!(seq.len(), 2);
    assert_eq!(seq.period(), 3);
}

#[test]
fn append_after_set_funcs_updates_period() {
    let mut seq = FunctionSequence::<PeriodicFunction, 4>::new();
    seq.set_funcs([with_period(1), with_period(2)]).unwrap();
    seq.append(with_period(3)).unwrap();

    assert_eq!(seq.len(), 3);
    assert_eq!(seq.period(), 6);
}

#[test]
fn zero_periods_sum_to_zero() {
    let mut seq = FunctionSequence::<PeriodicFunction, 4>::new();
    seq.set_funcs([with_period(0), with_period(0), with_period(0)])
        .unwrap();
    assert_eq!(seq.period(), 0);
}

#[test]
fn single_member_period() {
    let mut seq = FunctionSequence::<PeriodicFunction, 1>::new();
    seq.append(with_period(42)).unwrap();
    assert_eq!(seq.period(), 42);
}

#[test]
fn append_rejects_overflow() {
    let mut seq = FunctionSequence::<PeriodicFunction, 2>::new();
    seq.append(with_period(1)).unwrap();
    seq.append(with_period(2)).unwrap();

    assert_eq!(seq.append(with_period(3)), Err(BlendError::CapacityExceeded));
    assert_eq!(seq.period(), 3);
}

#[test]
fn set_funcs_rejects_overflow_and_keeps_members() {
    let mut seq = FunctionSequence::<PeriodicFunction, 2>::new();
    seq.append(with_period(7)).unwrap();

    let result = seq.set_funcs([with_period(1), with_period(2), with_period(3)]);
    assert_eq!(result, Err(BlendError::CapacityExceeded));
    assert_eq!(seq.len(), 1);
    assert_eq!(seq.period(), 7);
}

#[test]
fn empty_sequence_has_no_value() {
    let seq = FunctionSequence::<PeriodicFunction, 4>::new();
    assert!(seq.is_empty());
    assert_eq!(seq.period(), 0);
    assert!(seq.value_at(0).is_none());
    assert!(seq.value_at(17).is_none());
    assert_eq!(seq.member_index(3), None);
}

#[test]
fn member_index_resolves_boundaries_to_earlier_member() {
    let seq = sequence_of(&[5, 15, 10]);

    assert_eq!(seq.member_index(7), Some((1, 2)));
    assert_eq!(seq.member_index(33), Some((0, 3)));
    assert_eq!(seq.member_index(5), Some((0, 5)));
    assert_eq!(seq.member_index(20), Some((1, 15)));
    assert_eq!(seq.member_index(21), Some((2, 1)));
    assert_eq!(seq.member_index(0), Some((0, 0)));
}

#[test]
fn value_at_uses_owning_member() {
    let seq = sequence_of(&[5, 15, 10]);

    let cases = [(7, 15.0), (33, 5.0), (5, 5.0), (20, 15.0), (29, 10.0)];
    for (step, want) in cases {
        let (value, member) = seq.value_at(step).unwrap();
        assert_eq!(value, want, "step {}", step);
        assert_eq!(member.period() as f32, want, "step {}", step);
    }
}

#[test]
fn zero_period_members_still_answer() {
    let mut seq = FunctionSequence::<PeriodicFunction, 2>::new();
    seq.append(PeriodicFunction::new(identity, 0, (0.25, 1.0)))
        .unwrap();

    assert_eq!(seq.member_index(9), Some((0, 0)));
    assert_eq!(seq.value_at(9).map(|(v, _)| v), Some(0.25));
}
