//! Detector behavior over the shared stream scenarios.

use scdrift_core::config::DetectorKind;
use scdrift_core::errors::ValidationError;
use scdrift_core::traits::DriftStatistic;
use scdrift_core::types::Level;
use scdrift_detect::{build, for_name};
use test_fixtures::load_scenario;

fn levels(detector: &mut dyn DriftStatistic, outcomes: &[bool]) -> Vec<Level> {
    outcomes
        .iter()
        .map(|&correct| {
            let confidence = if correct { 1.0 } else { 0.0 };
            detector.update(correct, confidence).unwrap()
        })
        .collect()
}

fn positions(levels: &[Level], wanted: Level) -> Vec<usize> {
    levels
        .iter()
        .enumerate()
        .filter(|(_, l)| **l == wanted)
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn stable_stream_stays_in_control_for_every_kind() {
    let outcomes = load_scenario("stable").observed_outcomes();
    for kind in DetectorKind::ALL {
        let mut detector = build(kind);
        let out = levels(detector.as_mut(), &outcomes);
        assert!(
            out.iter().all(|l| *l == Level::InControl),
            "{kind} left control on a perfect stream"
        );
    }
}

#[test]
fn error_rate_drifts_on_first_error_after_perfect_run() {
    let outcomes = load_scenario("abrupt_after_perfect").observed_outcomes();
    let mut detector = build(DetectorKind::ErrorRate);
    let out = levels(detector.as_mut(), &outcomes);
    assert!(positions(&out, Level::Warning).is_empty());
    assert_eq!(positions(&out, Level::OutOfControl), vec![30]);
}

#[test]
fn error_rate_warns_before_drift_on_gradual_degradation() {
    let outcomes = load_scenario("gradual_degradation").observed_outcomes();
    let mut detector = build(DetectorKind::ErrorRate);
    let out = levels(detector.as_mut(), &outcomes);
    assert_eq!(positions(&out, Level::Warning), (103..108).collect::<Vec<_>>());
    assert_eq!(positions(&out, Level::OutOfControl), vec![108]);
}

#[test]
fn distance_detector_catches_bunching_errors() {
    let outcomes = load_scenario("tightening_errors").observed_outcomes();
    let mut detector = build(DetectorKind::DistanceBetweenErrors);
    let out = levels(detector.as_mut(), &outcomes);
    assert_eq!(positions(&out, Level::Warning), (591..627).collect::<Vec<_>>());
    assert_eq!(positions(&out, Level::OutOfControl), vec![627]);
    assert!(out[628..].iter().all(|l| *l == Level::InControl));
}

#[test]
fn distance_detector_ignores_short_streams() {
    let outcomes = load_scenario("gradual_degradation").observed_outcomes();
    let mut detector = build(DetectorKind::DistanceBetweenErrors);
    let out = levels(detector.as_mut(), &outcomes);
    assert!(out.iter().all(|l| *l == Level::InControl));
}

#[test]
fn initialize_restores_fresh_behavior() {
    let outcomes = load_scenario("gradual_degradation").observed_outcomes();
    let mut reused = for_name("ddm").unwrap();
    levels(reused.as_mut(), &outcomes[..105]);
    reused.initialize();
    let mut fresh = for_name("ddm").unwrap();
    assert_eq!(
        levels(reused.as_mut(), &outcomes),
        levels(fresh.as_mut(), &outcomes)
    );
}

#[test]
fn nan_confidence_is_rejected_by_every_kind() {
    for kind in DetectorKind::ALL {
        let mut detector = build(kind);
        let err = detector.update(true, f64::NAN).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidConfidence { .. }));
    }
}

#[test]
fn error_rate_warning_can_resolve_without_drift() {
    let outcomes = load_scenario("warning_recovers").observed_outcomes();
    let mut detector = build(DetectorKind::ErrorRate);
    let out = levels(detector.as_mut(), &outcomes);
    assert_eq!(positions(&out, Level::Warning), (62..67).collect::<Vec<_>>());
    assert!(positions(&out, Level::OutOfControl).is_empty());
}
