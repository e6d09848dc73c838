use proptest::prelude::*;

use scdrift_core::traits::DriftStatistic;
use scdrift_core::types::Level;
use scdrift_detect::{
    DistanceBetweenErrorsDetector, DistanceState, ErrorRateDetector, ErrorRateState, NoOpDetector,
};

fn confidence(correct: bool) -> f64 {
    if correct {
        1.0
    } else {
        0.0
    }
}

proptest! {
    #[test]
    fn noop_never_leaves_control(outcomes in prop::collection::vec(any::<bool>(), 0..300)) {
        let mut detector = NoOpDetector;
        for correct in outcomes {
            prop_assert_eq!(detector.update(correct, confidence(correct)).unwrap(), Level::InControl);
        }
    }

    #[test]
    fn error_rate_is_silent_during_warm_up(outcomes in prop::collection::vec(any::<bool>(), 29)) {
        let mut detector = ErrorRateDetector::new();
        for correct in outcomes {
            prop_assert_eq!(detector.update(correct, 0.5).unwrap(), Level::InControl);
        }
    }

    #[test]
    fn error_rate_resets_exactly_on_drift(outcomes in prop::collection::vec(any::<bool>(), 0..500)) {
        let mut detector = ErrorRateDetector::new();
        let mut previous_n = detector.state().n;
        for correct in outcomes {
            let level = detector.update(correct, 0.5).unwrap();
            let state = detector.state();
            if level == Level::OutOfControl {
                prop_assert_eq!(state, ErrorRateState::INITIAL);
            } else {
                prop_assert_eq!(state.n, previous_n + 1);
                prop_assert!((0.0..=1.0).contains(&state.p));
            }
            previous_n = state.n;
        }
    }

    #[test]
    fn distance_correct_predictions_keep_statistics(
        outcomes in prop::collection::vec(any::<bool>(), 0..500),
    ) {
        let mut detector = DistanceBetweenErrorsDetector::new();
        let mut last = Level::InControl;
        for correct in outcomes {
            let before = detector.state();
            let level = detector.update(correct, 0.5).unwrap();
            let after = detector.state();
            if correct {
                prop_assert_eq!(level, last);
                prop_assert_eq!(after.num_errors, before.num_errors);
                prop_assert_eq!(after.mean, before.mean);
                prop_assert_eq!(after.m2s_max, before.m2s_max);
                prop_assert_eq!(after.n, before.n + 1);
            } else if level == Level::OutOfControl {
                prop_assert_eq!(after, DistanceState::INITIAL);
            } else {
                prop_assert_eq!(after.num_errors, before.num_errors + 1);
            }
            // Drift resets the detector, including its last verdict.
            last = if level == Level::OutOfControl { Level::InControl } else { level };
        }
    }

    #[test]
    fn distance_needs_more_than_thirty_errors(
        outcomes in prop::collection::vec(any::<bool>(), 0..400),
    ) {
        let mut detector = DistanceBetweenErrorsDetector::new();
        for correct in outcomes {
            let level = detector.update(correct, 0.5).unwrap();
            if detector.state().num_errors <= 30 && level != Level::OutOfControl {
                prop_assert_eq!(level, Level::InControl);
            }
        }
    }

    #[test]
    fn out_of_range_confidence_is_rejected(
        value in prop_oneof![-1.0e6..-1.0e-9f64, 1.0 + 1.0e-9..1.0e6f64],
        correct in any::<bool>(),
    ) {
        let mut ddm = ErrorRateDetector::new();
        let mut eddm = DistanceBetweenErrorsDetector::new();
        prop_assert!(ddm.update(correct, value).is_err());
        prop_assert!(eddm.update(correct, value).is_err());
        prop_assert_eq!(ddm.state(), ErrorRateState::INITIAL);
        prop_assert_eq!(eddm.state(), DistanceState::INITIAL);
    }
}
