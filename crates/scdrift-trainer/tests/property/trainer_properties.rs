use proptest::prelude::*;

use scdrift_core::config::DetectorKind;
use scdrift_core::types::{Instance, Level};
use scdrift_trainer::DriftAwareTrainer;
use test_fixtures::{echo_instance, factory, EchoClassifier, StreamScenario};

fn stream(outcomes: &[bool]) -> Vec<Instance> {
    outcomes
        .iter()
        .enumerate()
        .map(|(i, &correct)| echo_instance(correct, i))
        .collect()
}

fn detector_kind() -> impl Strategy<Value = DetectorKind> {
    prop_oneof![
        Just(DetectorKind::None),
        Just(DetectorKind::ErrorRate),
        Just(DetectorKind::DistanceBetweenErrors),
    ]
}

proptest! {
    #[test]
    fn buffer_is_empty_whenever_in_control(
        outcomes in prop::collection::vec(prop::bool::weighted(0.8), 1..400),
        kind in detector_kind(),
        incremental in any::<bool>(),
    ) {
        let template = if incremental { EchoClassifier::incremental() } else { EchoClassifier::batch() };
        let mut trainer = DriftAwareTrainer::new(scdrift_detect::build(kind))
            .with_base_model(factory(template))
            .with_diagnostics(true);
        trainer.train(StreamScenario::schema(), stream(&outcomes)).unwrap();

        prop_assert_eq!(trainer.diagnostics().len(), outcomes.len() - 1);
        for record in trainer.diagnostics() {
            if record.level == Level::InControl {
                prop_assert_eq!(record.buffered_len, 0);
            }
            if record.level == Level::OutOfControl {
                prop_assert_eq!(record.local_accuracy, 1.0);
            }
            prop_assert!((0.0..=1.0).contains(&record.global_accuracy));
            prop_assert!((0.0..=1.0).contains(&record.local_accuracy));
        }
        prop_assert!(trainer.local_count() <= trainer.instances_seen());
        prop_assert_eq!(trainer.instances_seen(), outcomes.len() as u64);
    }

    #[test]
    fn drift_count_matches_out_of_control_records(
        outcomes in prop::collection::vec(prop::bool::weighted(0.7), 1..400),
    ) {
        let mut trainer = DriftAwareTrainer::new(scdrift_detect::build(DetectorKind::ErrorRate))
            .with_base_model(factory(EchoClassifier::batch()))
            .with_diagnostics(true);
        trainer.train(StreamScenario::schema(), stream(&outcomes)).unwrap();

        let drifts = trainer
            .diagnostics()
            .iter()
            .filter(|r| r.level == Level::OutOfControl)
            .count() as u64;
        let warnings = trainer
            .diagnostics()
            .iter()
            .filter(|r| r.level == Level::Warning)
            .count() as u64;
        prop_assert_eq!(trainer.stats().drifts, drifts);
        prop_assert_eq!(trainer.stats().warnings, warnings);
        prop_assert_eq!(trainer.stats().instances, outcomes.len() as u64);
    }

    #[test]
    fn noop_detector_keeps_every_instance(
        outcomes in prop::collection::vec(any::<bool>(), 1..200),
    ) {
        let mut trainer = DriftAwareTrainer::new(scdrift_detect::build(DetectorKind::None))
            .with_base_model(factory(EchoClassifier::batch()));
        trainer.train(StreamScenario::schema(), stream(&outcomes)).unwrap();

        prop_assert_eq!(trainer.retained_window().len(), outcomes.len());
        prop_assert_eq!(trainer.local_accuracy(), trainer.global_accuracy());
        prop_assert_eq!(trainer.stats().models_trained, outcomes.len() as u64);
    }
}
