use criterion::{black_box, criterion_group, criterion_main, Criterion};

use scdrift_core::config::DetectorKind;
use scdrift_trainer::DriftAwareTrainer;
use test_fixtures::{factory, load_scenario, EchoClassifier, MajorityClassifier, StreamScenario};

fn bench_incremental_stream(c: &mut Criterion) {
    let instances = load_scenario("tightening_errors").instances();

    for kind in DetectorKind::ALL {
        c.bench_function(&format!("incremental_echo_{kind}_701_instances"), |b| {
            b.iter(|| {
                let mut trainer = DriftAwareTrainer::new(scdrift_detect::build(kind))
                    .with_base_model(factory(EchoClassifier::incremental()));
                trainer
                    .train(StreamScenario::schema(), instances.iter().cloned())
                    .unwrap();
                black_box(trainer.stats());
            });
        });
    }
}

fn bench_batch_retrain_fallback(c: &mut Criterion) {
    let instances = load_scenario("gradual_degradation").instances();

    c.bench_function("batch_echo_error_rate_121_instances", |b| {
        b.iter(|| {
            let mut trainer =
                DriftAwareTrainer::new(scdrift_detect::build(DetectorKind::ErrorRate))
                    .with_base_model(factory(EchoClassifier::batch()));
            trainer
                .train(StreamScenario::schema(), instances.iter().cloned())
                .unwrap();
            black_box(trainer.global_accuracy());
        });
    });
}

fn bench_majority_label_switch(c: &mut Criterion) {
    let schema = StreamScenario::schema();
    let instances: Vec<_> = (0..1000)
        .map(|i| scdrift_core::Instance::new(vec![0.0], usize::from(i % 400 >= 200)))
        .collect();

    c.bench_function("majority_error_rate_1000_instances", |b| {
        b.iter(|| {
            let mut trainer =
                DriftAwareTrainer::new(scdrift_detect::build(DetectorKind::ErrorRate))
                    .with_base_model(factory(MajorityClassifier::new()));
            trainer
                .train(schema.clone(), instances.iter().cloned())
                .unwrap();
            black_box(trainer.global_accuracy());
        });
    });
}

criterion_group!(
    benches,
    bench_incremental_stream,
    bench_batch_retrain_fallback,
    bench_majority_label_switch
);
criterion_main!(benches);
