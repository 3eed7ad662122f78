use criterion::{Criterion, criterion_group, criterion_main};
use income_classifier::config::EvaluatorConfig;
use income_classifier::record::{MARITAL_STATUS, OCCUPATION, RACE, RELATIONSHIP, SEX, WORKCLASS};
use income_classifier::{ClassifierModel, Evaluator, Income, Record, Value};
use std::hint::black_box;

fn synthetic_records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let above = i % 4 == 0;
            let pick = |labels: &[&str]| Value::label(labels[i % labels.len()]);
            Record {
                age: Value::Number(18 + (i % 60) as u32 + if above { 10 } else { 0 }),
                workclass: pick(WORKCLASS.labels()),
                education_num: Value::Number(1 + (i % 16) as u32),
                marital_status: pick(MARITAL_STATUS.labels()),
                occupation: pick(OCCUPATION.labels()),
                relationship: pick(RELATIONSHIP.labels()),
                race: pick(RACE.labels()),
                sex: pick(SEX.labels()),
                capital_gain: Value::Number(if above { 5000 } else { 0 }),
                capital_loss: Value::Number((i % 3) as u32 * 100),
                hours_per_week: if i % 17 == 0 {
                    Value::Unknown
                } else {
                    Value::Number(20 + (i % 40) as u32)
                },
                income: if above { Income::Above } else { Income::AtOrBelow },
            }
        })
        .collect()
}

fn bench_train(c: &mut Criterion) {
    let records = synthetic_records(24_000);

    c.bench_function("train 24k records", |b| {
        b.iter(|| ClassifierModel::train_from_records(black_box(&records)))
    });
}

fn bench_bulk_prediction(c: &mut Criterion) {
    let records = synthetic_records(10_000);
    let model = ClassifierModel::train_from_records(&records).unwrap();
    let evaluator = Evaluator::new(&model, &EvaluatorConfig::default());

    c.bench_function("bulk predict 10k records", |b| {
        b.iter(|| evaluator.evaluate_on(black_box(&records)))
    });
}

criterion_group!(benches, bench_train, bench_bulk_prediction);
criterion_main!(benches);
