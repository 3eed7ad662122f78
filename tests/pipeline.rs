use income_classifier::clean::clean_text;
use income_classifier::config::{EvaluatorConfig, SplitConfig};
use income_classifier::{
    Attribute, ClassifierError, ClassifierModel, Evaluator, Income, classify_text,
    train_test_split,
};

// Two training rows (one per class) followed by two test rows.
const FOUR_RECORDS: &str = "\
50, Self-emp-inc, 83311, Bachelors, 14, Married-civ-spouse, Exec-managerial, Husband, White, Male, 5000, 0, 60, United-States, >50K
20, Private, 215646, HS-grad, 9, Never-married, Handlers-cleaners, Own-child, Black, Female, 0, 0, 20, United-States, <=50K
45, Self-emp-inc, 234721, Masters, 13, Married-civ-spouse, Exec-managerial, Husband, White, Male, 4000, 0, 50, United-States, >50K
22, Without-pay, 338409, 11th, 8, Separated, Other-service, Unmarried, Other, Female, 0, 0, 15, Cuba, <=50K
";

fn half_split() -> SplitConfig {
    SplitConfig {
        train_ratio: 0.5,
        shuffle_seed: None,
    }
}

#[test]
fn separated_classes_are_fully_recovered() {
    let summary = classify_text(FOUR_RECORDS, &half_split(), &EvaluatorConfig::default()).unwrap();

    assert_eq!(summary.rejected, 0);
    assert_eq!(summary.evaluation.total, 2);
    assert_eq!(summary.evaluation.correct, 2);
    assert_eq!(summary.evaluation.accuracy().unwrap(), 1.0);
    assert_eq!(summary.model.threshold(Attribute::Age), Some(35.0));
    assert_eq!(summary.model.threshold(Attribute::HoursPerWeek), Some(40.0));
}

#[test]
fn malformed_rows_do_not_stop_the_run() {
    let text = format!(
        "{FOUR_RECORDS}\
         31, Private, 1, HS-grad, 9, Divorced, Sales, Unmarried, Purple, Female, 0, 0, 40, United-States, <=50K\n\
         truncated, row\n"
    );
    let cleaned = clean_text(&text);
    assert_eq!(cleaned.rejected, 2);
    assert_eq!(cleaned.len(), 4);
}

#[test]
fn training_ignores_record_order() {
    let cleaned = clean_text(FOUR_RECORDS);
    let forward = ClassifierModel::train_from_records(&cleaned.records).unwrap();

    let mut shuffled = train_test_split(&cleaned.records, 0.5, Some(42));
    shuffled.train.extend(shuffled.test);
    let permuted = ClassifierModel::train_from_records(&shuffled.train).unwrap();

    assert_eq!(forward, permuted);
}

#[test]
fn evaluation_ignores_record_order() {
    let cleaned = clean_text(FOUR_RECORDS);
    let model = ClassifierModel::train_from_records(&cleaned.records).unwrap();
    let evaluator = Evaluator::new(&model, &EvaluatorConfig::default());

    let mut reversed = cleaned.records.clone();
    reversed.reverse();
    assert_eq!(
        evaluator.evaluate_on(&cleaned.records).unwrap(),
        evaluator.evaluate_on(&reversed).unwrap()
    );
}

#[test]
fn single_class_training_set_fails() {
    let above_only: String = FOUR_RECORDS
        .lines()
        .filter(|line| line.ends_with(">50K"))
        .map(|line| format!("{line}\n"))
        .collect();

    let err = classify_text(&above_only, &half_split(), &EvaluatorConfig::default()).unwrap_err();
    assert!(matches!(err, ClassifierError::EmptyGroup(Income::AtOrBelow)));
}

#[test]
fn invalid_split_is_rejected() {
    let split = SplitConfig {
        train_ratio: 0.0,
        shuffle_seed: None,
    };
    let err = classify_text(FOUR_RECORDS, &split, &EvaluatorConfig::default()).unwrap_err();
    assert!(matches!(err, ClassifierError::InvalidConfig(_)));
}
