//! Applying a [`ClassifierModel`] to unseen records.

use log::{debug, warn};

use crate::classifier::{AttributeModel, ClassifierModel};
use crate::config::EvaluatorConfig;
use crate::error::{ClassifierError, ErrorKind, Result};
use crate::record::{Attribute, AttributeKind, Income, Record};

/// One attribute's opinion about a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Above,
    NotAbove,
    /// Unknown input or nothing learned; not counted.
    Abstain,
}

/// Vote counts for one record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub above: usize,
    pub not_above: usize,
    pub abstained: usize,
}

impl Tally {
    /// Votes that did not abstain.
    pub fn cast(&self) -> usize {
        self.above + self.not_above
    }

    /// Strict majority of cast votes; ties and all-abstain go to `<=50K`.
    pub fn majority(&self) -> Income {
        if 2 * self.above > self.cast() {
            Income::Above
        } else {
            Income::AtOrBelow
        }
    }
}

impl FromIterator<Vote> for Tally {
    fn from_iter<I: IntoIterator<Item = Vote>>(iter: I) -> Self {
        iter.into_iter().fold(Tally::default(), |mut tally, vote| {
            match vote {
                Vote::Above => tally.above += 1,
                Vote::NotAbove => tally.not_above += 1,
                Vote::Abstain => tally.abstained += 1,
            }
            tally
        })
    }
}

/// Test-set outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub total: usize,
    pub correct: usize,
    /// Records skipped because a value could not be read.
    pub rejected: usize,
}

impl Evaluation {
    /// `correct / total`, or `NotEnoughData` when nothing was evaluated.
    pub fn accuracy(&self) -> Result<f64> {
        if self.total == 0 {
            return Err(ClassifierError::not_enough_data("no test records were evaluated"));
        }
        Ok(self.correct as f64 / self.total as f64)
    }
}

/// Scores records against a trained model.
pub struct Evaluator<'a> {
    model: &'a ClassifierModel,
    discrete_vote_threshold: f64,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator using the configured discrete vote threshold.
    pub fn new(model: &'a ClassifierModel, config: &EvaluatorConfig) -> Self {
        Evaluator {
            model,
            discrete_vote_threshold: config.discrete_vote_threshold,
        }
    }

    fn vote(&self, attribute: Attribute, record: &Record) -> Result<Vote> {
        let value = record.value(attribute);
        let vote = match (attribute.kind(), self.model.get(attribute)) {
            (AttributeKind::Continuous, AttributeModel::Threshold(threshold)) => {
                match value.as_number(attribute)? {
                    Some(n) if f64::from(n) >= *threshold => Vote::Above,
                    Some(_) => Vote::NotAbove,
                    None => Vote::Abstain,
                }
            }
            (AttributeKind::Categorical(vocab), AttributeModel::Scores(scores)) => {
                match value.category_index(vocab)? {
                    Some(idx) if scores[idx] > self.discrete_vote_threshold => Vote::Above,
                    Some(_) => Vote::NotAbove,
                    None => Vote::Abstain,
                }
            }
            _ => Vote::Abstain,
        };
        Ok(vote)
    }

    /// Per-attribute votes, in [`Attribute::ALL`] order.
    pub fn votes(&self, record: &Record) -> Result<[Vote; Attribute::COUNT]> {
        let mut votes = [Vote::Abstain; Attribute::COUNT];
        for attribute in Attribute::ALL {
            votes[attribute.index()] = self.vote(attribute, record)?;
        }
        Ok(votes)
    }

    /// Predicted income class. The record's own label is never consulted.
    pub fn predict(&self, record: &Record) -> Result<Income> {
        let tally: Tally = self.votes(record)?.into_iter().collect();
        Ok(tally.majority())
    }

    /// Predicts every record and counts how many match their label.
    ///
    /// A record with an unreadable value is skipped and counted as rejected;
    /// any other error aborts the evaluation.
    pub fn evaluate_on(&self, records: &[Record]) -> Result<Evaluation> {
        let evaluation = records
            .iter()
            .enumerate()
            .try_fold(Evaluation::default(), |acc, (i, record)| {
                match self.predict(record) {
                    Ok(predicted) => Ok(Evaluation {
                        total: acc.total + 1,
                        correct: acc.correct + usize::from(predicted == record.income),
                        ..acc
                    }),
                    Err(e) if e.kind() == ErrorKind::Input => {
                        warn!("Test record {} rejected: {e}", i + 1);
                        Ok(Evaluation {
                            rejected: acc.rejected + 1,
                            ..acc
                        })
                    }
                    Err(e) => Err::<_, ClassifierError>(e),
                }
            })?;
        debug!(
            "Evaluated {} records, {} correct, {} rejected",
            evaluation.total, evaluation.correct, evaluation.rejected
        );
        Ok(evaluation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DISCRETE_VOTE_THRESHOLD;
    use crate::record::Value;

    fn record(age: u32, sex: &str, gain: u32, income: Income) -> Record {
        Record {
            age: Value::Number(age),
            workclass: Value::label("Private"),
            education_num: Value::Number(9),
            marital_status: Value::label("Divorced"),
            occupation: Value::label("Craft-repair"),
            relationship: Value::label("Unmarried"),
            race: Value::label("White"),
            sex: Value::label(sex),
            capital_gain: Value::Number(gain),
            capital_loss: Value::Number(0),
            hours_per_week: Value::Number(40),
            income,
        }
    }

    fn model() -> ClassifierModel {
        ClassifierModel::train_from_records(&[
            record(50, "Male", 8000, Income::Above),
            record(30, "Female", 0, Income::AtOrBelow),
        ])
        .unwrap()
    }

    #[test]
    fn test_tally_majority() {
        let tally: Tally = [Vote::Above, Vote::NotAbove, Vote::Abstain].into_iter().collect();
        assert_eq!(tally.cast(), 2);
        assert_eq!(tally.majority(), Income::AtOrBelow);

        let tally: Tally = [Vote::Above, Vote::Above, Vote::NotAbove].into_iter().collect();
        assert_eq!(tally.majority(), Income::Above);

        let tally: Tally = [Vote::Abstain; 11].into_iter().collect();
        assert_eq!(tally.abstained, 11);
        assert_eq!(tally.majority(), Income::AtOrBelow);
    }

    #[test]
    fn test_continuous_votes() {
        let model = model();
        let evaluator = Evaluator::new(&model, &EvaluatorConfig::default());

        let votes = evaluator.votes(&record(40, "Male", 0, Income::Above)).unwrap();
        assert_eq!(votes[Attribute::Age.index()], Vote::Above);
        assert_eq!(votes[Attribute::CapitalGain.index()], Vote::NotAbove);

        let votes = evaluator.votes(&record(39, "Male", 4000, Income::Above)).unwrap();
        assert_eq!(votes[Attribute::Age.index()], Vote::NotAbove);
        assert_eq!(votes[Attribute::CapitalGain.index()], Vote::Above);
    }

    #[test]
    fn test_unknown_values_abstain() {
        let model = model();
        let evaluator = Evaluator::new(&model, &EvaluatorConfig::default());
        let mut r = record(60, "Male", 9000, Income::Above);
        r.age = Value::Unknown;
        r.sex = Value::Unknown;
        let votes = evaluator.votes(&r).unwrap();
        assert_eq!(votes[Attribute::Age.index()], Vote::Abstain);
        assert_eq!(votes[Attribute::Sex.index()], Vote::Abstain);
    }

    #[test]
    fn test_complementary_scores_are_a_weak_vote() {
        let model = model();
        assert_eq!(model.score(Attribute::Sex, "Male"), Some(0.5));
        assert!(0.5 > DEFAULT_DISCRETE_VOTE_THRESHOLD);

        // Both labels score the same, so sex cannot tell the classes apart.
        let evaluator = Evaluator::new(&model, &EvaluatorConfig::default());
        let male = evaluator.votes(&record(45, "Male", 0, Income::Above)).unwrap();
        let female = evaluator.votes(&record(45, "Female", 0, Income::Above)).unwrap();
        assert_eq!(male[Attribute::Sex.index()], Vote::Above);
        assert_eq!(female[Attribute::Sex.index()], Vote::Above);
    }

    #[test]
    fn test_vote_threshold_is_configurable() {
        let model = model();
        let strict = EvaluatorConfig {
            discrete_vote_threshold: 0.5,
        };
        let evaluator = Evaluator::new(&model, &strict);
        let votes = evaluator.votes(&record(45, "Male", 0, Income::Above)).unwrap();
        assert_eq!(votes[Attribute::Sex.index()], Vote::NotAbove);
    }

    #[test]
    fn test_evaluate() {
        let model = model();
        let evaluator = Evaluator::new(&model, &EvaluatorConfig::default());
        let mut low = record(25, "Female", 0, Income::AtOrBelow);
        low.workclass = Value::label("Never-worked");
        low.education_num = Value::Number(5);
        low.marital_status = Value::label("Never-married");
        low.occupation = Value::label("Other-service");
        low.relationship = Value::label("Own-child");
        low.race = Value::label("Other");
        low.hours_per_week = Value::Number(10);

        let tests = [record(55, "Male", 9000, Income::Above), low];
        let evaluation = evaluator.evaluate_on(&tests).unwrap();
        assert_eq!(
            evaluation,
            Evaluation {
                total: 2,
                correct: 2,
                rejected: 0
            }
        );
        assert_eq!(evaluation.accuracy().unwrap(), 1.0);
    }

    #[test]
    fn test_empty_test_set() {
        let model = model();
        let evaluator = Evaluator::new(&model, &EvaluatorConfig::default());
        let evaluation = evaluator.evaluate_on(&[]).unwrap();
        assert_eq!(evaluation.total, 0);
        assert!(matches!(
            evaluation.accuracy(),
            Err(ClassifierError::NotEnoughData(_))
        ));
    }

    #[test]
    fn test_unknown_category_in_test_record() {
        let model = model();
        let evaluator = Evaluator::new(&model, &EvaluatorConfig::default());
        let mut r = record(55, "Male", 0, Income::Above);
        r.occupation = Value::label("Pilot");
        assert!(evaluator.predict(&r).is_err());
    }

    #[test]
    fn test_bad_test_records_are_skipped() {
        let model = model();
        let evaluator = Evaluator::new(&model, &EvaluatorConfig::default());

        let good = record(55, "Male", 9000, Income::Above);
        let mut pilot = record(55, "Male", 0, Income::Above);
        pilot.occupation = Value::label("Pilot");
        let mut misshaped = record(30, "Female", 0, Income::AtOrBelow);
        misshaped.age = Value::label("Thirty");

        let evaluation = evaluator.evaluate_on(&[good, pilot, misshaped]).unwrap();
        assert_eq!(
            evaluation,
            Evaluation {
                total: 1,
                correct: 1,
                rejected: 2
            }
        );
        assert_eq!(evaluation.accuracy().unwrap(), 1.0);
    }
}
