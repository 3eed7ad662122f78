//! Midpoint classifier construction.
//!
//! Training is a pure fold: every record is folded into the aggregate of its
//! income group, and the finished pair of aggregates is then mapped to a
//! [`ClassifierModel`]. All sums and counts are integers, so the result does
//! not depend on record order.

use log::{debug, warn};
use ndarray::Array1;

use crate::error::{ClassifierError, Result};
use crate::record::{Attribute, AttributeKind, Income, Record};

/// Integer sums and counts for one income group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupAggregate {
    records: u64,
    /// Sum of known values, per continuous attribute.
    sums: Array1<u64>,
    /// Number of known observations, per attribute.
    known: Array1<u64>,
    /// Per-label counts, per categorical attribute. Empty for continuous ones.
    categories: Vec<Array1<u64>>,
}

impl Default for GroupAggregate {
    fn default() -> Self {
        GroupAggregate {
            records: 0,
            sums: Array1::zeros(Attribute::COUNT),
            known: Array1::zeros(Attribute::COUNT),
            categories: Attribute::ALL
                .iter()
                .map(|a| Array1::zeros(a.vocabulary().map_or(0, |v| v.len())))
                .collect(),
        }
    }
}

impl GroupAggregate {
    /// Folds one record into the aggregate.
    pub fn observe(mut self, record: &Record) -> Result<Self> {
        self.records += 1;
        for attribute in Attribute::ALL {
            let i = attribute.index();
            let value = record.value(attribute);
            match attribute.kind() {
                AttributeKind::Continuous => {
                    if let Some(n) = value.as_number(attribute)? {
                        self.sums[i] += u64::from(n);
                        self.known[i] += 1;
                    }
                }
                AttributeKind::Categorical(vocab) => {
                    if let Some(idx) = value.category_index(vocab)? {
                        self.categories[i][idx] += 1;
                        self.known[i] += 1;
                    }
                }
            }
        }
        Ok(self)
    }

    /// Records folded in, including ones with unknown values.
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Known observations of `attribute`.
    pub fn known(&self, attribute: Attribute) -> u64 {
        self.known[attribute.index()]
    }

    /// Mean of the known values of a continuous attribute.
    pub fn mean(&self, attribute: Attribute) -> Option<f64> {
        let i = attribute.index();
        match self.known[i] {
            0 => None,
            n => Some(self.sums[i] as f64 / n as f64),
        }
    }

    /// Share of known observations taking each label of a categorical attribute.
    pub fn fractions(&self, attribute: Attribute) -> Option<Array1<f64>> {
        let i = attribute.index();
        match self.known[i] {
            0 => None,
            n => Some(self.categories[i].mapv(|c| c as f64 / n as f64)),
        }
    }
}

/// Aggregates of the two income groups of a training set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingAggregates {
    pub above: GroupAggregate,
    pub below: GroupAggregate,
}

impl TrainingAggregates {
    /// Folds one record into the aggregate of its income group.
    pub fn observe(self, record: &Record) -> Result<Self> {
        let TrainingAggregates { above, below } = self;
        Ok(match record.income {
            Income::Above => TrainingAggregates {
                above: above.observe(record)?,
                below,
            },
            Income::AtOrBelow => TrainingAggregates {
                above,
                below: below.observe(record)?,
            },
        })
    }
}

/// Folds a training set into per-group aggregates.
pub fn aggregate(records: &[Record]) -> Result<TrainingAggregates> {
    records
        .iter()
        .try_fold(TrainingAggregates::default(), TrainingAggregates::observe)
}

/// What the classifier learned about one attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeModel {
    /// Midpoint of the two group means.
    Threshold(f64),
    /// Midpoint of the two group fractions, aligned with the vocabulary.
    Scores(Vec<f64>),
    /// One group had no known values; the attribute always abstains.
    Uninformative,
}

/// One learned value per attribute, aligned with [`Attribute::ALL`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierModel {
    attributes: Vec<AttributeModel>,
}

fn midpoint(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}

impl ClassifierModel {
    /// Builds the model from a labelled training set.
    ///
    /// Fails with [`ClassifierError::EmptyGroup`] unless both income classes
    /// are present, and with [`ClassifierError::UnknownCategory`] on a label
    /// outside its vocabulary.
    pub fn train_from_records(records: &[Record]) -> Result<Self> {
        let aggregates = aggregate(records)?;
        debug!(
            "Training on {} above / {} below records",
            aggregates.above.records(),
            aggregates.below.records()
        );
        Self::from_aggregates(&aggregates)
    }

    /// Maps finished group aggregates to midpoint thresholds and scores.
    pub fn from_aggregates(aggregates: &TrainingAggregates) -> Result<Self> {
        let TrainingAggregates { above, below } = aggregates;
        if above.records() == 0 {
            return Err(ClassifierError::EmptyGroup(Income::Above));
        }
        if below.records() == 0 {
            return Err(ClassifierError::EmptyGroup(Income::AtOrBelow));
        }

        let attributes = Attribute::ALL
            .iter()
            .map(|&attribute| {
                let learned = match attribute.kind() {
                    AttributeKind::Continuous => above
                        .mean(attribute)
                        .zip(below.mean(attribute))
                        .map(|(a, b)| AttributeModel::Threshold(midpoint(a, b))),
                    AttributeKind::Categorical(_) => above
                        .fractions(attribute)
                        .zip(below.fractions(attribute))
                        .map(|(a, b)| AttributeModel::Scores(((a + b) / 2.0).to_vec())),
                };
                learned.unwrap_or_else(|| {
                    warn!("No known {attribute} values in one income group; attribute will abstain");
                    AttributeModel::Uninformative
                })
            })
            .collect();

        Ok(ClassifierModel { attributes })
    }

    /// What was learned for `attribute`.
    pub fn get(&self, attribute: Attribute) -> &AttributeModel {
        &self.attributes[attribute.index()]
    }

    /// Midpoint threshold of a continuous attribute.
    pub fn threshold(&self, attribute: Attribute) -> Option<f64> {
        match self.get(attribute) {
            AttributeModel::Threshold(t) => Some(*t),
            _ => None,
        }
    }

    /// Per-label scores of a categorical attribute, in vocabulary order.
    pub fn scores(&self, attribute: Attribute) -> Option<&[f64]> {
        match self.get(attribute) {
            AttributeModel::Scores(scores) => Some(scores),
            _ => None,
        }
    }

    /// Score for a single label of a categorical attribute.
    pub fn score(&self, attribute: Attribute, label: &str) -> Option<f64> {
        let idx = attribute.vocabulary()?.index_of(label)?;
        self.scores(attribute).map(|scores| scores[idx])
    }

    /// Iterates attributes alongside what was learned for each.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &AttributeModel)> {
        Attribute::ALL.into_iter().zip(self.attributes.iter())
    }
}
