//! Cleaned census records and the fixed category vocabularies.

use std::fmt;

use crate::error::{ClassifierError, Result};

/// Marker used by the census data for a missing value.
pub const UNKNOWN: &str = "?";

/// An ordered, immutable list of valid labels for one categorical attribute.
///
/// Label positions define the index space of per-category statistics.
#[derive(Debug, PartialEq, Eq)]
pub struct Vocabulary {
    name: &'static str,
    labels: &'static [&'static str],
}

impl Vocabulary {
    /// Creates a vocabulary from a fixed label list.
    pub const fn new(name: &'static str, labels: &'static [&'static str]) -> Self {
        Vocabulary { name, labels }
    }

    /// Attribute name the vocabulary belongs to.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Labels in index order.
    pub fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Case-sensitive exact lookup.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| *l == label)
    }
}

pub static WORKCLASS: Vocabulary = Vocabulary::new(
    "workclass",
    &[
        "Private",
        "Self-emp-not-inc",
        "Self-emp-inc",
        "Federal-gov",
        "Local-gov",
        "State-gov",
        "Without-pay",
        "Never-worked",
    ],
);

pub static MARITAL_STATUS: Vocabulary = Vocabulary::new(
    "marital-status",
    &[
        "Married-civ-spouse",
        "Divorced",
        "Never-married",
        "Separated",
        "Widowed",
        "Married-spouse-absent",
        "Married-AF-spouse",
    ],
);

pub static OCCUPATION: Vocabulary = Vocabulary::new(
    "occupation",
    &[
        "Tech-support",
        "Craft-repair",
        "Other-service",
        "Sales",
        "Exec-managerial",
        "Prof-specialty",
        "Handlers-cleaners",
        "Machine-op-inspct",
        "Adm-clerical",
        "Farming-fishing",
        "Transport-moving",
        "Priv-house-serv",
        "Protective-serv",
        "Armed-Forces",
    ],
);

pub static RELATIONSHIP: Vocabulary = Vocabulary::new(
    "relationship",
    &[
        "Wife",
        "Own-child",
        "Husband",
        "Not-in-family",
        "Other-relative",
        "Unmarried",
    ],
);

pub static RACE: Vocabulary = Vocabulary::new(
    "race",
    &[
        "White",
        "Asian-Pac-Islander",
        "Amer-Indian-Eskimo",
        "Other",
        "Black",
    ],
);

pub static SEX: Vocabulary = Vocabulary::new("sex", &["Female", "Male"]);

/// How an attribute is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Continuous,
    Categorical(&'static Vocabulary),
}

/// The eleven predictive attributes, in record order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    Age,
    Workclass,
    EducationNum,
    MaritalStatus,
    Occupation,
    Relationship,
    Race,
    Sex,
    CapitalGain,
    CapitalLoss,
    HoursPerWeek,
}

impl Attribute {
    pub const COUNT: usize = 11;

    pub const ALL: [Attribute; Attribute::COUNT] = [
        Attribute::Age,
        Attribute::Workclass,
        Attribute::EducationNum,
        Attribute::MaritalStatus,
        Attribute::Occupation,
        Attribute::Relationship,
        Attribute::Race,
        Attribute::Sex,
        Attribute::CapitalGain,
        Attribute::CapitalLoss,
        Attribute::HoursPerWeek,
    ];

    /// Position of the attribute in [`Attribute::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Column name as used by the census data.
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Age => "age",
            Attribute::Workclass => WORKCLASS.name(),
            Attribute::EducationNum => "education-num",
            Attribute::MaritalStatus => MARITAL_STATUS.name(),
            Attribute::Occupation => OCCUPATION.name(),
            Attribute::Relationship => RELATIONSHIP.name(),
            Attribute::Race => RACE.name(),
            Attribute::Sex => SEX.name(),
            Attribute::CapitalGain => "capital-gain",
            Attribute::CapitalLoss => "capital-loss",
            Attribute::HoursPerWeek => "hours-per-week",
        }
    }

    /// Whether the attribute is continuous or drawn from a vocabulary.
    pub fn kind(self) -> AttributeKind {
        match self {
            Attribute::Workclass => AttributeKind::Categorical(&WORKCLASS),
            Attribute::MaritalStatus => AttributeKind::Categorical(&MARITAL_STATUS),
            Attribute::Occupation => AttributeKind::Categorical(&OCCUPATION),
            Attribute::Relationship => AttributeKind::Categorical(&RELATIONSHIP),
            Attribute::Race => AttributeKind::Categorical(&RACE),
            Attribute::Sex => AttributeKind::Categorical(&SEX),
            Attribute::Age
            | Attribute::EducationNum
            | Attribute::CapitalGain
            | Attribute::CapitalLoss
            | Attribute::HoursPerWeek => AttributeKind::Continuous,
        }
    }

    /// The attribute's vocabulary, if it is categorical.
    pub fn vocabulary(self) -> Option<&'static Vocabulary> {
        match self.kind() {
            AttributeKind::Categorical(vocab) => Some(vocab),
            AttributeKind::Continuous => None,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single field value: unknown, a count, or a category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Unknown,
    Number(u32),
    Label(String),
}

impl Value {
    /// Parses a raw token for the given attribute.
    ///
    /// Labels must match the attribute's vocabulary exactly; anything else is
    /// rejected rather than guessed.
    pub fn parse(attribute: Attribute, token: &str) -> Result<Value> {
        if token == UNKNOWN {
            return Ok(Value::Unknown);
        }
        match attribute.kind() {
            AttributeKind::Continuous => token.parse::<u32>().map(Value::Number).map_err(|_| {
                ClassifierError::malformed(format!("{attribute} is not a count: {token:?}"))
            }),
            AttributeKind::Categorical(vocab) => match vocab.index_of(token) {
                Some(_) => Ok(Value::Label(token.to_string())),
                None => Err(ClassifierError::UnknownCategory {
                    attribute: vocab.name(),
                    value: token.to_string(),
                }),
            },
        }
    }

    /// Builds a label value without checking it against a vocabulary.
    pub fn label<S: Into<String>>(label: S) -> Value {
        Value::Label(label.into())
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    /// Numeric reading for a continuous attribute. `None` when unknown.
    pub fn as_number(&self, attribute: Attribute) -> Result<Option<u32>> {
        match self {
            Value::Unknown => Ok(None),
            Value::Number(n) => Ok(Some(*n)),
            Value::Label(label) => Err(ClassifierError::malformed(format!(
                "{attribute} expects a count, found label {label:?}"
            ))),
        }
    }

    /// Vocabulary index for a categorical attribute. `None` when unknown.
    pub fn category_index(&self, vocab: &Vocabulary) -> Result<Option<usize>> {
        match self {
            Value::Unknown => Ok(None),
            Value::Label(label) => {
                vocab
                    .index_of(label)
                    .map(Some)
                    .ok_or_else(|| ClassifierError::UnknownCategory {
                        attribute: vocab.name(),
                        value: label.clone(),
                    })
            }
            Value::Number(n) => Err(ClassifierError::malformed(format!(
                "{} expects a label, found {n}",
                vocab.name()
            ))),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unknown => f.write_str(UNKNOWN),
            Value::Number(n) => write!(f, "{n}"),
            Value::Label(label) => f.write_str(label),
        }
    }
}

/// The binary income class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Income {
    /// `>50K`
    Above,
    /// `<=50K`
    AtOrBelow,
}

impl Income {
    pub fn label(self) -> &'static str {
        match self {
            Income::Above => ">50K",
            Income::AtOrBelow => "<=50K",
        }
    }

    /// Accepts `>50K` / `<=50K`, with or without the trailing period used by
    /// `adult.test`.
    pub fn parse(token: &str) -> Result<Income> {
        match token.strip_suffix('.').unwrap_or(token) {
            ">50K" => Ok(Income::Above),
            "<=50K" => Ok(Income::AtOrBelow),
            other => Err(ClassifierError::malformed(format!(
                "unrecognised income label {other:?}"
            ))),
        }
    }
}

impl fmt::Display for Income {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One cleaned observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub age: Value,
    pub workclass: Value,
    pub education_num: Value,
    pub marital_status: Value,
    pub occupation: Value,
    pub relationship: Value,
    pub race: Value,
    pub sex: Value,
    pub capital_gain: Value,
    pub capital_loss: Value,
    pub hours_per_week: Value,
    pub income: Income,
}

impl Record {
    pub fn value(&self, attribute: Attribute) -> &Value {
        match attribute {
            Attribute::Age => &self.age,
            Attribute::Workclass => &self.workclass,
            Attribute::EducationNum => &self.education_num,
            Attribute::MaritalStatus => &self.marital_status,
            Attribute::Occupation => &self.occupation,
            Attribute::Relationship => &self.relationship,
            Attribute::Race => &self.race,
            Attribute::Sex => &self.sex,
            Attribute::CapitalGain => &self.capital_gain,
            Attribute::CapitalLoss => &self.capital_loss,
            Attribute::HoursPerWeek => &self.hours_per_week,
        }
    }

    pub fn is_above(&self) -> bool {
        self.income == Income::Above
    }
}
