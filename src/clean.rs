//! Turns raw `adult.data` text into validated [`Record`]s.
//!
//! Each line holds 15 comma-space separated columns. `fnlwgt`, `education`
//! and `native-country` are dropped; the remaining twelve become a record.
//! Rows with the wrong column count, a a non-numeric count, an out-of-vocabulary
//! label or an unrecognised income class are rejected one at a time.

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{info, warn};
use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::error::{ClassifierError, Result};
use crate::record::{Attribute, Income, Record, Value};

/// One raw row, positionally matching the census column order.
#[derive(Debug, Deserialize)]
struct RawRecord {
    age: String,
    workclass: String,
    _fnlwgt: IgnoredAny,
    _education: IgnoredAny,
    education_num: String,
    marital_status: String,
    occupation: String,
    relationship: String,
    race: String,
    sex: String,
    capital_gain: String,
    capital_loss: String,
    hours_per_week: String,
    _native_country: IgnoredAny,
    income: String,
}

impl TryFrom<RawRecord> for Record {
    type Error = ClassifierError;

    fn try_from(raw: RawRecord) -> Result<Self> {
        Ok(Record {
            age: Value::parse(Attribute::Age, &raw.age)?,
            workclass: Value::parse(Attribute::Workclass, &raw.workclass)?,
            education_num: Value::parse(Attribute::EducationNum, &raw.education_num)?,
            marital_status: Value::parse(Attribute::MaritalStatus, &raw.marital_status)?,
            occupation: Value::parse(Attribute::Occupation, &raw.occupation)?,
            relationship: Value::parse(Attribute::Relationship, &raw.relationship)?,
            race: Value::parse(Attribute::Race, &raw.race)?,
            sex: Value::parse(Attribute::Sex, &raw.sex)?,
            capital_gain: Value::parse(Attribute::CapitalGain, &raw.capital_gain)?,
            capital_loss: Value::parse(Attribute::CapitalLoss, &raw.capital_loss)?,
            hours_per_week: Value::parse(Attribute::HoursPerWeek, &raw.hours_per_week)?,
            income: Income::parse(&raw.income)?,
        })
    }
}

/// Records that survived cleaning plus the number that did not.
#[derive(Debug, Clone, Default)]
pub struct CleanedDataset {
    pub records: Vec<Record>,
    pub rejected: usize,
}

impl CleanedDataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parses a single raw row.
pub fn parse_row(row: &StringRecord) -> Result<Record> {
    if row.len() != 15 {
        return Err(ClassifierError::malformed(format!(
            "expected 15 columns, found {}",
            row.len()
        )));
    }
    let raw: RawRecord = row.deserialize(None)?;
    Record::try_from(raw)
}

/// Cleans a whole dataset, logging and counting every rejected row.
pub fn clean_text(text: &str) -> CleanedDataset {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut cleaned = CleanedDataset::default();
    for (i, result) in rdr.records().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                warn!("Row {} rejected: {e}", i + 1);
                cleaned.rejected += 1;
                continue;
            }
        };
        if row.iter().all(str::is_empty) {
            continue;
        }
        match parse_row(&row) {
            Ok(record) => cleaned.records.push(record),
            Err(e) => {
                let line = row.position().map_or(i as u64 + 1, |p| p.line());
                warn!("Record on line {line} rejected: {e}");
                cleaned.rejected += 1;
            }
        }
    }

    info!(
        "Cleaned {} records ({} rejected)",
        cleaned.records.len(),
        cleaned.rejected
    );
    cleaned
}
