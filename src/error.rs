//! Error types shared by every stage of the pipeline.

use std::io;

use thiserror::Error;

use crate::record::Income;

/// Coarse classification of a [`ClassifierError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A single bad record. Recoverable: drop the record and keep going.
    Input,
    /// Not enough data to compute a statistic. Fatal for the run.
    Statistical,
    /// The data source failed. Fatal for the run.
    Collaborator,
    /// Rejected configuration values.
    Config,
}

/// Errors raised while loading, cleaning, training or evaluating.
#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    #[error("unknown {attribute} label {value:?}")]
    UnknownCategory {
        attribute: &'static str,
        value: String,
    },

    #[error("training set has no {0} records")]
    EmptyGroup(Income),

    #[error("not enough data: {0}")]
    NotEnoughData(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("bad status code {status} from {url}")]
    BadStatus { status: u16, url: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ClassifierError {
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        ClassifierError::MalformedRecord(msg.into())
    }

    pub fn not_enough_data<S: Into<String>>(msg: S) -> Self {
        ClassifierError::NotEnoughData(msg.into())
    }

    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        ClassifierError::InvalidConfig(msg.into())
    }

    /// Where the error falls in the input / statistical / collaborator split.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClassifierError::MalformedRecord(_)
            | ClassifierError::UnknownCategory { .. }
            | ClassifierError::Csv(_) => ErrorKind::Input,
            ClassifierError::EmptyGroup(_) | ClassifierError::NotEnoughData(_) => {
                ErrorKind::Statistical
            }
            ClassifierError::Http(_) | ClassifierError::BadStatus { .. } | ClassifierError::Io(_) => {
                ErrorKind::Collaborator
            }
            ClassifierError::InvalidConfig(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
