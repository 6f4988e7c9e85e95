use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Risk percentage is required to add a trade")]
    MissingRiskPercentage,

    #[error("No journal entry for {0}")]
    EntryNotFound(NaiveDate),

    #[error("Duplicate journal entry for {0}")]
    DuplicateEntry(NaiveDate),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Invalid setting {field}: {value}")]
    InvalidSetting { field: &'static str, value: f64 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, JournalError>;
