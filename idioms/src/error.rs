//! Error types for the idioms crate.

use thiserror::Error;

/// Date/time construction and parsing error.
#[derive(Debug, Error)]
pub enum DateTimeError {
    /// Year/month/day do not form a calendar date.
    #[error("invalid date {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("parse error: {0}")]
    Parse(#[from] chrono::ParseError),

    #[error("unknown time zone: {0}")]
    UnknownZone(String),

    /// Local time falls in a daylight-saving gap.
    #[error("local time does not exist in {zone}")]
    NonexistentLocalTime { zone: String },

    #[error("date arithmetic out of range")]
    OutOfRange,
}

/// CSV reconciliation error.
#[derive(Debug, Error)]
pub enum BookError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("line {line}: book {name:?} received twice")]
    Duplicate { line: usize, name: String },
}

/// Base64 text decoding error.
#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded bytes are not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Checked arithmetic failed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("i32 overflow while adding {at}")]
pub struct OverflowError {
    pub at: i32,
}

/// A loan criterion rejected the application.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoanError {
    #[error("identity could not be verified")]
    Identity,

    #[error("outstanding debt of {0}")]
    HistoricalDebt(u64),

    #[error("operating at a loss of {0}")]
    ProfitAndLoss(i64),
}

/// Fork/join task failure.
#[derive(Debug, Error)]
pub enum ParallelError {
    #[error("task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

pub type DateTimeResult<T> = Result<T, DateTimeError>;
