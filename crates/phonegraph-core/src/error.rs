//! Error types for phone number and call-record parsing.

use thiserror::Error;

/// Why a string is not a `ddd-ddd-dddd` phone number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneNumberError {
    #[error("'{number}' has {len} characters, expected 12")]
    WrongLength { number: String, len: usize },

    #[error("'{number}' is missing a '-' at position {position}")]
    ExpectedDash { number: String, position: usize },

    #[error("'{number}' has a non-digit at position {position}")]
    ExpectedDigit { number: String, position: usize },
}

/// Why a line could not be turned into a call record.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("expected two phone numbers, found {found}")]
    MissingNumber { found: usize },

    #[error("unexpected extra input '{extra}'")]
    ExtraTokens { extra: String },

    #[error("incorrect format: {0}")]
    InvalidNumber(#[from] PhoneNumberError),

    #[error("{0} is paired with itself")]
    SameNumber(String),

    #[error("line is not valid UTF-8")]
    NotUtf8(#[source] std::string::FromUtf8Error),

    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for record parsing.
pub type Result<T> = std::result::Result<T, RecordError>;
