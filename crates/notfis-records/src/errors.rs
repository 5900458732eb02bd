//! Error types for record building and line decoding

use crate::record_type::RecordType;
use notfis_field::FieldError;
use thiserror::Error;

/// Outcome of building one record: the complete line, or why it could not
/// be produced. A partial line is never returned.
pub type RecordResult = std::result::Result<String, RecordError>;

/// Errors that can occur when building a record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// One or more required attributes are absent; nothing was formatted
    #[error(
        "argument error ({}): all record data must be provided; missing {}. {payload}",
        .record.builder_name(),
        .missing.join(", ")
    )]
    MissingInput {
        record: RecordType,
        missing: Vec<&'static str>,
        /// The input as JSON
        payload: String,
    },

    /// One or more columns failed to format
    #[error("{}", join_messages(.errors, .separator))]
    InvalidFields {
        record: RecordType,
        errors: Vec<FieldError>,
        separator: String,
    },
}

impl RecordError {
    /// Create a missing-input error
    pub fn missing_input(
        record: RecordType,
        missing: Vec<&'static str>,
        payload: impl Into<String>,
    ) -> Self {
        Self::MissingInput {
            record,
            missing,
            payload: payload.into(),
        }
    }

    /// Create an aggregated field error
    pub fn invalid_fields(
        record: RecordType,
        errors: Vec<FieldError>,
        separator: impl Into<String>,
    ) -> Self {
        Self::InvalidFields {
            record,
            errors,
            separator: separator.into(),
        }
    }

    /// Record type whose build failed
    #[must_use]
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::MissingInput { record, .. } | Self::InvalidFields { record, .. } => *record,
        }
    }

    /// Field-level errors, empty for missing input
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::MissingInput { .. } => &[],
            Self::InvalidFields { errors, .. } => errors,
        }
    }

    /// Absent attributes, empty for field errors
    #[must_use]
    pub fn missing(&self) -> &[&'static str] {
        match self {
            Self::MissingInput { missing, .. } => missing,
            Self::InvalidFields { .. } => &[],
        }
    }
}

fn join_messages(errors: &[FieldError], separator: &str) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Errors that can occur when splitting a line back into columns
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Unknown record type: {0:?}")]
    UnknownRecordType(String),

    #[error("Record {record} must have {expected} characters but line has {actual}")]
    LengthMismatch {
        record: RecordType,
        expected: usize,
        actual: usize,
    },

    #[error("Expected record {expected} but line starts with {actual:?}")]
    RecordTypeMismatch { expected: RecordType, actual: String },
}

impl DecodeError {
    /// Create an unknown-record-type error
    pub fn unknown_record_type(code: impl Into<String>) -> Self {
        Self::UnknownRecordType(code.into())
    }

    /// Create a length-mismatch error
    pub fn length_mismatch(record: RecordType, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            record,
            expected,
            actual,
        }
    }

    /// Create a record-type-mismatch error
    pub fn record_type_mismatch(expected: RecordType, actual: impl Into<String>) -> Self {
        Self::RecordTypeMismatch {
            expected,
            actual: actual.into(),
        }
    }
}
