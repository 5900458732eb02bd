//! Error types for field formatting

use thiserror::Error;

/// Reasons a single field cannot be rendered into its fixed-width slot.
///
/// The first four variants mean the field descriptor itself is incomplete
/// (missing-input errors); the rest mean a present value does not fit the
/// declared shape (format violations).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Descriptor carries no kind at all
    #[error("argument error: field kind must be specified. {input}")]
    MissingKind { input: String },

    /// Descriptor carries a kind tag that is neither numeric nor alphanumeric
    #[error("argument error: invalid field kind. {input}")]
    InvalidKind { input: String },

    /// Value, width, name or (for numeric fields) decimals are absent
    #[error("argument error: all field data must be provided. {input}")]
    MissingData { input: String },

    /// Declared width is zero
    #[error("argument error: field width must be positive. {input}")]
    InvalidWidth { input: String },

    /// Value does not coerce to a finite number
    #[error("argument error: invalid number for field \"{field}\" ({value})")]
    InvalidNumber { field: String, value: String },

    /// Value is a number below zero
    #[error("argument error: negative number for field \"{field}\" ({value})")]
    NegativeNumber { field: String, value: String },

    /// Rendered content is longer than the slot
    #[error("size error: field \"{field}\" must have size {width} but content has {actual}")]
    Overflow {
        field: String,
        width: usize,
        actual: usize,
    },

    /// Alphanumeric content outside 7-bit ASCII while ASCII output is required
    #[error("encoding error: field \"{field}\" must be ASCII ({value})")]
    NonAscii { field: String, value: String },

    /// Alphanumeric content containing a control character such as a line break
    #[error("encoding error: field \"{field}\" must not contain control characters ({value:?})")]
    ControlCharacter { field: String, value: String },
}

impl FieldError {
    /// Create a missing-kind error echoing the descriptor
    pub fn missing_kind(input: impl Into<String>) -> Self {
        Self::MissingKind {
            input: input.into(),
        }
    }

    /// Create an invalid-kind error echoing the descriptor
    pub fn invalid_kind(input: impl Into<String>) -> Self {
        Self::InvalidKind {
            input: input.into(),
        }
    }

    /// Create a missing-data error echoing the descriptor
    pub fn missing_data(input: impl Into<String>) -> Self {
        Self::MissingData {
            input: input.into(),
        }
    }

    /// Create a zero-width error echoing the descriptor
    pub fn invalid_width(input: impl Into<String>) -> Self {
        Self::InvalidWidth {
            input: input.into(),
        }
    }

    /// Create an invalid-number error
    pub fn invalid_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a negative-number error
    pub fn negative_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::NegativeNumber {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an overflow error
    pub fn overflow(field: impl Into<String>, width: usize, actual: usize) -> Self {
        Self::Overflow {
            field: field.into(),
            width,
            actual,
        }
    }

    /// Create a non-ASCII error
    pub fn non_ascii(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::NonAscii {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a control-character error
    pub fn control_character(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ControlCharacter {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Whether the descriptor was incomplete, as opposed to a value that
    /// failed conversion or did not fit.
    #[must_use]
    pub fn is_missing_input(&self) -> bool {
        matches!(
            self,
            Self::MissingKind { .. }
                | Self::InvalidKind { .. }
                | Self::MissingData { .. }
                | Self::InvalidWidth { .. }
        )
    }

    /// Diagnostic name of the offending field, when known
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::InvalidNumber { field, .. }
            | Self::NegativeNumber { field, .. }
            | Self::Overflow { field, .. }
            | Self::NonAscii { field, .. }
            | Self::ControlCharacter { field, .. } => Some(field),
            _ => None,
        }
    }
}
