//! The field formatter: one value in, one fixed-width token out

use crate::errors::FieldError;
use crate::kind::{Encoding, FieldKind};
use crate::numeric::{Decimal, NumericError};
use crate::value::FieldValue;
use tracing::trace;

/// Outcome of formatting one field: exactly `width` characters, or the
/// reason it could not be produced.
pub type FieldResult = Result<String, FieldError>;

/// A fully described field ready for formatting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec<'a> {
    /// Diagnostic label used in error messages
    pub name: &'a str,
    pub value: &'a FieldValue,
    pub kind: FieldKind,
    /// Slot width in characters
    pub width: usize,
}

impl<'a> FieldSpec<'a> {
    /// Describe a field
    #[must_use]
    pub fn new(name: &'a str, value: &'a FieldValue, kind: FieldKind, width: usize) -> Self {
        Self {
            name,
            value,
            kind,
            width,
        }
    }

    /// Describe a numeric field with `decimals` implied places
    #[must_use]
    pub fn numeric(name: &'a str, value: &'a FieldValue, width: usize, decimals: u8) -> Self {
        Self::new(name, value, FieldKind::numeric(decimals), width)
    }

    /// Describe an alphanumeric field
    #[must_use]
    pub fn alphanumeric(name: &'a str, value: &'a FieldValue, width: usize) -> Self {
        Self::new(name, value, FieldKind::Alphanumeric, width)
    }

    /// Format with UTF-8 output
    ///
    /// # Errors
    ///
    /// See [`format_field_with`].
    pub fn format(&self) -> FieldResult {
        format_field(self)
    }
}

/// Format a field with UTF-8 output.
///
/// # Errors
///
/// See [`format_field_with`].
pub fn format_field(spec: &FieldSpec<'_>) -> FieldResult {
    format_field_with(spec, Encoding::Utf8)
}

/// Format a field into exactly `spec.width` characters.
///
/// Numeric values are rounded half-up to their implied places, stripped of
/// the decimal point and zero-padded on the left. Alphanumeric values are
/// space-padded on the right. Content never gets truncated.
///
/// # Errors
///
/// Returns [`FieldError::InvalidNumber`] or [`FieldError::NegativeNumber`]
/// when a numeric value cannot be read as an unsigned decimal,
/// [`FieldError::Overflow`] when the content is wider than the slot,
/// [`FieldError::ControlCharacter`] for text carrying line breaks or other
/// control characters, and [`FieldError::NonAscii`] for non-ASCII text under
/// [`Encoding::Ascii`].
pub fn format_field_with(spec: &FieldSpec<'_>, encoding: Encoding) -> FieldResult {
    let result = match spec.kind {
        FieldKind::Numeric { decimals } => format_numeric(spec, decimals),
        FieldKind::Alphanumeric => format_alphanumeric(spec, encoding),
    };

    match &result {
        Ok(text) => trace!(field = spec.name, width = spec.width, %text, "Formatted field"),
        Err(error) => trace!(field = spec.name, %error, "Rejected field"),
    }
    result
}

fn format_numeric(spec: &FieldSpec<'_>, decimals: u8) -> FieldResult {
    let decimal = Decimal::parse(spec.value).map_err(|error| match error {
        NumericError::NotANumber => FieldError::invalid_number(spec.name, spec.value.to_string()),
        NumericError::Negative => FieldError::negative_number(spec.name, spec.value.to_string()),
    })?;

    let digits = decimal.implied_digits(usize::from(decimals));
    if digits.len() > spec.width {
        return Err(FieldError::overflow(spec.name, spec.width, digits.len()));
    }

    let width = spec.width;
    Ok(format!("{digits:0>width$}"))
}

fn format_alphanumeric(spec: &FieldSpec<'_>, encoding: Encoding) -> FieldResult {
    let text = spec.value.as_text();
    if text.chars().any(char::is_control) {
        return Err(FieldError::control_character(spec.name, text));
    }
    if encoding == Encoding::Ascii && !text.is_ascii() {
        return Err(FieldError::non_ascii(spec.name, text));
    }

    let length = text.chars().count();
    if length > spec.width {
        return Err(FieldError::overflow(spec.name, spec.width, length));
    }

    let width = spec.width;
    Ok(format!("{text:<width$}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(value: impl Into<FieldValue>, width: usize, decimals: u8) -> FieldResult {
        let value = value.into();
        format_field(&FieldSpec::numeric("TEST", &value, width, decimals))
    }

    fn alphanumeric(value: impl Into<FieldValue>, width: usize) -> FieldResult {
        let value = value.into();
        format_field(&FieldSpec::alphanumeric("TEST", &value, width))
    }

    #[test]
    fn test_numeric_padding() {
        assert_eq!(numeric(7, 5, 0).unwrap(), "00007");
        assert_eq!(numeric(12.3, 6, 2).unwrap(), "001230");
        assert_eq!(numeric("310", 3, 0).unwrap(), "310");
        assert_eq!(numeric("000", 3, 0).unwrap(), "000");
    }

    #[test]
    fn test_numeric_exact_fit() {
        assert_eq!(numeric(9_999_999_999_999.99, 15, 2).unwrap(), "999999999999999");
    }

    #[test]
    fn test_alphanumeric_padding() {
        assert_eq!(alphanumeric("AB", 5).unwrap(), "AB   ");
        assert_eq!(alphanumeric("", 4).unwrap(), "    ");
        assert_eq!(alphanumeric(88_010_000, 9).unwrap(), "88010000 ");
    }

    #[test]
    fn test_alphanumeric_counts_characters() {
        let text = alphanumeric("SÃO JOSÉ", 10).unwrap();
        assert_eq!(text.chars().count(), 10);
        assert_eq!(text, "SÃO JOSÉ  ");
    }

    #[test]
    fn test_numeric_overflow() {
        let err = numeric(123_456, 3, 0).unwrap_err();
        assert_eq!(err, FieldError::overflow("TEST", 3, 6));
        assert!(err.to_string().contains("size 3"));
        assert!(err.to_string().contains("has 6"));
    }

    #[test]
    fn test_overflow_after_rounding() {
        assert!(numeric(99.999, 4, 2).is_err());
        assert_eq!(numeric(99.994, 4, 2).unwrap(), "9999");
    }

    #[test]
    fn test_alphanumeric_overflow() {
        let err = alphanumeric("TOO LONG", 3).unwrap_err();
        assert_eq!(err, FieldError::overflow("TEST", 3, 8));
    }

    #[test]
    fn test_comma_decimal_rejected() {
        let err = numeric("12,5", 7, 2).unwrap_err();
        assert_eq!(err, FieldError::invalid_number("TEST", "12,5"));
        assert!(err.to_string().contains("invalid number"));
    }

    #[test]
    fn test_negative_rejected() {
        let err = numeric(-5, 5, 0).unwrap_err();
        assert!(matches!(err, FieldError::NegativeNumber { .. }));
    }

    #[test]
    fn test_ascii_encoding() {
        let value = FieldValue::text("JOINVILLE");
        let spec = FieldSpec::alphanumeric("CIDADE", &value, 12);
        assert_eq!(
            format_field_with(&spec, Encoding::Ascii).unwrap(),
            "JOINVILLE   "
        );

        let value = FieldValue::text("SÃO PAULO");
        let spec = FieldSpec::alphanumeric("CIDADE", &value, 12);
        let err = format_field_with(&spec, Encoding::Ascii).unwrap_err();
        assert!(matches!(err, FieldError::NonAscii { .. }));
        assert!(format_field_with(&spec, Encoding::Utf8).is_ok());
    }

    #[test]
    fn test_line_breaks_rejected_in_every_encoding() {
        for text in ["RUA A\n313XYZ", "RUA A\r", "\tRUA"] {
            let value = FieldValue::text(text);
            let spec = FieldSpec::alphanumeric("ENDERECO", &value, 40);
            for encoding in [Encoding::Utf8, Encoding::Ascii] {
                let err = format_field_with(&spec, encoding).unwrap_err();
                assert_eq!(err, FieldError::control_character("ENDERECO", text));
            }
        }
    }

    #[test]
    fn test_width_invariant() {
        for width in 2..=20 {
            let text = numeric(3.5, width, 1).unwrap();
            assert_eq!(text.len(), width);
            let text = alphanumeric("X", width).unwrap();
            assert_eq!(text.len(), width);
        }
    }
}
