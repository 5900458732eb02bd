//! Decimal text handling for numeric fields.
//!
//! Rounding works on the decimal digits of the value rather than on its
//! binary approximation, so `1.005` at two places is `1.01`.

use crate::value::FieldValue;

/// Why a value could not be read as an unsigned decimal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumericError {
    NotANumber,
    Negative,
}

/// Non-negative decimal split at the point. `integer` has no leading zeros
/// but is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Decimal {
    integer: String,
    fraction: String,
}

impl Decimal {
    pub(crate) fn parse(value: &FieldValue) -> Result<Self, NumericError> {
        match value {
            FieldValue::Number(n) => Self::from_f64(*n),
            FieldValue::Text(s) => Self::from_text(s),
        }
    }

    fn from_text(text: &str) -> Result<Self, NumericError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Self::zero());
        }
        if let Some(decimal) = Self::from_plain_literal(text)? {
            return Ok(decimal);
        }
        let parsed = text
            .parse::<f64>()
            .map_err(|_| NumericError::NotANumber)?;
        Self::from_f64(parsed)
    }

    /// Digits with an optional sign and at most one point. Returns `None`
    /// for anything else so the caller can try the float grammar.
    fn from_plain_literal(text: &str) -> Result<Option<Self>, NumericError> {
        let (negative, unsigned) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if integer.len() + fraction.len() == 0 || !all_digits(integer) || !all_digits(fraction) {
            return Ok(None);
        }

        let decimal = Self::from_parts(integer, fraction);
        if negative && !decimal.is_zero() {
            return Err(NumericError::Negative);
        }
        Ok(Some(decimal))
    }

    fn from_f64(value: f64) -> Result<Self, NumericError> {
        if !value.is_finite() {
            return Err(NumericError::NotANumber);
        }
        if value < 0.0 {
            return Err(NumericError::Negative);
        }
        if value == 0.0 {
            return Ok(Self::zero());
        }
        let text = value.to_string();
        let (integer, fraction) = text.split_once('.').unwrap_or((&text, ""));
        Ok(Self::from_parts(integer, fraction))
    }

    fn from_parts(integer: &str, fraction: &str) -> Self {
        let integer = integer.trim_start_matches('0');
        Self {
            integer: if integer.is_empty() {
                "0".to_string()
            } else {
                integer.to_string()
            },
            fraction: fraction.to_string(),
        }
    }

    fn zero() -> Self {
        Self::from_parts("0", "")
    }

    fn is_zero(&self) -> bool {
        self.integer == "0" && self.fraction.bytes().all(|b| b == b'0')
    }

    /// Round half-up to `decimals` places and drop the point, leaving the
    /// implied-decimal digit string carried on the wire.
    pub(crate) fn implied_digits(&self, decimals: usize) -> String {
        let mut digits = self.integer.clone();
        if self.fraction.len() <= decimals {
            digits.push_str(&self.fraction);
            digits.extend(std::iter::repeat_n('0', decimals - self.fraction.len()));
            return digits;
        }

        digits.push_str(&self.fraction[..decimals]);
        if self.fraction.as_bytes()[decimals] >= b'5' {
            increment(&digits)
        } else {
            digits
        }
    }
}

fn increment(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    let mut carry = true;
    for byte in bytes.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            carry = false;
            break;
        }
    }
    if carry {
        bytes.insert(0, b'1');
    }
    bytes.into_iter().map(char::from).collect()
}
