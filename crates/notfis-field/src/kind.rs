//! Field kinds and output encodings

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a field is rendered into its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// Unsigned digits, zero-padded on the left, with `decimals` implied
    /// fractional places and no separator
    Numeric { decimals: u8 },
    /// Text, space-padded on the right
    Alphanumeric,
}

impl FieldKind {
    /// Numeric kind with no fractional places
    pub const INTEGER: Self = Self::Numeric { decimals: 0 };

    /// Numeric kind with the given implied fractional places
    #[must_use]
    pub const fn numeric(decimals: u8) -> Self {
        Self::Numeric { decimals }
    }

    /// Whether this kind is numeric
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric { .. })
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric { decimals: 0 } => write!(f, "N"),
            Self::Numeric { decimals } => write!(f, "N,{decimals}"),
            Self::Alphanumeric => write!(f, "A"),
        }
    }
}

/// Character repertoire allowed in alphanumeric output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    /// Any UTF-8 text; widths count characters (default)
    #[default]
    Utf8,
    /// 7-bit ASCII only, so character and byte offsets coincide
    Ascii,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(FieldKind::INTEGER.to_string(), "N");
        assert_eq!(FieldKind::numeric(2).to_string(), "N,2");
        assert_eq!(FieldKind::Alphanumeric.to_string(), "A");
    }

    #[test]
    fn test_is_numeric() {
        assert!(FieldKind::numeric(2).is_numeric());
        assert!(!FieldKind::Alphanumeric.is_numeric());
        assert_eq!(Encoding::default(), Encoding::Utf8);
    }
}
