//! Untyped field descriptors.
//!
//! Field descriptors that arrive as data (JSON, for instance) may lack any
//! attribute. [`RawFieldSpec`] accepts them as they are and checks them
//! before formatting, echoing the descriptor in the diagnostic.

use crate::errors::FieldError;
use crate::format::{FieldResult, FieldSpec, format_field_with};
use crate::kind::{Encoding, FieldKind};
use crate::value::FieldValue;
use serde::{Deserialize, Serialize};

/// Field descriptor with every attribute optional.
///
/// `kind` accepts `"N"`/`"A"`, `"numeric"`/`"alphanumeric"` (any case) and
/// the numeric tags `1`/`2`. The Portuguese attribute names `campo`,
/// `valor`, `tipo`, `tamanho` and `decimal` are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFieldSpec {
    #[serde(default, alias = "campo", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, alias = "valor", skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
    #[serde(default, alias = "tipo", skip_serializing_if = "Option::is_none")]
    pub kind: Option<serde_json::Value>,
    #[serde(default, alias = "tamanho", skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    #[serde(default, alias = "decimal", skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KindTag {
    Numeric,
    Alphanumeric,
}

impl KindTag {
    fn parse(tag: &serde_json::Value) -> Option<Self> {
        match tag {
            serde_json::Value::Number(n) => match n.as_u64() {
                Some(1) => Some(Self::Numeric),
                Some(2) => Some(Self::Alphanumeric),
                _ => None,
            },
            serde_json::Value::String(s) => match s.to_ascii_lowercase().as_str() {
                "n" | "numeric" => Some(Self::Numeric),
                "a" | "alphanumeric" => Some(Self::Alphanumeric),
                _ => None,
            },
            _ => None,
        }
    }
}

impl RawFieldSpec {
    /// Check the descriptor and borrow it as a typed [`FieldSpec`].
    ///
    /// # Errors
    ///
    /// [`FieldError::MissingKind`] or [`FieldError::InvalidKind`] when the
    /// kind is absent or unrecognised; [`FieldError::MissingData`] when the
    /// value, width or name is absent, or decimals for a numeric field;
    /// [`FieldError::InvalidWidth`] for a zero width.
    pub fn resolve(&self) -> Result<FieldSpec<'_>, FieldError> {
        let Some(tag) = &self.kind else {
            return Err(FieldError::missing_kind(self.echo()));
        };
        let tag = KindTag::parse(tag).ok_or_else(|| FieldError::invalid_kind(self.echo()))?;

        let decimals = match tag {
            KindTag::Numeric => Some(self.decimals),
            KindTag::Alphanumeric => None,
        };
        let (Some(name), Some(value), Some(width)) = (&self.name, &self.value, self.width) else {
            return Err(FieldError::missing_data(self.echo()));
        };
        let kind = match decimals {
            Some(Some(decimals)) => FieldKind::numeric(decimals),
            Some(None) => return Err(FieldError::missing_data(self.echo())),
            None => FieldKind::Alphanumeric,
        };
        if width == 0 {
            return Err(FieldError::invalid_width(self.echo()));
        }

        Ok(FieldSpec::new(name, value, kind, width))
    }

    /// Resolve and format with UTF-8 output
    ///
    /// # Errors
    ///
    /// Any error from [`RawFieldSpec::resolve`] or
    /// [`crate::format_field_with`].
    pub fn format(&self) -> FieldResult {
        self.format_with(Encoding::Utf8)
    }

    /// Resolve and format with the given encoding
    ///
    /// # Errors
    ///
    /// Any error from [`RawFieldSpec::resolve`] or
    /// [`crate::format_field_with`].
    pub fn format_with(&self, encoding: Encoding) -> FieldResult {
        format_field_with(&self.resolve()?, encoding)
    }

    fn echo(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}
