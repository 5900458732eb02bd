//! Column layouts and the generic record assembler.
//!
//! Each record type declares its columns once, as static data, in wire
//! order. [`assemble`] evaluates any such layout against an input value:
//! presence check first, then one formatter call per column, then a single
//! line or a single aggregated error.

use crate::config::NotfisConfig;
use crate::errors::{RecordError, RecordResult};
use crate::record_type::RecordType;
use notfis_field::{FieldKind, FieldSpec, FieldValue, format_field_with};
use serde::Serialize;
use tracing::debug;

/// Diagnostic label shared by all filler columns
pub const FILLER: &str = "FILLER";

/// Where a column takes its content from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// Constant text, such as the record identifier
    Literal(&'static str),
    /// Blank padding
    Filler,
    /// Input attribute that must be present
    Required(&'static str),
    /// Input attribute emitted only when present
    Optional(&'static str),
}

/// One column of a record layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Diagnostic label
    pub name: &'static str,
    pub kind: FieldKind,
    pub width: usize,
    pub source: FieldSource,
}

impl FieldDef {
    /// Record identifier column: numeric, three wide
    #[must_use]
    pub const fn identifier(code: &'static str) -> Self {
        Self {
            name: "RECORD IDENTIFIER",
            kind: FieldKind::INTEGER,
            width: 3,
            source: FieldSource::Literal(code),
        }
    }

    /// Blank padding column
    #[must_use]
    pub const fn filler(width: usize) -> Self {
        Self {
            name: FILLER,
            kind: FieldKind::Alphanumeric,
            width,
            source: FieldSource::Filler,
        }
    }

    /// Required alphanumeric column
    #[must_use]
    pub const fn text(name: &'static str, key: &'static str, width: usize) -> Self {
        Self {
            name,
            kind: FieldKind::Alphanumeric,
            width,
            source: FieldSource::Required(key),
        }
    }

    /// Required numeric column with `decimals` implied places
    #[must_use]
    pub const fn number(name: &'static str, key: &'static str, width: usize, decimals: u8) -> Self {
        Self {
            name,
            kind: FieldKind::numeric(decimals),
            width,
            source: FieldSource::Required(key),
        }
    }

    /// Turn a required column into an optional one
    #[must_use]
    pub const fn optional(self) -> Self {
        let source = match self.source {
            FieldSource::Required(key) => FieldSource::Optional(key),
            other => other,
        };
        Self { source, ..self }
    }

    /// Input attribute feeding this column, if any
    #[must_use]
    pub const fn key(&self) -> Option<&'static str> {
        match self.source {
            FieldSource::Required(key) | FieldSource::Optional(key) => Some(key),
            FieldSource::Literal(_) | FieldSource::Filler => None,
        }
    }

    /// Constant content of a literal column
    #[must_use]
    pub const fn literal(&self) -> Option<&'static str> {
        match self.source {
            FieldSource::Literal(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self.source, FieldSource::Optional(_))
    }

    #[must_use]
    pub const fn is_filler(&self) -> bool {
        matches!(self.source, FieldSource::Filler)
    }
}

/// Input for one record type.
///
/// Implementors expose their attributes by key; the layout decides order,
/// width and kind.
pub trait Record: Serialize {
    /// Record type this input builds
    const RECORD_TYPE: RecordType;

    /// Value of the attribute named `key`, if present
    fn value(&self, key: &str) -> Option<&FieldValue>;

    /// Build the line with the default configuration
    ///
    /// # Errors
    ///
    /// See [`assemble`].
    fn build(&self) -> RecordResult
    where
        Self: Sized,
    {
        assemble(self, &NotfisConfig::default())
    }

    /// Build the line with an explicit configuration
    ///
    /// # Errors
    ///
    /// See [`assemble`].
    fn build_with(&self, config: &NotfisConfig) -> RecordResult
    where
        Self: Sized,
    {
        assemble(self, config)
    }
}

/// Evaluate a record's layout against its input.
///
/// Every column is formatted in layout order even after a failure, so the
/// error lists every offending field, not just the first.
///
/// # Errors
///
/// [`RecordError::MissingInput`] when a required attribute is absent (the
/// formatter is not invoked at all), [`RecordError::InvalidFields`] when
/// one or more columns fail to format.
pub fn assemble<R: Record>(record: &R, config: &NotfisConfig) -> RecordResult {
    let record_type = R::RECORD_TYPE;
    let layout = record_type.layout();

    let missing: Vec<&'static str> = layout
        .iter()
        .filter_map(|def| match def.source {
            FieldSource::Required(key) if record.value(key).is_none() => Some(key),
            _ => None,
        })
        .collect();
    if !missing.is_empty() {
        debug!(record = %record_type, ?missing, "Record input incomplete");
        return Err(RecordError::missing_input(
            record_type,
            missing,
            payload(record),
        ));
    }

    let blank = FieldValue::text("");
    let mut line = String::with_capacity(record_type.full_width());
    let mut errors = Vec::new();

    for def in layout {
        let literal;
        let value = match def.source {
            FieldSource::Literal(text) => {
                literal = FieldValue::text(text);
                &literal
            }
            FieldSource::Filler => &blank,
            FieldSource::Required(key) | FieldSource::Optional(key) => {
                match record.value(key) {
                    Some(value) => value,
                    None => continue,
                }
            }
        };

        let spec = FieldSpec::new(def.name, value, def.kind, def.width);
        match format_field_with(&spec, config.encoding) {
            Ok(text) => line.push_str(&text),
            Err(error) => errors.push(error),
        }
    }

    if !errors.is_empty() {
        debug!(record = %record_type, error_count = errors.len(), "Record rejected");
        return Err(RecordError::invalid_fields(
            record_type,
            errors,
            config.error_separator.clone(),
        ));
    }

    debug!(record = %record_type, width = line.chars().count(), "Assembled record");
    Ok(line)
}

fn payload<R: Serialize>(record: &R) -> String {
    serde_json::to_string(record).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_column() {
        let def = FieldDef::identifier("311");
        assert_eq!(def.literal(), Some("311"));
        assert_eq!(def.key(), None);
        assert!(!def.is_optional());
    }

    #[test]
    fn test_optional_conversion() {
        let def = FieldDef::text("CFOP", "cfop", 4).optional();
        assert!(def.is_optional());
        assert_eq!(def.key(), Some("cfop"));
        assert_eq!(def.source, FieldSource::Optional("cfop"));

        // literals and fillers are left alone
        assert_eq!(FieldDef::filler(6).optional().source, FieldSource::Filler);
    }

    #[test]
    fn test_filler_column() {
        let def = FieldDef::filler(145);
        assert!(def.is_filler());
        assert_eq!(def.name, FILLER);
        assert_eq!(def.kind, FieldKind::Alphanumeric);
    }

    #[test]
    fn test_number_column() {
        let def = FieldDef::number("VALOR", "valor", 15, 2);
        assert_eq!(def.kind, FieldKind::numeric(2));
        assert_eq!(def.source, FieldSource::Required("valor"));
    }
}
