//! Splitting a built line back into its columns.
//!
//! Alphanumeric columns lose their right padding; numeric columns are
//! returned as transmitted, implied decimals and leading zeros included.

use crate::errors::DecodeError;
use crate::layout::FieldDef;
use crate::record_type::RecordType;
use notfis_field::FieldKind;

/// One business column of a decoded line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedField<'a> {
    /// Diagnostic label
    pub name: &'static str,
    /// Input attribute the column was built from
    pub key: &'static str,
    pub kind: FieldKind,
    pub text: &'a str,
}

/// A line split at its layout offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRecord<'a> {
    pub record_type: RecordType,
    /// Business columns in wire order; identifier and fillers are omitted
    pub fields: Vec<DecodedField<'a>>,
}

impl<'a> DecodedRecord<'a> {
    /// Text of the column built from `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.fields
            .iter()
            .find(|field| field.key == key)
            .map(|field| field.text)
    }
}

/// Decode a line, detecting its record type from the first three characters
///
/// # Errors
///
/// [`DecodeError::UnknownRecordType`] for an unrecognised identifier,
/// [`DecodeError::LengthMismatch`] when the line does not have the width of
/// its layout.
pub fn decode_line(line: &str) -> Result<DecodedRecord<'_>, DecodeError> {
    let record_type = RecordType::detect(line)
        .ok_or_else(|| DecodeError::unknown_record_type(line.chars().take(3).collect::<String>()))?;
    decode_as(record_type, line)
}

/// Decode a line against a known record type
///
/// # Errors
///
/// [`DecodeError::LengthMismatch`] when the line has neither the base width
/// nor the full width of the layout, [`DecodeError::RecordTypeMismatch`] when
/// its identifier belongs to another record type.
pub fn decode_as(record_type: RecordType, line: &str) -> Result<DecodedRecord<'_>, DecodeError> {
    let actual = line.chars().count();
    let with_optional = if actual == record_type.base_width() {
        false
    } else if actual == record_type.full_width() {
        true
    } else {
        return Err(DecodeError::length_mismatch(
            record_type,
            record_type.base_width(),
            actual,
        ));
    };

    let (identifier, _) = split_chars(line, record_type.code().len());
    if identifier != record_type.code() {
        return Err(DecodeError::record_type_mismatch(record_type, identifier));
    }

    let mut rest = line;
    let mut fields = Vec::new();
    for def in record_type.layout() {
        if def.is_optional() && !with_optional {
            continue;
        }
        let (column, tail) = split_chars(rest, def.width);
        rest = tail;
        if let Some(field) = decoded_field(def, column) {
            fields.push(field);
        }
    }

    Ok(DecodedRecord {
        record_type,
        fields,
    })
}

fn decoded_field<'a>(def: &FieldDef, column: &'a str) -> Option<DecodedField<'a>> {
    let key = def.key()?;
    let text = match def.kind {
        FieldKind::Numeric { .. } => column,
        FieldKind::Alphanumeric => column.trim_end_matches(' '),
    };
    Some(DecodedField {
        name: def.name,
        key,
        kind: def.kind,
        text,
    })
}

fn split_chars(text: &str, count: usize) -> (&str, &str) {
    let at = text
        .char_indices()
        .nth(count)
        .map_or(text.len(), |(index, _)| index);
    text.split_at(at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentHeader, build_document_header};
    use crate::shipper::{ShipperData, build_shipper_data};

    #[test]
    fn test_decode_document_header() {
        let line = build_document_header(&DocumentHeader {
            document_id: Some("NOTFI1809".into()),
        })
        .unwrap();
        let decoded = decode_line(&line).unwrap();
        assert_eq!(decoded.record_type, RecordType::DocumentHeader);
        assert_eq!(decoded.fields.len(), 1);
        assert_eq!(decoded.get("document_id"), Some("NOTFI1809"));
    }

    #[test]
    fn test_decode_keeps_numeric_digits() {
        let data = ShipperData {
            cnpj: Some("123".into()),
            state_registration: Some("ISENTO".into()),
            address: Some("RUA XV DE NOVEMBRO".into()),
            city: Some("BLUMENAU".into()),
            postal_code: Some("89010000".into()),
            state: Some("SC".into()),
            ship_date: Some("1092026".into()),
            name: Some("TÊXTIL SUL".into()),
        };
        let line = build_shipper_data(&data).unwrap();
        let decoded = decode_line(&line).unwrap();
        assert_eq!(decoded.get("cnpj"), Some("00000000000123"));
        assert_eq!(decoded.get("ship_date"), Some("01092026"));
        assert_eq!(decoded.get("name"), Some("TÊXTIL SUL"));
        assert_eq!(decoded.get("filler"), None);
    }

    #[test]
    fn test_decode_rejects_bad_lines() {
        assert_eq!(
            decode_line("999abc"),
            Err(DecodeError::unknown_record_type("999"))
        );
        assert_eq!(
            decode_line("310SHORT"),
            Err(DecodeError::length_mismatch(RecordType::DocumentHeader, 240, 8))
        );
    }

    #[test]
    fn test_decode_as_checks_identifier() {
        let line = build_document_header(&DocumentHeader {
            document_id: Some("NOTFI1809".into()),
        })
        .unwrap();
        assert_eq!(
            decode_as(RecordType::ShipperData, &line),
            Err(DecodeError::record_type_mismatch(RecordType::ShipperData, "310"))
        );
        assert_eq!(
            decode_as(RecordType::DocumentHeader, &line).unwrap().record_type,
            RecordType::DocumentHeader
        );
    }

    #[test]
    fn test_split_chars_multibyte() {
        assert_eq!(split_chars("ÃBC", 1), ("Ã", "BC"));
        assert_eq!(split_chars("AB", 5), ("AB", ""));
    }
}
