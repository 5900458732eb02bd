//! 310 - document header

use crate::errors::RecordResult;
use crate::layout::{FieldDef, Record};
use crate::record_type::RecordType;
use notfis_field::FieldValue;
use serde::{Deserialize, Serialize};

pub(crate) static LAYOUT: [FieldDef; 3] = [
    FieldDef::identifier("310"),
    FieldDef::text("DOCUMENT ID", "document_id", 14),
    FieldDef::filler(223),
];

/// Input for the document header (CABEÇALHO DE DOCUMENTO)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentHeader {
    /// Conventionally "NOTFIDDMMHHMMS"
    #[serde(alias = "identificacao", skip_serializing_if = "Option::is_none")]
    pub document_id: Option<FieldValue>,
}

impl Record for DocumentHeader {
    const RECORD_TYPE: RecordType = RecordType::DocumentHeader;

    fn value(&self, key: &str) -> Option<&FieldValue> {
        match key {
            "document_id" => self.document_id.as_ref(),
            _ => None,
        }
    }
}

/// Build a 310 line
///
/// # Errors
///
/// See [`crate::assemble`].
pub fn build_document_header(data: &DocumentHeader) -> RecordResult {
    data.build()
}
