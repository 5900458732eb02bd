//! 000 - interchange header

use crate::errors::RecordResult;
use crate::layout::{FieldDef, Record};
use crate::record_type::RecordType;
use notfis_field::FieldValue;
use serde::{Deserialize, Serialize};

pub(crate) static LAYOUT: [FieldDef; 7] = [
    FieldDef::identifier("000"),
    FieldDef::text("SENDER ID", "sender", 35),
    FieldDef::text("RECIPIENT ID", "recipient", 35),
    FieldDef::number("DATE", "date", 6, 0),
    FieldDef::number("TIME", "time", 4, 0),
    FieldDef::text("INTERCHANGE ID", "interchange_id", 12),
    FieldDef::filler(145),
];

/// Input for the interchange header (CABEÇALHO DE INTERCÂMBIO)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterchangeHeader {
    /// Sender mailbox name
    #[serde(alias = "remetente", skip_serializing_if = "Option::is_none")]
    pub sender: Option<FieldValue>,
    /// Recipient mailbox name
    #[serde(alias = "destinatario", skip_serializing_if = "Option::is_none")]
    pub recipient: Option<FieldValue>,
    /// DDMMYY
    #[serde(alias = "data", skip_serializing_if = "Option::is_none")]
    pub date: Option<FieldValue>,
    /// HHMM
    #[serde(alias = "hora", skip_serializing_if = "Option::is_none")]
    pub time: Option<FieldValue>,
    /// Conventionally "NOTDDMMHHMMS"
    #[serde(alias = "identificacao", skip_serializing_if = "Option::is_none")]
    pub interchange_id: Option<FieldValue>,
}

impl Record for InterchangeHeader {
    const RECORD_TYPE: RecordType = RecordType::InterchangeHeader;

    fn value(&self, key: &str) -> Option<&FieldValue> {
        match key {
            "sender" => self.sender.as_ref(),
            "recipient" => self.recipient.as_ref(),
            "date" => self.date.as_ref(),
            "time" => self.time.as_ref(),
            "interchange_id" => self.interchange_id.as_ref(),
            _ => None,
        }
    }
}

/// Build a 000 line
///
/// # Errors
///
/// See [`crate::assemble`].
pub fn build_interchange_header(data: &InterchangeHeader) -> RecordResult {
    data.build()
}
