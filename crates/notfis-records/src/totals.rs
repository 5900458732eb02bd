//! 318 - document totals
//!
//! Totals are not computed here; callers sum the matching 313 columns.

use crate::errors::RecordResult;
use crate::layout::{FieldDef, Record};
use crate::record_type::RecordType;
use notfis_field::FieldValue;
use serde::{Deserialize, Serialize};

pub(crate) static LAYOUT: [FieldDef; 8] = [
    FieldDef::identifier("318"),
    FieldDef::number("TOTAL INVOICE VALUE", "total_invoice_value", 15, 2),
    FieldDef::number("TOTAL WEIGHT", "total_weight", 15, 2),
    FieldDef::number("TOTAL CUBAGE WEIGHT", "total_cubage_weight", 15, 2),
    FieldDef::number("TOTAL VOLUMES", "total_volumes", 15, 2),
    FieldDef::number("TOTAL AMOUNT TO CHARGE", "total_amount_to_charge", 15, 2),
    FieldDef::number("TOTAL INSURANCE", "total_insurance", 15, 2),
    FieldDef::filler(147),
];

/// Input for the document totals record (VALORES TOTAIS DO DOCUMENTO)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentTotals {
    #[serde(alias = "valor_total_nf", skip_serializing_if = "Option::is_none")]
    pub total_invoice_value: Option<FieldValue>,
    #[serde(alias = "peso_total_nf", skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<FieldValue>,
    #[serde(
        alias = "peso_total_densidade_cubagem",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_cubage_weight: Option<FieldValue>,
    #[serde(alias = "qtd_total_volumes", skip_serializing_if = "Option::is_none")]
    pub total_volumes: Option<FieldValue>,
    #[serde(alias = "total_a_ser_cobrado", skip_serializing_if = "Option::is_none")]
    pub total_amount_to_charge: Option<FieldValue>,
    #[serde(alias = "total_seguro", skip_serializing_if = "Option::is_none")]
    pub total_insurance: Option<FieldValue>,
}

impl Record for DocumentTotals {
    const RECORD_TYPE: RecordType = RecordType::DocumentTotals;

    fn value(&self, key: &str) -> Option<&FieldValue> {
        match key {
            "total_invoice_value" => self.total_invoice_value.as_ref(),
            "total_weight" => self.total_weight.as_ref(),
            "total_cubage_weight" => self.total_cubage_weight.as_ref(),
            "total_volumes" => self.total_volumes.as_ref(),
            "total_amount_to_charge" => self.total_amount_to_charge.as_ref(),
            "total_insurance" => self.total_insurance.as_ref(),
            _ => None,
        }
    }
}

/// Build a 318 line
///
/// # Errors
///
/// See [`crate::assemble`].
pub fn build_document_totals(data: &DocumentTotals) -> RecordResult {
    data.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DocumentTotals {
        DocumentTotals {
            total_invoice_value: Some(30_861.5.into()),
            total_weight: Some(641.0.into()),
            total_cubage_weight: Some(2.5.into()),
            total_volumes: Some(24.into()),
            total_amount_to_charge: Some(0.into()),
            total_insurance: Some("0.00".into()),
        }
    }

    #[test]
    fn test_build_document_totals() {
        let line = build_document_totals(&sample()).unwrap();
        assert_eq!(line.len(), 240);
        assert_eq!(&line[..18], "318000000003086150");
        assert_eq!(&line[18..33], "000000000064100");
        assert_eq!(&line[33..48], "000000000000250");
        assert_eq!(&line[48..63], "000000000002400");
        assert_eq!(&line[63..93], "0".repeat(30));
        assert_eq!(line[93..].trim(), "");
    }

    #[test]
    fn test_two_invalid_totals_aggregated() {
        let mut data = sample();
        data.total_weight = Some("641,00".into());
        data.total_insurance = Some("1e20".into());
        let err = build_document_totals(&data).unwrap_err();
        assert_eq!(err.field_errors().len(), 2);
        assert!(err.to_string().contains('\n'));
        assert!(err.to_string().contains("invalid number for field \"TOTAL WEIGHT\""));
        assert!(err.to_string().contains("\"TOTAL INSURANCE\" must have size 15"));
    }
}
