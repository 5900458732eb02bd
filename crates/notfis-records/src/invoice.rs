//! 313 - invoice data
//!
//! The only record with a variable layout: the trailing CFOP column is
//! emitted only when the input carries one.

use crate::errors::RecordResult;
use crate::layout::{FieldDef, Record};
use crate::record_type::RecordType;
use notfis_field::FieldValue;
use serde::{Deserialize, Serialize};

pub(crate) static LAYOUT: [FieldDef; 32] = [
    FieldDef::identifier("313"),
    FieldDef::text("LOAD MANIFEST NUMBER", "load_manifest", 15),
    FieldDef::text("ROUTE CODE", "route_code", 7),
    FieldDef::number("TRANSPORT MODE", "transport_mode", 1, 0),
    FieldDef::number("TRANSPORT TYPE", "transport_type", 1, 0),
    FieldDef::number("CARGO TYPE", "cargo_type", 1, 0),
    FieldDef::text("FREIGHT TERMS", "freight_terms", 1),
    FieldDef::text("INVOICE SERIES", "invoice_series", 3),
    FieldDef::number("INVOICE NUMBER", "invoice_number", 8, 0),
    FieldDef::number("ISSUE DATE", "issue_date", 8, 0),
    FieldDef::text("GOODS NATURE", "goods_nature", 15),
    FieldDef::text("PACKAGING", "packaging", 15),
    FieldDef::number("VOLUME COUNT", "volume_count", 7, 2),
    FieldDef::number("INVOICE VALUE", "invoice_value", 15, 2),
    FieldDef::number("TOTAL WEIGHT", "total_weight", 7, 2),
    FieldDef::number("CUBAGE WEIGHT", "cubage_weight", 5, 2),
    FieldDef::text("ICMS TYPE", "icms_type", 1),
    FieldDef::text("INSURANCE TAKEN", "insured", 1),
    FieldDef::number("INSURANCE VALUE", "insurance_value", 15, 2),
    FieldDef::number("AMOUNT TO CHARGE", "amount_to_charge", 15, 2),
    FieldDef::text("VEHICLE PLATE", "vehicle_plate", 7),
    FieldDef::text("QUICK LOAD PLAN", "quick_load_plan", 1),
    FieldDef::number("FREIGHT WEIGHT/VOLUME", "freight_weight_volume", 15, 2),
    FieldDef::number("AD VALOREM", "ad_valorem", 15, 2),
    FieldDef::number("TOTAL FEES", "total_fees", 15, 2),
    FieldDef::number("TOTAL FREIGHT", "total_freight", 15, 2),
    FieldDef::text("DOCUMENT ACTION", "document_action", 1),
    FieldDef::number("ICMS VALUE", "icms_value", 12, 2),
    FieldDef::number("ICMS WITHHELD", "icms_withheld", 12, 2),
    FieldDef::text("BONUS INDICATOR", "bonus_indicator", 1),
    FieldDef::text("CT-E KEY", "cte_key", 44),
    FieldDef::text("CFOP", "cfop", 4).optional(),
];

/// Input for the invoice record (DADOS DE NOTA FISCAL).
///
/// Every attribute but `cfop` is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceData {
    /// Shipper's internal load manifest (romaneio)
    #[serde(alias = "romaneio", skip_serializing_if = "Option::is_none")]
    pub load_manifest: Option<FieldValue>,
    /// Table agreed between shipper and carrier
    #[serde(alias = "codigo_rota", skip_serializing_if = "Option::is_none")]
    pub route_code: Option<FieldValue>,
    /// 1 road, 2 air, 3 sea, 4 river, 5 rail
    #[serde(alias = "meio_de_transporte", skip_serializing_if = "Option::is_none")]
    pub transport_mode: Option<FieldValue>,
    /// 1 full load, 2 partial load
    #[serde(alias = "tipo_de_transporte", skip_serializing_if = "Option::is_none")]
    pub transport_type: Option<FieldValue>,
    /// 1 cold, 2 dry, 3 mixed
    #[serde(alias = "tipo_de_carga", skip_serializing_if = "Option::is_none")]
    pub cargo_type: Option<FieldValue>,
    /// C = CIF, F = FOB
    #[serde(alias = "condicao_de_frete", skip_serializing_if = "Option::is_none")]
    pub freight_terms: Option<FieldValue>,
    #[serde(alias = "serie_nf", skip_serializing_if = "Option::is_none")]
    pub invoice_series: Option<FieldValue>,
    #[serde(alias = "numero_nf", skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<FieldValue>,
    /// DDMMYYYY
    #[serde(alias = "data_emissao", skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<FieldValue>,
    /// Nature of the goods, e.g. footwear, apparel
    #[serde(alias = "natureza", skip_serializing_if = "Option::is_none")]
    pub goods_nature: Option<FieldValue>,
    /// Packaging kind, e.g. bales, boxes
    #[serde(alias = "acondicionamento", skip_serializing_if = "Option::is_none")]
    pub packaging: Option<FieldValue>,
    #[serde(alias = "qtd_volumes", skip_serializing_if = "Option::is_none")]
    pub volume_count: Option<FieldValue>,
    #[serde(alias = "valor_nota", skip_serializing_if = "Option::is_none")]
    pub invoice_value: Option<FieldValue>,
    #[serde(alias = "peso_total", skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<FieldValue>,
    #[serde(alias = "peso_densidade_cubagem", skip_serializing_if = "Option::is_none")]
    pub cubage_weight: Option<FieldValue>,
    /// D deferred, R reduced, P presumed, T substitution, S normal, N exempt
    #[serde(alias = "tipo_icms", skip_serializing_if = "Option::is_none")]
    pub icms_type: Option<FieldValue>,
    /// S / N
    #[serde(alias = "seguro", skip_serializing_if = "Option::is_none")]
    pub insured: Option<FieldValue>,
    #[serde(alias = "valor_seguro", skip_serializing_if = "Option::is_none")]
    pub insurance_value: Option<FieldValue>,
    #[serde(alias = "valor_a_ser_cobrado", skip_serializing_if = "Option::is_none")]
    pub amount_to_charge: Option<FieldValue>,
    #[serde(alias = "placa", skip_serializing_if = "Option::is_none")]
    pub vehicle_plate: Option<FieldValue>,
    /// S / N
    #[serde(alias = "plano_carga_rapida", skip_serializing_if = "Option::is_none")]
    pub quick_load_plan: Option<FieldValue>,
    #[serde(alias = "valor_frete_peso_volume", skip_serializing_if = "Option::is_none")]
    pub freight_weight_volume: Option<FieldValue>,
    #[serde(alias = "valor_ad_valorem", skip_serializing_if = "Option::is_none")]
    pub ad_valorem: Option<FieldValue>,
    /// Sum of redelivery, toll and similar fees
    #[serde(alias = "valor_total_taxas", skip_serializing_if = "Option::is_none")]
    pub total_fees: Option<FieldValue>,
    /// Freight weight/volume + ad valorem + total fees
    #[serde(alias = "valor_total_frete", skip_serializing_if = "Option::is_none")]
    pub total_freight: Option<FieldValue>,
    /// I include, E exclude/cancel
    #[serde(alias = "acao_do_documento", skip_serializing_if = "Option::is_none")]
    pub document_action: Option<FieldValue>,
    #[serde(alias = "valor_icms", skip_serializing_if = "Option::is_none")]
    pub icms_value: Option<FieldValue>,
    #[serde(alias = "valor_icms_retido", skip_serializing_if = "Option::is_none")]
    pub icms_withheld: Option<FieldValue>,
    /// S / N
    #[serde(
        alias = "indicacao_de_bonificacao",
        skip_serializing_if = "Option::is_none"
    )]
    pub bonus_indicator: Option<FieldValue>,
    /// CT-e access key issued by SEFAZ
    #[serde(alias = "chave_cte", skip_serializing_if = "Option::is_none")]
    pub cte_key: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cfop: Option<FieldValue>,
}

impl Record for InvoiceData {
    const RECORD_TYPE: RecordType = RecordType::InvoiceData;

    fn value(&self, key: &str) -> Option<&FieldValue> {
        match key {
            "load_manifest" => self.load_manifest.as_ref(),
            "route_code" => self.route_code.as_ref(),
            "transport_mode" => self.transport_mode.as_ref(),
            "transport_type" => self.transport_type.as_ref(),
            "cargo_type" => self.cargo_type.as_ref(),
            "freight_terms" => self.freight_terms.as_ref(),
            "invoice_series" => self.invoice_series.as_ref(),
            "invoice_number" => self.invoice_number.as_ref(),
            "issue_date" => self.issue_date.as_ref(),
            "goods_nature" => self.goods_nature.as_ref(),
            "packaging" => self.packaging.as_ref(),
            "volume_count" => self.volume_count.as_ref(),
            "invoice_value" => self.invoice_value.as_ref(),
            "total_weight" => self.total_weight.as_ref(),
            "cubage_weight" => self.cubage_weight.as_ref(),
            "icms_type" => self.icms_type.as_ref(),
            "insured" => self.insured.as_ref(),
            "insurance_value" => self.insurance_value.as_ref(),
            "amount_to_charge" => self.amount_to_charge.as_ref(),
            "vehicle_plate" => self.vehicle_plate.as_ref(),
            "quick_load_plan" => self.quick_load_plan.as_ref(),
            "freight_weight_volume" => self.freight_weight_volume.as_ref(),
            "ad_valorem" => self.ad_valorem.as_ref(),
            "total_fees" => self.total_fees.as_ref(),
            "total_freight" => self.total_freight.as_ref(),
            "document_action" => self.document_action.as_ref(),
            "icms_value" => self.icms_value.as_ref(),
            "icms_withheld" => self.icms_withheld.as_ref(),
            "bonus_indicator" => self.bonus_indicator.as_ref(),
            "cte_key" => self.cte_key.as_ref(),
            "cfop" => self.cfop.as_ref(),
            _ => None,
        }
    }
}

/// Build a 313 line, 282 characters wide, or 286 with CFOP
///
/// # Errors
///
/// See [`crate::assemble`].
pub fn build_invoice_data(data: &InvoiceData) -> RecordResult {
    data.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RecordError;

    const CTE_KEY: &str = "42260912345678000190570010000123451000123456";

    fn sample() -> InvoiceData {
        InvoiceData {
            load_manifest: Some("ROM-0042".into()),
            route_code: Some("SUL01".into()),
            transport_mode: Some(1.into()),
            transport_type: Some(2.into()),
            cargo_type: Some(2.into()),
            freight_terms: Some("C".into()),
            invoice_series: Some("1".into()),
            invoice_number: Some(123_456.into()),
            issue_date: Some("18092026".into()),
            goods_nature: Some("CALCADOS".into()),
            packaging: Some("CAIXAS".into()),
            volume_count: Some(12.into()),
            invoice_value: Some(15_430.75.into()),
            total_weight: Some(320.5.into()),
            cubage_weight: Some(1.25.into()),
            icms_type: Some("S".into()),
            insured: Some("N".into()),
            insurance_value: Some(0.into()),
            amount_to_charge: Some(0.into()),
            vehicle_plate: Some("ABC1D23".into()),
            quick_load_plan: Some("N".into()),
            freight_weight_volume: Some(410.0.into()),
            ad_valorem: Some(46.29.into()),
            total_fees: Some(12.5.into()),
            total_freight: Some(468.79.into()),
            document_action: Some("I".into()),
            icms_value: Some(2_777.54.into()),
            icms_withheld: Some(0.into()),
            bonus_indicator: Some("N".into()),
            cte_key: Some(CTE_KEY.into()),
            cfop: None,
        }
    }

    #[test]
    fn test_build_invoice_without_cfop() {
        let line = build_invoice_data(&sample()).unwrap();
        assert_eq!(line.len(), 282);
        assert_eq!(&line[..18], "313ROM-0042       ");
        assert_eq!(&line[25..29], "122C");
        assert_eq!(&line[32..40], "00123456");
        assert_eq!(&line[78..85], "0001200");
        assert_eq!(&line[85..100], "000000001543075");
        assert_eq!(&line[100..107], "0032050");
        assert_eq!(&line[107..112], "00125");
        assert_eq!(&line[197..212], "000000000046879");
        assert_eq!(&line[213..225], "000000277754");
        assert_eq!(&line[238..282], CTE_KEY);
    }

    #[test]
    fn test_build_invoice_with_cfop() {
        let mut data = sample();
        let base = build_invoice_data(&data).unwrap();

        data.cfop = Some("5102".into());
        let line = build_invoice_data(&data).unwrap();
        assert_eq!(line.len(), 286);
        assert_eq!(&line[..282], base);
        assert_eq!(&line[282..], "5102");

        data.cfop = Some("61".into());
        let line = build_invoice_data(&data).unwrap();
        assert_eq!(&line[282..], "61  ");
    }

    #[test]
    fn test_cfop_overflow_reported() {
        let mut data = sample();
        data.cfop = Some("51020".into());
        let err = build_invoice_data(&data).unwrap_err();
        assert_eq!(err.field_errors().len(), 1);
        assert_eq!(err.field_errors()[0].field_name(), Some("CFOP"));
    }

    #[test]
    fn test_cfop_not_required() {
        let mut data = sample();
        data.cte_key = None;
        let err = build_invoice_data(&data).unwrap_err();
        assert!(matches!(err, RecordError::MissingInput { .. }));
        assert_eq!(err.missing(), ["cte_key"]);
    }

    #[test]
    fn test_monetary_overflow() {
        let mut data = sample();
        data.volume_count = Some(100_000.into());
        data.icms_value = Some(10_000_000_000.0.into());
        let err = build_invoice_data(&data).unwrap_err();
        let names: Vec<_> = err
            .field_errors()
            .iter()
            .filter_map(|e| e.field_name())
            .collect();
        assert_eq!(names, vec!["VOLUME COUNT", "ICMS VALUE"]);
    }
}
