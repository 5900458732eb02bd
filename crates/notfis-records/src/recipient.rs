//! 312 - recipient data

use crate::errors::RecordResult;
use crate::layout::{FieldDef, Record};
use crate::record_type::RecordType;
use notfis_field::FieldValue;
use serde::{Deserialize, Serialize};

pub(crate) static LAYOUT: [FieldDef; 14] = [
    FieldDef::identifier("312"),
    FieldDef::text("COMPANY NAME", "company_name", 40),
    FieldDef::number("CNPJ/CPF", "cnpj_cpf", 14, 0),
    FieldDef::text("STATE REGISTRATION", "state_registration", 15),
    FieldDef::text("ADDRESS", "address", 40),
    FieldDef::text("DISTRICT", "district", 20),
    FieldDef::text("CITY", "city", 35),
    FieldDef::text("POSTAL CODE", "postal_code", 9),
    FieldDef::text("MUNICIPALITY CODE", "municipality_code", 9),
    FieldDef::text("STATE", "state", 9),
    FieldDef::text("FREIGHT AREA", "freight_area", 4),
    FieldDef::text("CONTACT NUMBER (PHONE, FAX, ETC.)", "contact", 35),
    FieldDef::text("RECIPIENT ID TYPE (1=CNPJ, 2=CPF)", "id_type", 1),
    FieldDef::filler(6),
];

/// Input for the recipient record (DADOS DO DESTINATÁRIO)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipientData {
    /// Legal name (razão social)
    #[serde(alias = "razao_social", skip_serializing_if = "Option::is_none")]
    pub company_name: Option<FieldValue>,
    /// CNPJ or CPF, digits only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnpj_cpf: Option<FieldValue>,
    #[serde(alias = "ie", skip_serializing_if = "Option::is_none")]
    pub state_registration: Option<FieldValue>,
    #[serde(alias = "endereco", skip_serializing_if = "Option::is_none")]
    pub address: Option<FieldValue>,
    #[serde(alias = "bairro", skip_serializing_if = "Option::is_none")]
    pub district: Option<FieldValue>,
    #[serde(alias = "cidade", skip_serializing_if = "Option::is_none")]
    pub city: Option<FieldValue>,
    /// CEP, digits only
    #[serde(alias = "cep", skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<FieldValue>,
    /// Code agreed between shipper and carrier
    #[serde(alias = "codigo_de_municipio", skip_serializing_if = "Option::is_none")]
    pub municipality_code: Option<FieldValue>,
    /// Two-letter UF
    #[serde(alias = "estado", skip_serializing_if = "Option::is_none")]
    pub state: Option<FieldValue>,
    /// Table agreed between shipper and carrier
    #[serde(alias = "area_de_frete", skip_serializing_if = "Option::is_none")]
    pub freight_area: Option<FieldValue>,
    /// Phone, fax and the like
    #[serde(alias = "numero_de_comunicacao", skip_serializing_if = "Option::is_none")]
    pub contact: Option<FieldValue>,
    /// 1 = CNPJ, 2 = CPF
    #[serde(
        alias = "tipo_identificacao_cnpj_cpf",
        skip_serializing_if = "Option::is_none"
    )]
    pub id_type: Option<FieldValue>,
}

impl Record for RecipientData {
    const RECORD_TYPE: RecordType = RecordType::RecipientData;

    fn value(&self, key: &str) -> Option<&FieldValue> {
        match key {
            "company_name" => self.company_name.as_ref(),
            "cnpj_cpf" => self.cnpj_cpf.as_ref(),
            "state_registration" => self.state_registration.as_ref(),
            "address" => self.address.as_ref(),
            "district" => self.district.as_ref(),
            "city" => self.city.as_ref(),
            "postal_code" => self.postal_code.as_ref(),
            "municipality_code" => self.municipality_code.as_ref(),
            "state" => self.state.as_ref(),
            "freight_area" => self.freight_area.as_ref(),
            "contact" => self.contact.as_ref(),
            "id_type" => self.id_type.as_ref(),
            _ => None,
        }
    }
}

/// Build a 312 line
///
/// # Errors
///
/// See [`crate::assemble`].
pub fn build_recipient_data(data: &RecipientData) -> RecordResult {
    data.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RecipientData {
        RecipientData {
            company_name: Some("COMERCIO DE CALCADOS XYZ LTDA".into()),
            cnpj_cpf: Some("98765432000110".into()),
            state_registration: Some("ISENTO".into()),
            address: Some("AV BRASIL 2000".into()),
            district: Some("CENTRO".into()),
            city: Some("CURITIBA".into()),
            postal_code: Some("80010000".into()),
            municipality_code: Some("4106902".into()),
            state: Some("PR".into()),
            freight_area: Some("A1".into()),
            contact: Some("4133334444".into()),
            id_type: Some(1.into()),
        }
    }

    #[test]
    fn test_build_recipient_data() {
        let line = build_recipient_data(&sample()).unwrap();
        assert_eq!(line.len(), 240);
        assert!(line.starts_with("312COMERCIO DE CALCADOS XYZ LTDA"));
        assert_eq!(&line[43..57], "98765432000110");
        assert_eq!(line[57..72].trim_end(), "ISENTO");
        assert_eq!(&line[167..176], "80010000 ");
        assert_eq!(&line[176..185], "4106902  ");
        assert_eq!(&line[185..194], "PR       ");
        assert_eq!(&line[194..198], "A1  ");
        assert_eq!(&line[233..234], "1");
        assert_eq!(&line[234..], "      ");
    }

    #[test]
    fn test_cpf_is_zero_padded() {
        let mut data = sample();
        data.cnpj_cpf = Some("12345678909".into());
        data.id_type = Some("2".into());
        let line = build_recipient_data(&data).unwrap();
        assert_eq!(&line[43..57], "00012345678909");
    }

    #[test]
    fn test_all_field_errors_reported() {
        let mut data = sample();
        data.state = Some("PARANA ESTADO".into());
        data.id_type = Some("12".into());
        let err = build_recipient_data(&data).unwrap_err();

        assert_eq!(err.field_errors().len(), 2);
        let message = err.to_string();
        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"STATE\""));
        assert!(lines[1].contains("RECIPIENT ID TYPE"));
    }
}
