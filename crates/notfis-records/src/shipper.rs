//! 311 - shipper data

use crate::errors::RecordResult;
use crate::layout::{FieldDef, Record};
use crate::record_type::RecordType;
use notfis_field::FieldValue;
use serde::{Deserialize, Serialize};

pub(crate) static LAYOUT: [FieldDef; 10] = [
    FieldDef::identifier("311"),
    FieldDef::number("CNPJ", "cnpj", 14, 0),
    FieldDef::text("STATE REGISTRATION", "state_registration", 15),
    FieldDef::text("ADDRESS", "address", 40),
    FieldDef::text("CITY", "city", 35),
    FieldDef::text("POSTAL CODE", "postal_code", 9),
    FieldDef::text("STATE", "state", 9),
    FieldDef::number("SHIP DATE", "ship_date", 8, 0),
    FieldDef::text("SHIPPER NAME", "name", 40),
    FieldDef::filler(67),
];

/// Input for the shipper record (DADOS DA EMBARCADORA)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipperData {
    /// Digits only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<FieldValue>,
    #[serde(alias = "ie", skip_serializing_if = "Option::is_none")]
    pub state_registration: Option<FieldValue>,
    #[serde(alias = "endereco", skip_serializing_if = "Option::is_none")]
    pub address: Option<FieldValue>,
    #[serde(alias = "cidade", skip_serializing_if = "Option::is_none")]
    pub city: Option<FieldValue>,
    /// CEP, digits only
    #[serde(alias = "cep", skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<FieldValue>,
    /// Two-letter UF
    #[serde(alias = "estado", skip_serializing_if = "Option::is_none")]
    pub state: Option<FieldValue>,
    /// DDMMYYYY
    #[serde(alias = "data", skip_serializing_if = "Option::is_none")]
    pub ship_date: Option<FieldValue>,
    /// Legal name (razão social)
    #[serde(alias = "nome_embarcadora", skip_serializing_if = "Option::is_none")]
    pub name: Option<FieldValue>,
}

impl Record for ShipperData {
    const RECORD_TYPE: RecordType = RecordType::ShipperData;

    fn value(&self, key: &str) -> Option<&FieldValue> {
        match key {
            "cnpj" => self.cnpj.as_ref(),
            "state_registration" => self.state_registration.as_ref(),
            "address" => self.address.as_ref(),
            "city" => self.city.as_ref(),
            "postal_code" => self.postal_code.as_ref(),
            "state" => self.state.as_ref(),
            "ship_date" => self.ship_date.as_ref(),
            "name" => self.name.as_ref(),
            _ => None,
        }
    }
}

/// Build a 311 line
///
/// # Errors
///
/// See [`crate::assemble`].
pub fn build_shipper_data(data: &ShipperData) -> RecordResult {
    data.build()
}
