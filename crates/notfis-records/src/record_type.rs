//! NOTFIS 3.1 record types

use crate::errors::DecodeError;
use crate::layout::FieldDef;
use crate::{document, interchange, invoice, recipient, shipper, totals};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six record types this crate can build, identified on the wire by
/// the first three characters of every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    /// 000 - CABEÇALHO DE INTERCÂMBIO
    InterchangeHeader,
    /// 310 - CABEÇALHO DE DOCUMENTO
    DocumentHeader,
    /// 311 - DADOS DA EMBARCADORA
    ShipperData,
    /// 312 - DADOS DO DESTINATÁRIO
    RecipientData,
    /// 313 - DADOS DE NOTA FISCAL
    InvoiceData,
    /// 318 - VALORES TOTAIS DO DOCUMENTO
    DocumentTotals,
}

impl RecordType {
    /// Every record type, in interchange order
    pub const ALL: [Self; 6] = [
        Self::InterchangeHeader,
        Self::DocumentHeader,
        Self::ShipperData,
        Self::RecipientData,
        Self::InvoiceData,
        Self::DocumentTotals,
    ];

    /// Three-digit record identifier
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InterchangeHeader => "000",
            Self::DocumentHeader => "310",
            Self::ShipperData => "311",
            Self::RecipientData => "312",
            Self::InvoiceData => "313",
            Self::DocumentTotals => "318",
        }
    }

    /// Name of the builder, used in diagnostics
    #[must_use]
    pub const fn builder_name(&self) -> &'static str {
        match self {
            Self::InterchangeHeader => "build_interchange_header",
            Self::DocumentHeader => "build_document_header",
            Self::ShipperData => "build_shipper_data",
            Self::RecipientData => "build_recipient_data",
            Self::InvoiceData => "build_invoice_data",
            Self::DocumentTotals => "build_document_totals",
        }
    }

    /// Look up a record type by its identifier
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|record| record.code() == code)
    }

    /// Record type of a line, read from its first three characters
    #[must_use]
    pub fn detect(line: &str) -> Option<Self> {
        line.get(..3).and_then(Self::from_code)
    }

    /// Ordered column layout
    #[must_use]
    pub fn layout(&self) -> &'static [FieldDef] {
        match self {
            Self::InterchangeHeader => &interchange::LAYOUT[..],
            Self::DocumentHeader => &document::LAYOUT[..],
            Self::ShipperData => &shipper::LAYOUT[..],
            Self::RecipientData => &recipient::LAYOUT[..],
            Self::InvoiceData => &invoice::LAYOUT[..],
            Self::DocumentTotals => &totals::LAYOUT[..],
        }
    }

    /// Line width without optional columns
    #[must_use]
    pub fn base_width(&self) -> usize {
        self.layout()
            .iter()
            .filter(|def| !def.is_optional())
            .map(|def| def.width)
            .sum()
    }

    /// Line width with every optional column present
    #[must_use]
    pub fn full_width(&self) -> usize {
        self.layout().iter().map(|def| def.width).sum()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for RecordType {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| DecodeError::unknown_record_type(s))
    }
}
