#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # notfis-records
//!
//! NOTFIS 3.1 record layouts and builders.
//!
//! Each record type (interchange header 000, document header 310, shipper
//! 311, recipient 312, invoice 313, document totals 318) is a static,
//! ordered column layout. One generic assembler checks the input for
//! missing attributes, formats every column and returns either the complete
//! fixed-width line or every problem found.
//!
//! Sequencing lines into an interchange file and computing the 318 totals
//! are left to the caller.
//!
//! ## Example Usage
//!
//! ```rust
//! use notfis_records::{DocumentHeader, DocumentTotals, Record, build_document_header};
//!
//! let header = DocumentHeader {
//!     document_id: Some("NOTFI1809143".into()),
//! };
//! let line = build_document_header(&header).unwrap();
//! assert_eq!(line.len(), 240);
//! assert!(line.starts_with("310NOTFI1809143"));
//!
//! // Missing attributes are reported without formatting anything
//! let err = DocumentTotals::default().build().unwrap_err();
//! assert_eq!(err.missing().len(), 6);
//! ```

/// Record building options.
pub mod config;
/// Line decoding back into columns.
pub mod decode;
/// 310 document header.
pub mod document;
/// Record and decode error types.
pub mod errors;
/// 000 interchange header.
pub mod interchange;
/// 313 invoice data.
pub mod invoice;
/// Column layouts and the generic assembler.
pub mod layout;
/// 312 recipient data.
pub mod recipient;
/// Record type identifiers.
pub mod record_type;
/// 311 shipper data.
pub mod shipper;
/// 318 document totals.
pub mod totals;

/// Record building options.
pub use config::NotfisConfig;
/// Line decoding entry points.
pub use decode::{DecodedField, DecodedRecord, decode_as, decode_line};
/// 310 input and builder.
pub use document::{DocumentHeader, build_document_header};
/// Record and decode errors.
pub use errors::{DecodeError, RecordError, RecordResult};
/// 000 input and builder.
pub use interchange::{InterchangeHeader, build_interchange_header};
/// 313 input and builder.
pub use invoice::{InvoiceData, build_invoice_data};
/// Column layouts, the record trait and the generic assembler.
pub use layout::{FieldDef, FieldSource, Record, assemble};
/// 312 input and builder.
pub use recipient::{RecipientData, build_recipient_data};
/// Record identifiers and widths.
pub use record_type::RecordType;
/// 311 input and builder.
pub use shipper::{ShipperData, build_shipper_data};
/// 318 input and builder.
pub use totals::{DocumentTotals, build_document_totals};

/// Field-level types used in record inputs and errors.
pub use notfis_field::{Encoding, FieldError, FieldKind, FieldValue};
