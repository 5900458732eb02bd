#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # notfis-field
//!
//! Fixed-width field formatting for NOTFIS positional records.
//!
//! Every NOTFIS column is either numeric (unsigned digits, zero-padded on
//! the left, implied decimal places) or alphanumeric (text, space-padded on
//! the right). This crate turns one value into exactly one such token, or
//! explains why it cannot.
//!
//! ## Example Usage
//!
//! ```rust
//! use notfis_field::{FieldSpec, FieldValue, format_field};
//!
//! let value = FieldValue::from(12.3);
//! let spec = FieldSpec::numeric("PESO TOTAL", &value, 6, 2);
//! assert_eq!(format_field(&spec).unwrap(), "001230");
//!
//! let value = FieldValue::from("SC");
//! let spec = FieldSpec::alphanumeric("UF", &value, 9);
//! assert_eq!(format_field(&spec).unwrap(), "SC       ");
//! ```

/// Field error taxonomy.
pub mod errors;
/// Typed field descriptors and the formatter itself.
pub mod format;
/// Field kinds and output encodings.
pub mod kind;
mod numeric;
/// Untyped descriptors checked before formatting.
pub mod raw;
/// Caller-supplied field values.
pub mod value;

/// Why a field could not be formatted.
pub use errors::FieldError;
/// The formatter and its typed descriptor.
pub use format::{FieldResult, FieldSpec, format_field, format_field_with};
/// Field kinds and output encodings.
pub use kind::{Encoding, FieldKind};
/// Untyped descriptor for JSON input.
pub use raw::RawFieldSpec;
/// Number or text as supplied by the caller.
pub use value::FieldValue;
