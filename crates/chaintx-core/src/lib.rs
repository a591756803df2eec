//! chaintx-core — foundation types and traits for the ChainTx library.
//!
//! This crate defines:
//! - [`FieldValue`] — a loosely-typed transaction field value and the
//!   emptiness predicate ([`is_empty`] / [`is_present`])
//! - [`TxRecord`] — an open field-name → value mapping, as built by a wallet
//!   before signing
//! - [`TxVariant`] — the fee/format variants a record can be classified as
//! - [`Classification`] — the output of a classifier
//! - [`VariantClassifier`] — the classifier trait every chain implements

pub mod classifier;
pub mod error;
pub mod record;
pub mod types;
pub mod value;

pub use classifier::VariantClassifier;
pub use error::RecordError;
pub use record::{fields, TxRecord};
pub use types::{Classification, TxVariant};
pub use value::{is_empty, is_present, FieldValue};
