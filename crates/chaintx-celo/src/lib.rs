//! chaintx-celo — Celo transaction variant detection.
//!
//! # Quick Start
//!
//! ```rust
//! use chaintx_celo::CeloClassifier;
//! use chaintx_core::{fields, TxRecord, TxVariant, VariantClassifier};
//!
//! let tx = TxRecord::new()
//!     .with(fields::MAX_FEE_PER_GAS, 123u64)
//!     .with(fields::MAX_PRIORITY_FEE_PER_GAS, 456u64)
//!     .with(fields::FEE_CURRENCY, "0x765de816845861e75a25fca122bb6898b8b1282a");
//!
//! let result = CeloClassifier::new().classify(&tx);
//! assert_eq!(result.variant, TxVariant::Cip64);
//! ```

pub mod classifier;
pub mod predicates;

pub use classifier::CeloClassifier;
pub use predicates::{is_cip42, is_cip64, is_eip1559, variant_of, CIP42_TYPE_TAG, CIP64_TYPE_TAG};
