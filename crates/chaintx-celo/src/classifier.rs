//! `CeloClassifier` — the [`VariantClassifier`] for Celo transaction requests.

use chaintx_core::{TxRecord, TxVariant, VariantClassifier};

use crate::predicates::{is_cip42, is_cip64, is_eip1559, CIP42_TYPE_TAG, CIP64_TYPE_TAG};

/// Celo variant classifier.
///
/// # Usage
/// ```rust
/// use chaintx_celo::CeloClassifier;
/// use chaintx_core::{TxVariant, VariantClassifier};
///
/// let classifier = CeloClassifier::new();
/// let result = classifier
///     .classify_json(r#"{"maxFeePerGas": 123, "maxPriorityFeePerGas": 456, "gatewayFee": 789}"#)
///     .unwrap();
/// assert_eq!(result.variant, TxVariant::Cip42);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CeloClassifier;

impl CeloClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl VariantClassifier for CeloClassifier {
    fn chain_family(&self) -> &'static str {
        "celo"
    }

    fn matches(&self, variant: TxVariant, tx: &TxRecord) -> bool {
        match variant {
            TxVariant::Cip64 => is_cip64(tx),
            TxVariant::Cip42 => is_cip42(tx),
            TxVariant::Eip1559 => is_eip1559(tx),
            TxVariant::Legacy => !(is_cip64(tx) || is_cip42(tx) || is_eip1559(tx)),
        }
    }

    fn forced_variant(&self, tx: &TxRecord) -> Option<TxVariant> {
        let forced = match tx.type_tag()? {
            CIP64_TYPE_TAG => TxVariant::Cip64,
            CIP42_TYPE_TAG => TxVariant::Cip42,
            _ => return None,
        };
        tracing::trace!(variant = %forced, "explicit type tag overrides fee fields");
        Some(forced)
    }
}
