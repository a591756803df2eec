//! The `VariantClassifier` trait — implemented by each chain-specific crate.

use crate::error::RecordError;
use crate::record::TxRecord;
use crate::types::{Classification, TxVariant};

/// A chain-specific transaction variant classifier.
///
/// Implementations are stateless and must be `Send + Sync`; every method is
/// a pure function of the record passed in.
pub trait VariantClassifier: Send + Sync {
    /// Returns the chain family name this classifier handles (e.g. `"celo"`).
    fn chain_family(&self) -> &'static str;

    /// Does `tx` satisfy the predicate for `variant`?
    ///
    /// [`TxVariant::Legacy`] is the fallback and should match only when no
    /// other variant does.
    fn matches(&self, variant: TxVariant, tx: &TxRecord) -> bool;

    /// The variant an explicit `type` tag forces, if the chain honours one.
    fn forced_variant(&self, _tx: &TxRecord) -> Option<TxVariant> {
        None
    }

    /// Evaluate every predicate and pick the most specific match.
    ///
    /// Never fails: records with missing or wrong-typed fields fall through
    /// to [`TxVariant::Legacy`].
    fn classify(&self, tx: &TxRecord) -> Classification {
        let matched: Vec<TxVariant> = TxVariant::ALL
            .into_iter()
            .filter(|v| *v != TxVariant::Legacy && self.matches(*v, tx))
            .collect();
        let result = Classification::from_matches(matched, self.forced_variant(tx));
        tracing::debug!(
            family = self.chain_family(),
            variant = %result.variant,
            forced = result.forced,
            matched = result.matched.len(),
            "classified transaction"
        );
        result
    }

    /// Convenience: classify a JSON object string.
    fn classify_json(&self, json: &str) -> Result<Classification, RecordError> {
        let tx = TxRecord::from_json(json)?;
        Ok(self.classify(&tx))
    }
}
