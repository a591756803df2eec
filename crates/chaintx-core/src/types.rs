//! Core types for the ChainTx variant taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RecordError;

// ─── TxVariant ────────────────────────────────────────────────────────────────

/// The fee/format variant of a transaction request.
///
/// Variants are not mutually exclusive at the predicate level: a record with
/// a fee currency satisfies both CIP-42 and CIP-64. [`TxVariant::ALL`] gives
/// the order in which a classifier resolves such overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxVariant {
    /// Untyped pre-EIP-2718 transaction with a single `gasPrice`.
    Legacy,
    /// EIP-1559 fee-market transaction.
    Eip1559,
    /// Celo CIP-42: EIP-1559 plus fee currency and gateway fee.
    Cip42,
    /// Celo CIP-64: EIP-1559 plus fee currency.
    Cip64,
}

impl TxVariant {
    /// All variants, most specific first.
    pub const ALL: [TxVariant; 4] = [Self::Cip64, Self::Cip42, Self::Eip1559, Self::Legacy];

    /// The lowercase tag used in `type` fields and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Eip1559 => "eip1559",
            Self::Cip42 => "cip42",
            Self::Cip64 => "cip64",
        }
    }

    /// EIP-2718 envelope type byte. `None` for untyped legacy transactions.
    pub fn type_byte(&self) -> Option<u8> {
        match self {
            Self::Legacy => None,
            Self::Eip1559 => Some(0x02),
            Self::Cip42 => Some(0x7c),
            Self::Cip64 => Some(0x7b),
        }
    }

    /// Returns `true` for the Celo-specific variants.
    pub fn is_celo(&self) -> bool {
        matches!(self, Self::Cip42 | Self::Cip64)
    }
}

impl fmt::Display for TxVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TxVariant {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| RecordError::UnknownVariant { tag: s.to_string() })
    }
}

// ─── Classification ───────────────────────────────────────────────────────────

/// The result of classifying a transaction request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// The most specific variant that matched.
    pub variant: TxVariant,

    /// Every variant whose predicate held, most specific first.
    /// Contains only [`TxVariant::Legacy`] when nothing else matched.
    pub matched: Vec<TxVariant>,

    /// `true` when an explicit `type` tag decided the variant regardless of
    /// the fee fields.
    pub forced: bool,
}

impl Classification {
    /// Build a classification from the set of matching variants.
    ///
    /// `matched` is sorted into priority order; an empty set means legacy.
    pub fn from_matches(mut matched: Vec<TxVariant>, forced: Option<TxVariant>) -> Self {
        matched.retain(|v| *v != TxVariant::Legacy);
        matched.sort_by_key(|v| TxVariant::ALL.iter().position(|p| p == v));
        matched.dedup();
        if matched.is_empty() {
            matched.push(TxVariant::Legacy);
        }
        let variant = matched[0];
        Self {
            variant,
            forced: forced == Some(variant),
            matched,
        }
    }

    /// Returns `true` if `variant` was among the matching predicates.
    pub fn satisfies(&self, variant: TxVariant) -> bool {
        self.matched.contains(&variant)
    }

    /// Envelope type byte of the chosen variant.
    pub fn type_byte(&self) -> Option<u8> {
        self.variant.type_byte()
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.variant)?;
        if self.forced {
            write!(f, " (forced)")?;
        }
        Ok(())
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
