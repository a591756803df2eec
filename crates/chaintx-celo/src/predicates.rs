//! Variant predicates for Celo transaction requests.
//!
//! Precedence when several hold:
//! 1. `is_cip64`   → `TxVariant::Cip64`
//! 2. `is_cip42`   → `TxVariant::Cip42`
//! 3. `is_eip1559` → `TxVariant::Eip1559`
//! 4. Fallback     → `TxVariant::Legacy`
//!
//! All checks go through [`FieldValue::is_present`](chaintx_core::FieldValue::is_present),
//! so `0`, `"0x"` and `null` behave exactly like a missing key.

use chaintx_core::{fields, TxRecord, TxVariant};

/// `type` tag that forces CIP-42 regardless of the fee fields.
pub const CIP42_TYPE_TAG: &str = "cip42";

/// `type` tag that forces CIP-64 regardless of the fee fields.
pub const CIP64_TYPE_TAG: &str = "cip64";

/// Both EIP-1559 fee caps are present. The `type` field is not consulted.
pub fn is_eip1559(tx: &TxRecord) -> bool {
    tx.has(fields::MAX_FEE_PER_GAS) && tx.has(fields::MAX_PRIORITY_FEE_PER_GAS)
}

/// CIP-42: forced by `type: "cip42"`, or EIP-1559 with at least one of
/// `feeCurrency`, `gatewayFeeRecipient`, `gatewayFee` present.
pub fn is_cip42(tx: &TxRecord) -> bool {
    if tx.type_tag() == Some(CIP42_TYPE_TAG) {
        return true;
    }
    is_eip1559(tx)
        && (tx.has(fields::FEE_CURRENCY)
            || tx.has(fields::GATEWAY_FEE_RECIPIENT)
            || tx.has(fields::GATEWAY_FEE))
}

/// CIP-64: forced by `type: "cip64"`, or EIP-1559 with `feeCurrency`
/// present. Gateway fields alone do not qualify.
pub fn is_cip64(tx: &TxRecord) -> bool {
    if tx.type_tag() == Some(CIP64_TYPE_TAG) {
        return true;
    }
    is_eip1559(tx) && tx.has(fields::FEE_CURRENCY)
}

/// The most specific variant `tx` satisfies.
pub fn variant_of(tx: &TxRecord) -> TxVariant {
    if is_cip64(tx) {
        TxVariant::Cip64
    } else if is_cip42(tx) {
        TxVariant::Cip42
    } else if is_eip1559(tx) {
        TxVariant::Eip1559
    } else {
        TxVariant::Legacy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, Address, U256};

    const CUSD: Address = address!("0x765DE816845861e75A25fCA122bb6898B8B1282a");
    const SENDER: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    fn base_1559() -> TxRecord {
        TxRecord::new()
            .with(fields::FROM, SENDER)
            .with(fields::MAX_FEE_PER_GAS, 123u64)
            .with(fields::MAX_PRIORITY_FEE_PER_GAS, 456u64)
    }

    // ─── EIP-1559 ─────────────────────────────────────────────────────────────

    #[test]
    fn eip1559_empty_record() {
        assert!(!is_eip1559(&TxRecord::new()));
    }

    #[test]
    fn eip1559_requires_both_fee_caps() {
        assert!(is_eip1559(&base_1559()));
        assert!(!is_eip1559(&TxRecord::new().with(fields::MAX_FEE_PER_GAS, 1u64)));
        assert!(!is_eip1559(
            &TxRecord::new().with(fields::MAX_PRIORITY_FEE_PER_GAS, 1u64)
        ));
    }

    #[test]
    fn eip1559_zero_fee_caps_are_empty() {
        for zero in ["0x", "0x0", "0x00", "0", ""] {
            let tx = base_1559().with(fields::MAX_FEE_PER_GAS, zero);
            assert!(!is_eip1559(&tx), "maxFeePerGas = {zero:?}");
            let tx = base_1559().with(fields::MAX_PRIORITY_FEE_PER_GAS, zero);
            assert!(!is_eip1559(&tx), "maxPriorityFeePerGas = {zero:?}");
        }
        assert!(!is_eip1559(&base_1559().with(fields::MAX_FEE_PER_GAS, U256::ZERO)));
        assert!(!is_eip1559(&base_1559().with(fields::MAX_FEE_PER_GAS, 0u64)));
    }

    #[test]
    fn eip1559_ignores_type_field() {
        let tx = TxRecord::new().with(fields::TYPE, "eip1559");
        assert!(!is_eip1559(&tx));
    }

    // ─── CIP-42 ───────────────────────────────────────────────────────────────

    #[test]
    fn cip42_type_override() {
        let tx = TxRecord::new()
            .with(fields::TYPE, "cip42")
            .with(fields::MAX_FEE_PER_GAS, 0u64)
            .with(fields::MAX_PRIORITY_FEE_PER_GAS, 0u64);
        assert!(is_cip42(&tx));
        assert!(!is_eip1559(&tx));
    }

    #[test]
    fn cip42_any_extension_field_qualifies() {
        assert!(is_cip42(&base_1559().with(fields::FEE_CURRENCY, CUSD)));
        assert!(is_cip42(&base_1559().with(fields::GATEWAY_FEE_RECIPIENT, SENDER)));
        assert!(is_cip42(&base_1559().with(fields::GATEWAY_FEE, 789u64)));
        assert!(is_cip42(
            &base_1559()
                .with(fields::FEE_CURRENCY, CUSD)
                .with(fields::GATEWAY_FEE_RECIPIENT, SENDER)
                .with(fields::GATEWAY_FEE, 789u64)
        ));
    }

    #[test]
    fn cip42_needs_an_extension_field() {
        assert!(!is_cip42(&base_1559()));
        let tx = base_1559()
            .with(fields::FEE_CURRENCY, Address::ZERO)
            .with(fields::GATEWAY_FEE_RECIPIENT, "0x")
            .with(fields::GATEWAY_FEE, 0u64);
        assert!(!is_cip42(&tx));
    }

    #[test]
    fn cip42_needs_fee_caps() {
        let tx = TxRecord::new()
            .with(fields::FEE_CURRENCY, CUSD)
            .with(fields::MAX_FEE_PER_GAS, 123u64);
        assert!(!is_cip42(&tx));
    }

    // ─── CIP-64 ───────────────────────────────────────────────────────────────

    #[test]
    fn cip64_type_override() {
        assert!(is_cip64(&TxRecord::new().with(fields::TYPE, "cip64")));
        assert!(!is_cip42(&TxRecord::new().with(fields::TYPE, "cip64")));
    }

    #[test]
    fn cip64_requires_fee_currency() {
        assert!(is_cip64(&base_1559().with(fields::FEE_CURRENCY, CUSD)));
        assert!(!is_cip64(&base_1559().with(fields::GATEWAY_FEE, 789u64)));
        assert!(!is_cip64(&base_1559().with(fields::GATEWAY_FEE_RECIPIENT, SENDER)));
    }

    #[test]
    fn cip64_ignores_empty_gateway_fields() {
        let tx = base_1559()
            .with(fields::FEE_CURRENCY, CUSD)
            .with(fields::GATEWAY_FEE_RECIPIENT, "0x")
            .with(fields::GATEWAY_FEE, "0x0");
        assert!(is_cip64(&tx));
    }

    #[test]
    fn type_tag_must_match_exactly() {
        for tag in ["CIP64", "cip-64", " cip64", "0x7b"] {
            assert!(!is_cip64(&TxRecord::new().with(fields::TYPE, tag)), "{tag}");
        }
        assert!(!is_cip64(&TxRecord::new().with(fields::TYPE, 123u64)));
    }

    // ─── Scenarios ────────────────────────────────────────────────────────────

    #[test]
    fn scenario_plain_1559() {
        let tx = base_1559();
        assert!(is_eip1559(&tx));
        assert!(!is_cip42(&tx));
        assert!(!is_cip64(&tx));
        assert_eq!(variant_of(&tx), TxVariant::Eip1559);
    }

    #[test]
    fn scenario_fee_currency() {
        let tx = base_1559().with(fields::FEE_CURRENCY, CUSD);
        assert!(is_cip42(&tx));
        assert!(is_cip64(&tx));
        assert_eq!(variant_of(&tx), TxVariant::Cip64);
    }

    #[test]
    fn scenario_gateway_fee_only() {
        let tx = base_1559().with(fields::GATEWAY_FEE, 789u64);
        assert!(is_cip42(&tx));
        assert!(!is_cip64(&tx));
        assert_eq!(variant_of(&tx), TxVariant::Cip42);
    }

    #[test]
    fn legacy_fallback() {
        let tx = TxRecord::new()
            .with(fields::FROM, SENDER)
            .with("gasPrice", 1_000_000_000u64);
        assert_eq!(variant_of(&tx), TxVariant::Legacy);
        assert_eq!(variant_of(&TxRecord::new()), TxVariant::Legacy);
    }

    #[test]
    fn predicates_are_idempotent() {
        let tx = base_1559().with(fields::GATEWAY_FEE, 789u64);
        let snapshot = tx.clone();
        for _ in 0..3 {
            assert!(is_cip42(&tx));
            assert!(!is_cip64(&tx));
        }
        assert_eq!(tx, snapshot);
    }
}
