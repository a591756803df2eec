//! Transaction field values and the emptiness predicate.
//!
//! Wallet code frequently encodes "unset" as an explicit zero or a bare
//! `0x` instead of leaving the key out. Every such encoding is folded into
//! a single notion of *empty* so that higher-level checks reduce to plain
//! presence tests.

use std::fmt;

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─── FieldValue ───────────────────────────────────────────────────────────────

/// A single value found on a transaction record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    /// Key missing, explicit `null`, or a value of a type the classifier
    /// does not understand.
    #[default]
    Absent,
    /// A fixed-precision native number.
    Int(i128),
    /// An arbitrary-precision unsigned integer.
    Quantity(U256),
    /// Any string, including `0x`-prefixed hex addresses and quantities.
    Str(String),
}

impl FieldValue {
    /// Returns `true` if the value carries no information for classification.
    ///
    /// Empty values are: [`FieldValue::Absent`], `""`, `"0"`, numeric zero in
    /// either precision, and any `0x` string whose digits are all zero
    /// (including the bare `"0x"`).
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Int(v) => *v == 0,
            Self::Quantity(v) => v.is_zero(),
            Self::Str(s) => s.is_empty() || s == "0" || is_zero_hex(s),
        }
    }

    /// Negation of [`FieldValue::is_empty`].
    pub fn is_present(&self) -> bool {
        !self.is_empty()
    }

    /// Returns the string payload, if this is a [`FieldValue::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the value's category, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Int(_) => "int",
            Self::Quantity(_) => "quantity",
            Self::Str(_) => "string",
        }
    }

    /// Convert an arbitrary JSON value.
    ///
    /// `null`, booleans, arrays and objects become [`FieldValue::Absent`].
    /// Integers that fit in `i128` become [`FieldValue::Int`]; any other
    /// number is zero-folded to `Int(0)` or kept as its literal text.
    pub fn from_json(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Absent,
            Value::String(s) => Self::Str(s),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i.into())
                } else if let Some(u) = n.as_u64() {
                    Self::Int(u.into())
                } else if n.as_f64() == Some(0.0) {
                    Self::Int(0)
                } else {
                    tracing::trace!(number = %n, "non-integer number kept as string");
                    Self::Str(n.to_string())
                }
            }
            other @ (Value::Bool(_) | Value::Array(_) | Value::Object(_)) => {
                tracing::trace!(value = %other, "unsupported field type treated as absent");
                Self::Absent
            }
        }
    }
}

/// `0x`/`0X` followed only by `0` digits (or by nothing).
fn is_zero_hex(s: &str) -> bool {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => digits.bytes().all(|b| b == b'0'),
        None => false,
    }
}

/// Free-function form of [`FieldValue::is_empty`].
pub fn is_empty(value: &FieldValue) -> bool {
    value.is_empty()
}

/// Free-function form of [`FieldValue::is_present`].
pub fn is_present(value: &FieldValue) -> bool {
    value.is_present()
}

// ─── Conversions ──────────────────────────────────────────────────────────────

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FieldValue {
                fn from(v: $t) -> Self {
                    Self::Int(v.into())
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<u128> for FieldValue {
    fn from(v: u128) -> Self {
        match i128::try_from(v) {
            Ok(i) => Self::Int(i),
            Err(_) => Self::Quantity(U256::from(v)),
        }
    }
}

impl From<U256> for FieldValue {
    fn from(v: U256) -> Self {
        Self::Quantity(v)
    }
}

impl From<Address> for FieldValue {
    fn from(a: Address) -> Self {
        Self::Str(format!("{a:#x}"))
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Absent, Into::into)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "<absent>"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Quantity(v) => write!(f, "{v}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

// ─── Serde ────────────────────────────────────────────────────────────────────

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absent => serializer.serialize_none(),
            Self::Int(v) => serializer.serialize_i128(*v),
            Self::Quantity(v) => serializer.serialize_str(&format!("0x{v:x}")),
            Self::Str(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from_json)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
