//! [`TermValue`] — the universal value type shared by the encoder and the
//! tree decoder.

/// Generic value model for ETF terms.
///
/// Covers every shape the codec can put on or take off the wire:
/// - JSON-like primitives (null, bool, numbers, strings)
/// - Raw binary data
/// - Ordered sequences
/// - String-keyed mappings (ordered pairs; insertion order is not part of
///   the wire contract)
///
/// Application records do not appear here: they are projected into
/// [`TermValue::Object`] through [`ToRecord`](crate::ToRecord) before they
/// reach the encoder.
#[derive(Debug, Clone, PartialEq)]
pub enum TermValue {
    /// `nil` / `null` / absent.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed integer (fits in i64, negative or positive).
    Integer(i64),
    /// Unsigned integer above `i64::MAX`.
    UInteger(u64),
    /// Floating-point number.
    Float(f64),
    /// UTF-8 string.
    Str(String),
    /// Raw bytes (binaries that are not valid UTF-8).
    Bytes(Vec<u8>),
    /// Ordered sequence of term values.
    Array(Vec<TermValue>),
    /// String-keyed mapping as ordered key-value pairs.
    Object(Vec<(String, TermValue)>),
}

impl From<serde_json::Value> for TermValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => TermValue::Null,
            serde_json::Value::Bool(b) => TermValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    TermValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    TermValue::UInteger(u)
                } else {
                    TermValue::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => TermValue::Str(s),
            serde_json::Value::Array(arr) => {
                TermValue::Array(arr.into_iter().map(TermValue::from).collect())
            }
            serde_json::Value::Object(obj) => TermValue::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, TermValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<TermValue> for serde_json::Value {
    fn from(v: TermValue) -> Self {
        match v {
            TermValue::Null => serde_json::Value::Null,
            TermValue::Bool(b) => serde_json::Value::Bool(b),
            TermValue::Integer(i) => serde_json::json!(i),
            TermValue::UInteger(u) => serde_json::json!(u),
            TermValue::Float(f) => serde_json::json!(f),
            TermValue::Str(s) => serde_json::Value::String(s),
            // Interop conversion only; wire fidelity for non-UTF-8 binaries
            // lives in TermValue::Bytes itself.
            TermValue::Bytes(b) => {
                serde_json::Value::String(String::from_utf8_lossy(&b).into_owned())
            }
            TermValue::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            TermValue::Object(obj) => serde_json::Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}
