use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Тело ответа backend при ошибке: `{ "detail": ... }`
///
/// `detail` is either a plain message or an arbitrary structured value
/// (validation errors come back as arrays of objects).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// Human readable form of `detail`.
    ///
    /// Strings are returned as-is, structured values are pretty-printed with
    /// two-space indentation. Absent and falsy details (`null`, `""`, `false`, `0`)
    /// yield `None`.
    pub fn detail_text(&self) -> Option<String> {
        detail_text(self.detail.as_ref()?)
    }
}

/// Same rule as [`ErrorBody::detail_text`] for a bare value.
pub fn detail_text(detail: &Value) -> Option<String> {
    match detail {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => serde_json::to_string_pretty(other).ok(),
    }
}
