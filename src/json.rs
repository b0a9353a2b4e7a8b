use serde::Serialize;
use serde_json::Value;

/// Serialize `data` to a JSON string without ever failing the caller.
///
/// On serialization failure a warning is logged and `default` is returned
/// instead (the literal `"{}"` when no default is supplied).
pub fn safe_json_dumps<T: Serialize>(data: &T, default: Option<&str>) -> String {
    let fallback = default.unwrap_or("{}");

    match serde_json::to_string(data) {
        Ok(encoded) => encoded,
        Err(err) => {
            tracing::warn!("failed to serialize to JSON, using default value: {err}");
            fallback.to_string()
        }
    }
}

/// Parse a JSON payload without ever failing the caller.
///
/// Input handling mirrors what arrives from loosely typed payload columns:
/// - `Null` yields `default`;
/// - objects and arrays are already structured and pass through untouched;
/// - non-string scalars yield `default`;
/// - strings are parsed as JSON.
///
/// With `attempt_double_decode` set, a parse result that is itself a
/// string starting with `{` or `[` is parsed once more; if that inner
/// parse fails, the first result is kept. A top-level parse failure logs
/// a warning with a truncated snippet of the input and yields `default`.
pub fn safe_json_loads(data: impl Into<Value>, default: Value, attempt_double_decode: bool) -> Value {
    let data = data.into();

    let raw = match data {
        Value::Null => return default,
        Value::Object(_) | Value::Array(_) => return data,
        Value::String(raw) => raw,
        _ => return default,
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(parsed) => {
            if attempt_double_decode {
                if let Value::String(inner) = &parsed {
                    if inner.starts_with('{') || inner.starts_with('[') {
                        if let Ok(decoded) = serde_json::from_str::<Value>(inner) {
                            return decoded;
                        }
                    }
                }
            }
            parsed
        }
        Err(err) => {
            let snippet: String = raw.chars().take(100).collect();
            tracing::warn!("failed to deserialize JSON: {err}. Input was: {snippet}");
            default
        }
    }
}
