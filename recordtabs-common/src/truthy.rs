//! Truthiness of loosely typed values
//!
//! Configuration files, environment variables and hierarchy driver settings
//! all hand us `serde_json::Value`s whose type depends on where they came
//! from (`false` in TOML, `"false"` from the environment, `0` from an INI
//! export). Flags are read through [`is_truthy`] so all of these agree.

use serde_json::Value;

/// Interpret a value as a boolean flag
///
/// - `null` is false
/// - numbers are true unless zero
/// - strings are false when empty, `"0"`, `"false"`, `"no"` or `"off"`
///   (case-insensitive, surrounding whitespace ignored), true otherwise
/// - arrays and objects are true unless empty
///
/// ```rust
/// use recordtabs_common::is_truthy;
/// use serde_json::json;
///
/// assert!(is_truthy(&json!(true)));
/// assert!(!is_truthy(&json!("off")));
/// assert!(!is_truthy(&json!(0)));
/// ```
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "" | "0" | "false" | "no" | "off"
        ),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
