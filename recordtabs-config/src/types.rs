//! Resolved configuration with nested section/key lookup

use recordtabs_common::is_truthy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{trace, warn};

/// Merged configuration from every source
///
/// Values are kept as loosely typed JSON because the same key may arrive as
/// `false` from TOML and `"false"` from the environment. Lookups take a
/// dot-separated path (`"Hierarchy.treeSearchLimit"`). Each segment is
/// matched exactly first, then ASCII case-insensitively, so lower-cased
/// environment keys resolve against conventional section names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    values: Map<String, Value>,
}

impl Config {
    /// Create an empty configuration; every lookup falls back to its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from already-merged values
    pub fn from_map(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Create a configuration from a JSON object; other values yield an empty config
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(values) => Self { values },
            other => {
                warn!("Ignoring non-object configuration root: {}", other);
                Self::default()
            }
        }
    }

    /// Number of top-level entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Top-level entries
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Look up a value by dot-separated path
    ///
    /// ```rust
    /// use recordtabs_config::Config;
    /// use serde_json::json;
    ///
    /// let config = Config::from_value(json!({"Hierarchy": {"search": false}}));
    /// assert_eq!(config.get("Hierarchy.search"), Some(&json!(false)));
    /// assert_eq!(config.get("hierarchy.search"), Some(&json!(false)));
    /// assert_eq!(config.get("Hierarchy.treeSearchLimit"), None);
    /// ```
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = lookup(&self.values, first)?;
        for segment in segments {
            current = match current {
                Value::Object(map) => lookup(map, segment)?,
                _ => return None,
            };
        }
        trace!("Config lookup {} = {}", path, current);
        Some(current)
    }

    /// A whole section as a map
    pub fn section(&self, name: &str) -> Option<&Map<String, Value>> {
        self.get(name).and_then(Value::as_object)
    }

    /// Whether a key is present at all
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Flag value, or `None` when unset or null
    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.get(path)
            .filter(|value| !value.is_null())
            .map(is_truthy)
    }

    /// Integer value, or `None` when unset or not an integer
    pub fn get_i64(&self, path: &str) -> Option<i64> {
        match self.get(path)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => match s.trim().parse() {
                Ok(n) => Some(n),
                Err(_) => {
                    warn!("Configuration value {} is not an integer: {:?}", path, s);
                    None
                }
            },
            other => {
                warn!("Configuration value {} is not an integer: {}", path, other);
                None
            }
        }
    }

    /// String value, or `None` when unset or not a string
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }
}

fn lookup<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).or_else(|| {
        map.iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(key))
            .map(|(_, value)| value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Config {
        Config::from_value(json!({
            "Hierarchy": {
                "search": "false",
                "treeSearchLimit": 50,
                "driver": "Default"
            },
            "Site": {"url": "http://localhost/vufind"}
        }))
    }

    #[test]
    fn test_empty_config() {
        let config = Config::new();
        assert!(config.is_empty());
        assert_eq!(config.get("Hierarchy.search"), None);
        assert_eq!(config.get_bool("Hierarchy.search"), None);
        assert_eq!(config.get_i64("Hierarchy.treeSearchLimit"), None);
    }

    #[test]
    fn test_nested_lookup() {
        let config = sample();
        assert_eq!(config.len(), 2);
        assert_eq!(config.get_bool("Hierarchy.search"), Some(false));
        assert_eq!(config.get_i64("Hierarchy.treeSearchLimit"), Some(50));
        assert_eq!(config.get_str("Site.url"), Some("http://localhost/vufind"));
        assert!(config.section("Hierarchy").is_some());
        assert!(config.section("Site.url").is_none());
    }

    #[test]
    fn test_case_insensitive_fallback() {
        let config = Config::from_value(json!({
            "hierarchy": {"treesearchlimit": "25"}
        }));
        assert_eq!(config.get_i64("Hierarchy.treeSearchLimit"), Some(25));
        assert!(config.contains("HIERARCHY"));
    }

    #[test]
    fn test_exact_match_wins() {
        let config = Config::from_value(json!({
            "Hierarchy": {"search": true},
            "hierarchy": {"search": false}
        }));
        assert_eq!(config.get_bool("Hierarchy.search"), Some(true));
        assert_eq!(config.get_bool("hierarchy.search"), Some(false));
    }

    #[test]
    fn test_null_flag_is_unset() {
        let config = Config::from_value(json!({"Hierarchy": {"search": null}}));
        assert!(config.contains("Hierarchy.search"));
        assert_eq!(config.get_bool("Hierarchy.search"), None);
    }

    #[test]
    fn test_path_through_scalar() {
        let config = sample();
        assert_eq!(config.get("Site.url.host"), None);
    }

    #[test]
    fn test_non_integer_limit() {
        let config = Config::from_value(json!({
            "Hierarchy": {"treeSearchLimit": "lots", "other": 2.5}
        }));
        assert_eq!(config.get_i64("Hierarchy.treeSearchLimit"), None);
        assert_eq!(config.get_i64("Hierarchy.other"), None);
    }

    #[test]
    fn test_non_object_root() {
        assert!(Config::from_value(json!([1, 2])).is_empty());
    }
}
