//! Environment variable substitution in configuration values
//!
//! Supports patterns:
//! - `${VAR_NAME}` - environment variable value, empty string if not set
//! - `${VAR_NAME:-default}` - environment variable value, or `default` if not set
//!
//! Strict mode turns a missing variable without default into an error.

use crate::{ConfigError, ConfigResult};
use regex::Regex;
use serde_json::Value;
use tracing::trace;

/// Environment variable substitution processor
pub struct EnvVarProcessor {
    var_regex: Regex,
    strict_mode: bool,
}

impl EnvVarProcessor {
    /// Matches `${VAR_NAME}` and `${VAR_NAME:-default_value}`
    const ENV_VAR_PATTERN: &'static str = r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}";

    /// Create a processor
    ///
    /// ```rust
    /// use recordtabs_config::env_substitution::EnvVarProcessor;
    ///
    /// let lenient = EnvVarProcessor::new(false).unwrap();
    /// let strict = EnvVarProcessor::new(true).unwrap();
    /// ```
    pub fn new(strict_mode: bool) -> ConfigResult<Self> {
        let var_regex = Regex::new(Self::ENV_VAR_PATTERN).map_err(|e| {
            ConfigError::validation_error(format!(
                "Failed to compile environment variable regex: {}",
                e
            ))
        })?;

        Ok(Self {
            var_regex,
            strict_mode,
        })
    }

    /// Processor that substitutes empty strings for missing variables
    pub fn lenient() -> ConfigResult<Self> {
        Self::new(false)
    }

    /// Processor that errors on missing variables without a default
    pub fn strict() -> ConfigResult<Self> {
        Self::new(true)
    }

    /// Recursively substitute every string inside `value`
    pub fn substitute_value(&self, value: &mut Value) -> ConfigResult<()> {
        match value {
            Value::String(s) => {
                if self.contains_patterns(s) {
                    *s = self.substitute_string(s)?;
                }
            }
            Value::Array(items) => {
                for item in items.iter_mut() {
                    self.substitute_value(item)?;
                }
            }
            Value::Object(map) => {
                for (_, item) in map.iter_mut() {
                    self.substitute_value(item)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Substitute all patterns in a single string
    ///
    /// ```rust
    /// use recordtabs_config::env_substitution::EnvVarProcessor;
    ///
    /// let processor = EnvVarProcessor::lenient().unwrap();
    /// let value = processor
    ///     .substitute_string("${RECORDTABS_DOC_UNSET_VAR:-25}")
    ///     .unwrap();
    /// assert_eq!(value, "25");
    /// ```
    pub fn substitute_string(&self, s: &str) -> ConfigResult<String> {
        if self.strict_mode {
            for caps in self.var_regex.captures_iter(s) {
                let var_name = &caps[1];
                if std::env::var(var_name).is_err() && caps.get(2).is_none() {
                    return Err(ConfigError::environment_error(format!(
                        "Environment variable '{}' not found and no default provided",
                        var_name
                    )));
                }
            }
        }

        let result = self
            .var_regex
            .replace_all(s, |caps: &regex::Captures| {
                let var_name = &caps[1];
                match std::env::var(var_name) {
                    Ok(value) => {
                        trace!("Environment variable substitution: {} = {}", var_name, value);
                        value
                    }
                    Err(_) => match caps.get(2) {
                        Some(default) => default.as_str().to_string(),
                        None => String::new(),
                    },
                }
            })
            .into_owned();

        Ok(result)
    }

    /// Whether the string contains any substitution pattern
    pub fn contains_patterns(&self, s: &str) -> bool {
        self.var_regex.is_match(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_substitute_set_variable() {
        std::env::set_var("RECORDTABS_TEST_HOST", "catalog.example.edu");
        let processor = EnvVarProcessor::lenient().unwrap();

        let result = processor
            .substitute_string("https://${RECORDTABS_TEST_HOST}/vufind")
            .unwrap();
        assert_eq!(result, "https://catalog.example.edu/vufind");

        std::env::remove_var("RECORDTABS_TEST_HOST");
    }

    #[test]
    #[serial]
    fn test_default_and_missing() {
        std::env::remove_var("RECORDTABS_TEST_MISSING");
        let processor = EnvVarProcessor::lenient().unwrap();

        assert_eq!(
            processor
                .substitute_string("${RECORDTABS_TEST_MISSING:-50}")
                .unwrap(),
            "50"
        );
        assert_eq!(
            processor
                .substitute_string("[${RECORDTABS_TEST_MISSING}]")
                .unwrap(),
            "[]"
        );
    }

    #[test]
    #[serial]
    fn test_strict_mode_rejects_missing() {
        std::env::remove_var("RECORDTABS_TEST_MISSING");
        let processor = EnvVarProcessor::strict().unwrap();

        assert!(processor
            .substitute_string("${RECORDTABS_TEST_MISSING}")
            .is_err());
        assert_eq!(
            processor
                .substitute_string("${RECORDTABS_TEST_MISSING:-ok}")
                .unwrap(),
            "ok"
        );
    }

    #[test]
    #[serial]
    fn test_substitute_nested_value() {
        std::env::set_var("RECORDTABS_TEST_LIMIT", "100");
        let processor = EnvVarProcessor::lenient().unwrap();

        let mut value = json!({
            "Hierarchy": {
                "treeSearchLimit": "${RECORDTABS_TEST_LIMIT}",
                "search": true,
                "drivers": ["${RECORDTABS_TEST_LIMIT}", "static"]
            }
        });
        processor.substitute_value(&mut value).unwrap();

        assert_eq!(value["Hierarchy"]["treeSearchLimit"], json!("100"));
        assert_eq!(value["Hierarchy"]["search"], json!(true));
        assert_eq!(value["Hierarchy"]["drivers"][0], json!("100"));

        std::env::remove_var("RECORDTABS_TEST_LIMIT");
    }
}
