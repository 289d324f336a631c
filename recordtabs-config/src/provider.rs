//! Configuration provider using Figment

use crate::{
    discovery::{ConfigFile, ConfigFormat, FileDiscovery},
    env_substitution::EnvVarProcessor,
    error::ConfigError,
    types::Config,
    ConfigResult,
};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde_json::{Map, Value};
use tracing::{debug, info, trace};

/// Prefix for configuration environment variables
pub const ENV_PREFIX: &str = "RECORDTABS_";

/// Separator between nesting levels in environment variable names
pub const ENV_NESTING_SEPARATOR: &str = "__";

/// Configuration provider using figment
///
/// Sources, later overriding earlier:
/// 1. defaults (empty, key defaults are applied at lookup time)
/// 2. global file `~/.recordtabs/recordtabs.*`
/// 3. project file `./.recordtabs/recordtabs.*`
/// 4. `RECORDTABS_*` environment variables, `__` separating nesting levels
///
/// Nothing is cached here; each load reads the sources again.
#[derive(Debug, Clone, Default)]
pub struct ConfigProvider {
    discovery: FileDiscovery,
}

impl ConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific file discovery instead of the standard directories
    pub fn with_discovery(discovery: FileDiscovery) -> Self {
        Self { discovery }
    }

    /// Load and merge all configuration sources
    pub fn load(&self) -> ConfigResult<Config> {
        debug!("Loading configuration from all sources");

        let mut values = self
            .build_figment()?
            .extract::<Map<String, Value>>()
            .map_err(|e| ConfigError::parse_error(None, e))?;
        let overrides = self
            .env_vars()
            .extract::<Map<String, Value>>()
            .map_err(|e| ConfigError::parse_error(None, e))?;
        merge_overrides(&mut values, overrides);

        let mut root = Value::Object(values);
        EnvVarProcessor::lenient()?.substitute_value(&mut root)?;

        let config = Config::from_value(root);
        info!("Loaded configuration with {} top-level entries", config.len());
        Ok(config)
    }

    fn build_figment(&self) -> ConfigResult<Figment> {
        Ok(Figment::new()
            .merge(self.default_config())
            .merge(self.discovered_config_files()?))
    }

    fn default_config(&self) -> Figment {
        trace!("Loading default configuration values");
        Figment::from(Serialized::defaults(Map::<String, Value>::new()))
    }

    /// Each file is extracted on its own first so a parse failure names it
    fn discovered_config_files(&self) -> ConfigResult<Figment> {
        self.discovery
            .discover_all()
            .iter()
            .try_fold(Figment::new(), |figment, file| {
                trace!(
                    "Loading config file: {} ({:?})",
                    file.path.display(),
                    file.format
                );
                let source = Self::config_file(file);
                source
                    .extract::<Map<String, Value>>()
                    .map_err(|e| ConfigError::parse_error(Some(file.path.clone()), e))?;
                Ok(figment.merge(source))
            })
    }

    fn config_file(file: &ConfigFile) -> Figment {
        let path = &file.path;
        match file.format {
            ConfigFormat::Toml => Figment::from(Toml::file(path)),
            ConfigFormat::Yaml => Figment::from(Yaml::file(path)),
            ConfigFormat::Json => Figment::from(Json::file(path)),
        }
    }

    fn env_vars(&self) -> Figment {
        Figment::from(Env::prefixed(ENV_PREFIX).split(ENV_NESTING_SEPARATOR))
    }
}

// Environment keys arrive lower-cased, so they replace file keys that match
// ignoring ASCII case and keep the file's spelling.
fn merge_overrides(target: &mut Map<String, Value>, overrides: Map<String, Value>) {
    for (key, value) in overrides {
        let existing = target
            .keys()
            .find(|candidate| candidate.eq_ignore_ascii_case(&key))
            .cloned()
            .unwrap_or(key);

        if let Value::Object(nested) = value {
            if let Some(Value::Object(current)) = target.get_mut(&existing) {
                merge_overrides(current, nested);
                continue;
            }
            target.insert(existing, Value::Object(nested));
        } else {
            target.insert(existing, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn isolated(temp_dir: &TempDir) -> ConfigProvider {
        let project = temp_dir.path().join("project");
        let global = temp_dir.path().join("global");
        fs::create_dir_all(&project).unwrap();
        fs::create_dir_all(&global).unwrap();
        ConfigProvider::with_discovery(FileDiscovery::with_directories(
            Some(project),
            Some(global),
        ))
    }

    #[test]
    fn test_default_config_is_empty() {
        let provider = ConfigProvider::new();
        let values: Map<String, Value> = provider.default_config().extract().unwrap();
        assert!(values.is_empty());
    }

    #[test]
    #[serial]
    fn test_load_with_no_sources() {
        let temp_dir = TempDir::new().unwrap();
        let config = isolated(&temp_dir).load().unwrap();
        assert_eq!(config.get("Hierarchy.search"), None);
    }

    #[test]
    #[serial]
    fn test_env_vars_nest_on_double_underscore() {
        std::env::set_var("RECORDTABS_HIERARCHY__TREESEARCHLIMIT", "25");

        let temp_dir = TempDir::new().unwrap();
        let config = isolated(&temp_dir).load().unwrap();

        std::env::remove_var("RECORDTABS_HIERARCHY__TREESEARCHLIMIT");

        assert_eq!(config.get_i64("Hierarchy.treeSearchLimit"), Some(25));
    }

    #[test]
    #[serial]
    fn test_parse_error_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let provider = isolated(&temp_dir);
        fs::write(
            temp_dir.path().join("project").join("recordtabs.toml"),
            "[Hierarchy\nsearch = ",
        )
        .unwrap();

        let err = provider.load().unwrap_err();
        match err {
            ConfigError::ParseError { path, .. } => {
                let path = path.expect("parse error should name the file");
                assert!(path.ends_with("project/recordtabs.toml"));
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(provider
            .load()
            .unwrap_err()
            .to_string()
            .contains("recordtabs.toml"));
    }

    #[test]
    fn test_merge_overrides_ignores_case() {
        let mut target = serde_json::json!({
            "Hierarchy": {"search": true, "treeSearchLimit": 10}
        })
        .as_object()
        .cloned()
        .unwrap();
        let overrides = serde_json::json!({"hierarchy": {"treesearchlimit": 5}})
            .as_object()
            .cloned()
            .unwrap();

        merge_overrides(&mut target, overrides);

        assert_eq!(
            Value::Object(target),
            serde_json::json!({"Hierarchy": {"search": true, "treeSearchLimit": 5}})
        );
    }
}
