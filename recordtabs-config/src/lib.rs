//! Record tab configuration using Figment
//!
//! Configuration is merged from, in increasing precedence:
//!
//! - Global: `~/.recordtabs/recordtabs.{toml,yaml,yml,json}`
//! - Project: `./.recordtabs/recordtabs.{toml,yaml,yml,json}`
//! - Environment: `RECORDTABS_SECTION__KEY=value`
//!
//! String values may reference the environment with `${VAR}` or
//! `${VAR:-default}`.
//!
//! ## Example TOML Configuration
//!
//! ```toml
//! [Hierarchy]
//! search = true
//! treeSearchLimit = "${TREE_SEARCH_LIMIT:-100}"
//! ```
//!
//! # Quick Start
//!
//! ```no_run
//! use recordtabs_config::load_configuration;
//!
//! let config = load_configuration()?;
//! let limit = config.get_i64("Hierarchy.treeSearchLimit").unwrap_or(-1);
//! println!("Tree search limit: {}", limit);
//! # Ok::<(), recordtabs_config::ConfigError>(())
//! ```

pub mod discovery;
pub mod env_substitution;
pub mod error;
pub mod provider;
pub mod types;

#[cfg(test)]
mod tests;

pub use discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery};
pub use env_substitution::EnvVarProcessor;
pub use error::{ConfigError, ConfigResult};
pub use provider::ConfigProvider;
pub use types::Config;

/// Load configuration from the standard sources
///
/// # Errors
///
/// Returns [`ConfigError`] when a discovered file cannot be parsed or
/// environment substitution fails.
pub fn load_configuration() -> ConfigResult<Config> {
    ConfigProvider::new().load()
}
