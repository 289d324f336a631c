//! Records described by YAML fixtures
//!
//! A fixture stands in for a catalog record and its hierarchy driver. The
//! driver serves markup already rendered per tree, which is how hierarchy
//! drivers cache trees between requests.

use crate::error::{CliError, CliResult};
use indexmap::IndexMap;
use recordtabs::{
    HierarchyCapable, HierarchyDriver, RecordDriver, Result, TabError, TreeList, TreeSettings,
    RENDER_MODE_LIST,
};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Hierarchy driver section of a fixture
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CachedHierarchy {
    #[serde(default)]
    pub settings: TreeSettings,
    #[serde(default)]
    pub markup: IndexMap<String, String>,
}

impl HierarchyDriver for CachedHierarchy {
    fn tree_settings(&self) -> TreeSettings {
        self.settings.clone()
    }

    fn render(
        &self,
        record: &dyn RecordDriver,
        context: &str,
        mode: &str,
        tree_id: &str,
    ) -> Result<String> {
        if mode != RENDER_MODE_LIST {
            return Err(TabError::render(
                tree_id,
                format!("unsupported render mode '{}'", mode),
            ));
        }

        debug!(
            "Serving cached tree {} for record {} in context {}",
            tree_id,
            record.unique_id(),
            context
        );
        self.markup
            .get(tree_id)
            .cloned()
            .ok_or_else(|| TabError::tree_not_found(tree_id))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FixtureFile {
    id: String,
    #[serde(default)]
    trees: Option<TreeList>,
    #[serde(default)]
    hierarchy: Option<CachedHierarchy>,
}

/// Record loaded from a fixture
///
/// The record supports hierarchies when the fixture has a `trees` or a
/// `hierarchy` section.
#[derive(Debug)]
pub struct FixtureRecord {
    id: String,
    trees: Option<TreeList>,
    driver: Option<Arc<CachedHierarchy>>,
}

impl FixtureRecord {
    /// Parse a fixture from YAML text
    pub fn from_yaml(yaml: &str) -> CliResult<Self> {
        let file: FixtureFile = serde_yaml_ng::from_str(yaml)
            .map_err(|e| CliError::from_error("Invalid record fixture", e))?;
        Ok(Self {
            id: file.id,
            trees: file.trees,
            driver: file.hierarchy.map(Arc::new),
        })
    }

    /// Read and parse a fixture file
    pub fn load(path: &Path) -> CliResult<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            CliError::from_error(format!("Failed to read fixture {}", path.display()), e)
        })?;
        Self::from_yaml(&yaml)
    }
}

impl RecordDriver for FixtureRecord {
    fn unique_id(&self) -> &str {
        &self.id
    }

    fn hierarchy(&self) -> Option<&dyn HierarchyCapable> {
        if self.trees.is_some() || self.driver.is_some() {
            Some(self)
        } else {
            None
        }
    }
}

impl HierarchyCapable for FixtureRecord {
    fn hierarchy_trees(&self) -> Option<TreeList> {
        self.trees.clone()
    }

    fn hierarchy_driver(&self) -> Option<Arc<dyn HierarchyDriver>> {
        self.driver
            .clone()
            .map(|driver| driver as Arc<dyn HierarchyDriver>)
    }
}
