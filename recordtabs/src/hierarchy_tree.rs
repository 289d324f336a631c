//! Hierarchy tree tab
//!
//! Shows the collection hierarchy a record belongs to. The tab only decides
//! *whether* and *which* tree to show; the record's hierarchy driver does
//! the rendering.

use crate::driver::{HierarchyDriver, RecordDriver, TreeList, FULL_HIERARCHY_RECORD_VIEW};
use crate::request::Request;
use crate::tab::RecordTab;
use crate::Result;
use once_cell::unsync::OnceCell;
use recordtabs_common::{is_truthy, Pretty};
use recordtabs_config::{Config, ConfigResult};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Token hierarchy drivers put where the site base URL belongs
pub const BASE_URL_PLACEHOLDER: &str = "%%%%VUFIND-BASE-URL%%%%";

/// Request parameter selecting a tree
pub const HIERARCHY_PARAM: &str = "hierarchy";

/// Render context used when the caller gives none
pub const DEFAULT_CONTEXT: &str = "Record";

/// Output mode requested from hierarchy drivers
pub const RENDER_MODE_LIST: &str = "List";

/// Whether tree search is offered, default true
pub const SEARCH_CONFIG_KEY: &str = "Hierarchy.search";

/// Maximum tree search results, default [`UNLIMITED_SEARCH`]
pub const SEARCH_LIMIT_CONFIG_KEY: &str = "Hierarchy.treeSearchLimit";

/// Search limit meaning "no limit"
pub const UNLIMITED_SEARCH: i64 = -1;

type ConfigLoader = Box<dyn Fn() -> ConfigResult<Config>>;

/// Tree search options from the `Hierarchy` configuration section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeSearchSettings {
    /// `Hierarchy.search`, true when unset
    pub active: bool,
    /// `Hierarchy.treeSearchLimit`, [`UNLIMITED_SEARCH`] when unset
    pub limit: i64,
}

impl TreeSearchSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            active: config.get_bool(SEARCH_CONFIG_KEY).unwrap_or(true),
            limit: config
                .get_i64(SEARCH_LIMIT_CONFIG_KEY)
                .unwrap_or(UNLIMITED_SEARCH),
        }
    }
}

/// Record tab displaying the hierarchy tree a record belongs to
///
/// Built once per request. The tree list and the configuration are looked
/// up on first use and kept for the lifetime of the tab.
///
/// ```rust
/// use recordtabs::{HierarchyTreeTab, RecordDriver, RecordTab};
/// use recordtabs_config::Config;
/// use std::sync::Arc;
///
/// struct PlainRecord;
///
/// impl RecordDriver for PlainRecord {
///     fn unique_id(&self) -> &str {
///         "rec-1"
///     }
/// }
///
/// let tab = HierarchyTreeTab::new(Arc::new(PlainRecord)).with_config(Config::new());
/// assert!(!tab.is_active());
/// assert_eq!(tab.active_tree(), None);
/// assert!(tab.search_active());
/// assert_eq!(tab.search_limit(), -1);
/// ```
pub struct HierarchyTreeTab {
    record: Arc<dyn RecordDriver>,
    request: Option<Arc<dyn Request>>,
    tree_list: OnceCell<TreeList>,
    config: OnceCell<Config>,
    config_loader: ConfigLoader,
}

impl HierarchyTreeTab {
    /// Create a tab for `record`, loading configuration from the standard
    /// sources when it is first needed
    pub fn new(record: Arc<dyn RecordDriver>) -> Self {
        Self {
            record,
            request: None,
            tree_list: OnceCell::new(),
            config: OnceCell::new(),
            config_loader: Box::new(recordtabs_config::load_configuration),
        }
    }

    /// Attach the current request
    pub fn with_request(mut self, request: Arc<dyn Request>) -> Self {
        self.request = Some(request);
        self
    }

    /// Use configuration the host has already loaded
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = OnceCell::from(config);
        self
    }

    /// Load configuration through `loader` on first use
    pub fn with_config_loader<F>(mut self, loader: F) -> Self
    where
        F: Fn() -> ConfigResult<Config> + 'static,
    {
        self.config = OnceCell::new();
        self.config_loader = Box::new(loader);
        self
    }

    /// Replace or clear the current request
    pub fn set_request(&mut self, request: Option<Arc<dyn Request>>) {
        self.request = request;
    }

    /// The record this tab describes
    pub fn record(&self) -> &dyn RecordDriver {
        self.record.as_ref()
    }

    /// Trees the record belongs to, empty when it belongs to none
    pub fn tree_list(&self) -> &TreeList {
        self.tree_list.get_or_init(|| {
            let trees = self
                .record
                .hierarchy()
                .and_then(|hierarchy| hierarchy.hierarchy_trees())
                .unwrap_or_default();
            debug!(
                "Record {} belongs to {} hierarchy trees",
                self.record.unique_id(),
                trees.len()
            );
            trace!("Hierarchy trees: {}", Pretty(&trees));
            trees
        })
    }

    /// Tree to display
    ///
    /// A non-empty `hierarchy` request parameter other than `"0"` selects the
    /// tree, unless the record belongs to exactly one tree. The parameter is
    /// not checked against [`tree_list`](Self::tree_list). Otherwise the
    /// first tree is used; `None` when there are no trees.
    pub fn active_tree(&self) -> Option<String> {
        let trees = self.tree_list();
        let active = match self.requested_tree() {
            Some(requested) if trees.len() != 1 => Some(requested.to_string()),
            _ => trees.keys().next().cloned(),
        };
        trace!("Active hierarchy tree: {:?}", active);
        active
    }

    /// Whether to show the full tree rather than the part around this record
    ///
    /// Without a hierarchy driver there is nothing to show in full. Drivers
    /// show full trees unless `fullHierarchyRecordView` is set, non-null and falsy, and
    /// even then the top record of a tree gets the full tree.
    pub fn full_hierarchy_setting(&self) -> bool {
        let Some(driver) = self.hierarchy_driver() else {
            debug!(
                "Record {} has no hierarchy driver, using partial tree",
                self.record.unique_id()
            );
            return false;
        };

        let settings = driver.tree_settings();
        if settings
            .get(FULL_HIERARCHY_RECORD_VIEW)
            .filter(|value| !value.is_null())
            .map_or(true, is_truthy)
        {
            return true;
        }

        self.active_tree().as_deref() == Some(self.record.unique_id())
    }

    /// Render tree `id` (the active tree when `None`) with links under `base_url`
    ///
    /// Returns an empty string when the record has no hierarchy driver or
    /// there is no tree to render.
    ///
    /// # Errors
    ///
    /// Propagates hierarchy driver failures.
    pub fn render_tree(&self, base_url: &str, id: Option<&str>, context: &str) -> Result<String> {
        let id = match id {
            Some(id) => Some(id.to_string()),
            None => self.active_tree(),
        };

        let Some(driver) = self.hierarchy_driver() else {
            debug!(
                "Record {} has no hierarchy driver, nothing to render",
                self.record.unique_id()
            );
            return Ok(String::new());
        };

        let Some(id) = id else {
            debug!(
                "Record {} has no hierarchy tree to render",
                self.record.unique_id()
            );
            return Ok(String::new());
        };

        debug!("Rendering hierarchy tree {} in context {}", id, context);
        let markup = driver.render(self.record.as_ref(), context, RENDER_MODE_LIST, &id)?;
        Ok(substitute_base_url(&markup, base_url))
    }

    /// Render the active tree in the default context
    pub fn render_active_tree(&self, base_url: &str) -> Result<String> {
        self.render_tree(base_url, None, DEFAULT_CONTEXT)
    }

    /// Whether searching within the tree is enabled
    pub fn search_active(&self) -> bool {
        TreeSearchSettings::from_config(self.config()).active
    }

    /// Maximum number of tree search results, [`UNLIMITED_SEARCH`] for no limit
    pub fn search_limit(&self) -> i64 {
        TreeSearchSettings::from_config(self.config()).limit
    }

    fn hierarchy_driver(&self) -> Option<Arc<dyn HierarchyDriver>> {
        self.record.hierarchy()?.hierarchy_driver()
    }

    fn requested_tree(&self) -> Option<&str> {
        self.request
            .as_deref()?
            .param(HIERARCHY_PARAM)
            .filter(|value| !is_unset_param(value))
    }

    fn config(&self) -> &Config {
        self.config.get_or_init(|| match (self.config_loader)() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load configuration, using defaults: {}", e);
                Config::new()
            }
        })
    }
}

impl RecordTab for HierarchyTreeTab {
    fn description(&self) -> &str {
        "hierarchy_tree"
    }

    fn is_active(&self) -> bool {
        !self.tree_list().is_empty()
    }
}

impl fmt::Debug for HierarchyTreeTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HierarchyTreeTab")
            .field("record", &self.record.unique_id())
            .field("has_request", &self.request.is_some())
            .field("tree_list", &self.tree_list.get())
            .field("config", &self.config.get())
            .finish()
    }
}

/// Replace every base URL placeholder in `markup`, without a trailing `/`
pub fn substitute_base_url(markup: &str, base_url: &str) -> String {
    markup.replace(BASE_URL_PLACEHOLDER, base_url.trim_end_matches('/'))
}

// Empty and "0" parameters mean "no selection"
fn is_unset_param(value: &str) -> bool {
    value.is_empty() || value == "0"
}
