//! Record display tabs
//!
//! A record page shows one tab per aspect of a catalog record. This crate
//! defines the [`RecordTab`] contract, the collaborator traits the host
//! application implements ([`RecordDriver`], [`HierarchyCapable`],
//! [`HierarchyDriver`], [`Request`]), and the [`HierarchyTreeTab`].
//!
//! ## Basic Usage
//!
//! ```rust
//! use recordtabs::{
//!     HierarchyCapable, HierarchyDriver, HierarchyTreeTab, RecordDriver, RecordTab,
//!     RequestParams, TreeList,
//! };
//! use recordtabs_config::Config;
//! use std::sync::Arc;
//!
//! struct Volume {
//!     id: String,
//! }
//!
//! impl RecordDriver for Volume {
//!     fn unique_id(&self) -> &str {
//!         &self.id
//!     }
//!
//!     fn hierarchy(&self) -> Option<&dyn HierarchyCapable> {
//!         Some(self)
//!     }
//! }
//!
//! impl HierarchyCapable for Volume {
//!     fn hierarchy_trees(&self) -> Option<TreeList> {
//!         Some(TreeList::from([
//!             ("set-1".to_string(), "Collected Works".to_string()),
//!             ("set-2".to_string(), "Letters".to_string()),
//!         ]))
//!     }
//!
//!     fn hierarchy_driver(&self) -> Option<Arc<dyn HierarchyDriver>> {
//!         None
//!     }
//! }
//!
//! let request = RequestParams::new().with_query("hierarchy", "set-2");
//! let tab = HierarchyTreeTab::new(Arc::new(Volume { id: "vol-3".into() }))
//!     .with_request(Arc::new(request))
//!     .with_config(Config::new());
//!
//! assert!(tab.is_active());
//! assert_eq!(tab.active_tree().as_deref(), Some("set-2"));
//! assert_eq!(tab.render_active_tree("https://catalog.example.edu/").unwrap(), "");
//! ```

mod driver;
mod error;
mod hierarchy_tree;
mod request;
mod tab;

pub use driver::{
    HierarchyCapable, HierarchyDriver, RecordDriver, TreeList, TreeSettings,
    FULL_HIERARCHY_RECORD_VIEW,
};
pub use error::{Result, TabError};
pub use hierarchy_tree::{
    substitute_base_url, HierarchyTreeTab, TreeSearchSettings, BASE_URL_PLACEHOLDER,
    DEFAULT_CONTEXT, HIERARCHY_PARAM, RENDER_MODE_LIST, SEARCH_CONFIG_KEY,
    SEARCH_LIMIT_CONFIG_KEY, UNLIMITED_SEARCH,
};
pub use request::{Request, RequestParams};
pub use tab::RecordTab;
