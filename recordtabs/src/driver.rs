//! Collaborator contracts supplied by the host application
//!
//! A record driver wraps one catalog record. Records that belong to a
//! hierarchy (a finding aid, a multi-volume set) expose that membership
//! through the optional [`HierarchyCapable`] capability; everything else
//! leaves [`RecordDriver::hierarchy`] at its default of `None`.

use crate::Result;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Tree identifier to display label, in the order the record driver produced them
pub type TreeList = IndexMap<String, String>;

/// Settings reported by a hierarchy driver
pub type TreeSettings = Map<String, Value>;

/// Tree setting selecting full trees over partial subtrees on record pages
pub const FULL_HIERARCHY_RECORD_VIEW: &str = "fullHierarchyRecordView";

/// A catalog record as seen by record tabs
pub trait RecordDriver {
    /// Identifier of this record, unique within its source
    fn unique_id(&self) -> &str;

    /// Hierarchy capability, when the record type supports hierarchies
    fn hierarchy(&self) -> Option<&dyn HierarchyCapable> {
        None
    }
}

/// Hierarchy membership of a record
pub trait HierarchyCapable {
    /// Trees this record belongs to, `None` when it belongs to none
    fn hierarchy_trees(&self) -> Option<TreeList>;

    /// Driver able to render this record's trees
    fn hierarchy_driver(&self) -> Option<Arc<dyn HierarchyDriver>>;
}

/// Renders hierarchy trees into markup
pub trait HierarchyDriver {
    /// Settings for tree display, see [`FULL_HIERARCHY_RECORD_VIEW`]
    fn tree_settings(&self) -> TreeSettings;

    /// Render `tree_id` for `record`
    ///
    /// The returned markup may be served from a cache shared between sites,
    /// so links inside it use [`BASE_URL_PLACEHOLDER`](crate::BASE_URL_PLACEHOLDER)
    /// instead of an absolute base URL.
    fn render(
        &self,
        record: &dyn RecordDriver,
        context: &str,
        mode: &str,
        tree_id: &str,
    ) -> Result<String>;
}
