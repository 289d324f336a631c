//! Fake collaborators for hierarchy tree tab tests

#![allow(dead_code)]

use recordtabs::{
    HierarchyCapable, HierarchyDriver, RecordDriver, Result, TabError, TreeList, TreeSettings,
};
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::sync::Arc;

/// Arguments of one render call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCall {
    pub record_id: String,
    pub context: String,
    pub mode: String,
    pub tree_id: String,
}

/// Hierarchy driver returning canned markup
#[derive(Default)]
pub struct FakeHierarchyDriver {
    settings: TreeSettings,
    markup: String,
    fail_with: Option<String>,
    calls: RefCell<Vec<RenderCall>>,
}

impl FakeHierarchyDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_setting(mut self, key: &str, value: Value) -> Self {
        self.settings.insert(key.to_string(), value);
        self
    }

    pub fn with_markup(mut self, markup: &str) -> Self {
        self.markup = markup.to_string();
        self
    }

    pub fn failing(mut self, message: &str) -> Self {
        self.fail_with = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.borrow().clone()
    }
}

impl HierarchyDriver for FakeHierarchyDriver {
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
        self.calls.borrow_mut().push(RenderCall {
            record_id: record.unique_id().to_string(),
            context: context.to_string(),
            mode: mode.to_string(),
            tree_id: tree_id.to_string(),
        });
        match &self.fail_with {
            Some(message) => Err(TabError::render(tree_id, message.clone())),
            None => Ok(self.markup.clone()),
        }
    }
}

/// Record whose hierarchy capability is configurable
pub struct FakeRecord {
    id: String,
    hierarchy_capable: bool,
    trees: Option<TreeList>,
    driver: Option<Arc<FakeHierarchyDriver>>,
    tree_probes: Cell<usize>,
}

impl FakeRecord {
    /// A record type without hierarchy support
    pub fn plain(id: &str) -> Self {
        Self {
            id: id.to_string(),
            hierarchy_capable: false,
            trees: None,
            driver: None,
            tree_probes: Cell::new(0),
        }
    }

    /// A hierarchy-capable record belonging to no tree
    pub fn capable(id: &str) -> Self {
        Self {
            hierarchy_capable: true,
            ..Self::plain(id)
        }
    }

    pub fn with_trees(mut self, trees: &[(&str, &str)]) -> Self {
        self.hierarchy_capable = true;
        self.trees = Some(
            trees
                .iter()
                .map(|(id, label)| (id.to_string(), label.to_string()))
                .collect(),
        );
        self
    }

    pub fn with_driver(mut self, driver: Arc<FakeHierarchyDriver>) -> Self {
        self.hierarchy_capable = true;
        self.driver = Some(driver);
        self
    }

    pub fn tree_probes(&self) -> usize {
        self.tree_probes.get()
    }
}

impl RecordDriver for FakeRecord {
    fn unique_id(&self) -> &str {
        &self.id
    }

    fn hierarchy(&self) -> Option<&dyn HierarchyCapable> {
        if self.hierarchy_capable {
            Some(self)
        } else {
            None
        }
    }
}

impl HierarchyCapable for FakeRecord {
    fn hierarchy_trees(&self) -> Option<TreeList> {
        self.tree_probes.set(self.tree_probes.get() + 1);
        self.trees.clone()
    }

    fn hierarchy_driver(&self) -> Option<Arc<dyn HierarchyDriver>> {
        self.driver
            .clone()
            .map(|driver| driver as Arc<dyn HierarchyDriver>)
    }
}
