//! The record tab contract

/// A tab on the record display page
///
/// The host asks every registered tab whether it is active for the current
/// record and only shows the ones that are.
pub trait RecordTab {
    /// Translation key of the tab label
    fn description(&self) -> &str;

    /// Whether the tab should be shown for the current record
    fn is_active(&self) -> bool {
        true
    }

    /// Whether the tab content is visible on initial page load
    fn is_visible_at_start(&self) -> bool {
        false
    }

    /// Whether the tab content can be loaded asynchronously
    fn supports_ajax(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DescriptionTab;

    impl RecordTab for DescriptionTab {
        fn description(&self) -> &str {
            "Description"
        }
    }

    #[test]
    fn test_default_flags() {
        let tab = DescriptionTab;
        assert_eq!(tab.description(), "Description");
        assert!(tab.is_active());
        assert!(!tab.is_visible_at_start());
        assert!(tab.supports_ajax());
    }
}
