//! Logging utilities
//!
//! This module provides utilities for formatting values inside log messages.

use serde::Serialize;
use std::fmt::Debug;

/// Wrapper for pretty-printing types in logs as YAML
///
/// Use this in tracing statements to format tree lists, settings maps and
/// configuration sections as YAML with a newline before the content:
///
/// ```ignore
/// use recordtabs_common::Pretty;
/// use tracing::debug;
///
/// debug!("Tree settings: {}", Pretty(&settings));
/// ```
///
/// Debug is used as a fallback if YAML serialization fails.
pub struct Pretty<T>(pub T);

impl<T: Serialize + Debug> std::fmt::Display for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_yaml_ng::to_string(&self.0) {
            Ok(yaml) => write!(f, "\n{}", yaml),
            Err(_) => write!(f, "\n{:#?}", self.0),
        }
    }
}

impl<T: Serialize + Debug> std::fmt::Debug for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_formats_as_yaml() {
        let settings = json!({"fullHierarchyRecordView": false});
        let output = format!("{}", Pretty(&settings));
        assert!(output.starts_with('\n'));
        assert!(output.contains("fullHierarchyRecordView: false"));
    }

    #[test]
    fn test_pretty_debug_matches_display() {
        let value = json!({"search": true});
        assert_eq!(format!("{:?}", Pretty(&value)), format!("{}", Pretty(&value)));
    }
}
