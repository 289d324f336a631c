//! # Record Tabs Common
//!
//! Foundational pieces shared by the record tab crates:
//!
//! - [`error`] - severity classification implemented by every error type
//! - [`logging`] - helpers for formatting values inside tracing output
//! - [`truthy`] - truthiness of loosely typed configuration and settings values

pub mod error;
pub mod logging;
pub mod truthy;

pub use error::{ErrorSeverity, Severity};
pub use logging::Pretty;
pub use truthy::is_truthy;
