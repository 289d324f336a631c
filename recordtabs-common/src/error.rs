//! Error severity shared by the record tab crates
//!
//! Each crate defines its own `thiserror` error enum and classifies its
//! variants through [`Severity`], so hosts can pick a log level or decide
//! whether to hide a tab instead of failing the page.

/// Severity levels for error classification
///
/// - **Warning**: something is off but the page can render normally.
/// - **Error**: the operation failed; the tab should degrade or hide itself.
/// - **Critical**: the host cannot continue serving the record view.
///
/// ```rust
/// use recordtabs_common::ErrorSeverity;
///
/// let missing_markup = ErrorSeverity::Error;
/// assert_ne!(missing_markup, ErrorSeverity::Critical);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Potential issue but operation can proceed
    Warning,

    /// Operation failed but the host can continue
    Error,

    /// Host cannot continue, requires immediate attention
    Critical,
}

/// Trait for error types that have severity levels
///
/// ```rust
/// use recordtabs_common::{ErrorSeverity, Severity};
///
/// #[derive(Debug)]
/// enum RenderFailure {
///     CacheCorrupted,
///     TreeMissing,
/// }
///
/// impl Severity for RenderFailure {
///     fn severity(&self) -> ErrorSeverity {
///         match self {
///             RenderFailure::CacheCorrupted => ErrorSeverity::Critical,
///             RenderFailure::TreeMissing => ErrorSeverity::Error,
///         }
///     }
/// }
///
/// assert_eq!(RenderFailure::TreeMissing.severity(), ErrorSeverity::Error);
/// ```
pub trait Severity {
    /// Get the severity level of this error
    fn severity(&self) -> ErrorSeverity;
}
