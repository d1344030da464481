//! The default concrete error value

use crate::ErrorConcept;
use std::fmt;

/// A plain error value: a category label, a message, and developer notes.
///
/// `details` is the canonical text; [`to_display_string`](ErrorConcept::to_display_string)
/// and `Display` return it verbatim and never mix in the other two fields.
///
/// # Example
///
/// ```rust
/// use keel_error::BasicError;
///
/// let err = BasicError::default()
///     .with_details("disk full")
///     .with_info("errno=28");
///
/// assert_eq!(err.error_type(), "");
/// assert_eq!(err.details(), "disk full");
/// assert_eq!(err.debug_info(), "errno=28");
/// assert_eq!(err.to_string(), "disk full");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BasicError {
    error_type: String,
    details: String,
    debug_info: String,
}

impl BasicError {
    /// Create an error with a category label and a message
    pub fn new(error_type: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            details: details.into(),
            debug_info: String::new(),
        }
    }

    /// Create an error carrying only a message
    pub fn msg(details: impl Into<String>) -> Self {
        Self {
            details: details.into(),
            ..Self::default()
        }
    }

    /// Capture a foreign error: its `Display` becomes the details and its
    /// `Debug` the debug info. The source itself is not retained.
    pub fn from_std_error<E>(err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self {
            error_type: String::new(),
            details: err.to_string(),
            debug_info: format!("{:?}", err),
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Get the category label
    pub fn error_type(&self) -> &str {
        &self.error_type
    }

    /// Get the message
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Get the developer diagnostics
    pub fn debug_info(&self) -> &str {
        &self.debug_info
    }

    // =========================================================================
    // Builders (chainable)
    // =========================================================================

    /// Replace the message
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    /// Replace the developer diagnostics
    pub fn with_info(mut self, debug_info: impl Into<String>) -> Self {
        self.debug_info = debug_info.into();
        self
    }

    /// Replace the category label
    pub fn with_type(mut self, error_type: impl Into<String>) -> Self {
        self.error_type = error_type.into();
        self
    }

    // =========================================================================
    // In-place mutation
    // =========================================================================

    pub fn set_details(&mut self, details: impl Into<String>) -> &mut Self {
        self.details = details.into();
        self
    }

    pub fn set_info(&mut self, debug_info: impl Into<String>) -> &mut Self {
        self.debug_info = debug_info.into();
        self
    }
}

impl ErrorConcept for BasicError {
    fn error_type(&self) -> &str {
        &self.error_type
    }

    fn details(&self) -> &str {
        &self.details
    }

    fn debug_info(&self) -> &str {
        &self.debug_info
    }
}

// =============================================================================
// Display - the details, nothing else
// =============================================================================

impl fmt::Display for BasicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.details)
    }
}

// =============================================================================
// Debug - every field, multi-line
// =============================================================================

impl fmt::Debug for BasicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.error_type.is_empty() {
            writeln!(f, "BasicError")?;
        } else {
            writeln!(f, "BasicError [{}]", self.error_type)?;
        }

        if !self.details.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Details: {}", self.details)?;
        }

        if !self.debug_info.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Debug info: {}", self.debug_info)?;
        }

        Ok(())
    }
}

impl std::error::Error for BasicError {}

// =============================================================================
// Conversions from foreign errors
// =============================================================================

impl From<&str> for BasicError {
    fn from(details: &str) -> Self {
        Self::msg(details)
    }
}

impl From<String> for BasicError {
    fn from(details: String) -> Self {
        Self::msg(details)
    }
}

impl From<std::io::Error> for BasicError {
    fn from(err: std::io::Error) -> Self {
        Self::from_std_error(&err).with_type(format!("{:?}", err.kind()))
    }
}

impl From<anyhow::Error> for BasicError {
    fn from(err: anyhow::Error) -> Self {
        // `{:?}` on anyhow renders the whole cause chain
        Self::msg(err.to_string()).with_info(format!("{:?}", err))
    }
}
