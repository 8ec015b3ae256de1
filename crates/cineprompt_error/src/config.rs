//! Scene configuration error types.

/// Rejection of an unusable scene configuration, with source location.
///
/// Raised before any model call is made, e.g. when the subject field is
/// blank or whitespace-only.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Invalid scene configuration: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What made the configuration unusable
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use cineprompt_error::ConfigError;
    ///
    /// let err = ConfigError::new("generation requires a non-empty subject");
    /// assert!(format!("{err}").starts_with("Invalid scene configuration"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
