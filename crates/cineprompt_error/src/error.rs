//! Top-level error wrapper types.

use crate::{ConfigError, GeminiError, GenerationFailure};

/// This is the foundation error enum for the cineprompt workspace.
///
/// # Examples
///
/// ```
/// use cineprompt_error::{CinepromptError, ConfigError};
///
/// let config_err = ConfigError::new("missing field");
/// let err: CinepromptError = config_err.into();
/// assert!(format!("{}", err).contains("Invalid scene configuration"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CinepromptErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini transport or protocol error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Uniform generation failure surfaced to the caller
    #[from(GenerationFailure)]
    Generation(GenerationFailure),
}

/// Cineprompt error with kind discrimination.
///
/// # Examples
///
/// ```
/// use cineprompt_error::{CinepromptResult, ConfigError};
///
/// fn might_fail() -> CinepromptResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Cineprompt Error: {}", _0)]
pub struct CinepromptError(Box<CinepromptErrorKind>);

impl CinepromptError {
    /// Create a new error from a kind.
    pub fn new(kind: CinepromptErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CinepromptErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to CinepromptErrorKind
impl<T> From<T> for CinepromptError
where
    T: Into<CinepromptErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for cineprompt operations.
///
/// # Examples
///
/// ```
/// use cineprompt_error::{CinepromptResult, GenerationFailure};
///
/// fn generate() -> CinepromptResult<String> {
///     Err(GenerationFailure::new())?
/// }
/// ```
pub type CinepromptResult<T> = std::result::Result<T, CinepromptError>;
