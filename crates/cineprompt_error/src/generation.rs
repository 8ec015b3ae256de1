//! Generation orchestrator failure type.

/// Uniform failure surfaced when a generation call could not reach the model.
///
/// Oracle-level detail is deliberately not carried here: the orchestrator
/// logs the underlying fault and hands the caller a single communication
/// failure it can show the user. The refinement path never produces this
/// type; refinement faults are absorbed at the orchestrator boundary.
///
/// # Examples
///
/// ```
/// use cineprompt_error::GenerationFailure;
///
/// let err = GenerationFailure::new();
/// assert!(format!("{}", err).contains("Failed to communicate"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Failed to communicate with AI service at line {} in {}", line, file)]
pub struct GenerationFailure {
    /// Line number where the failure was recorded
    pub line: u32,
    /// File where the failure was recorded
    pub file: &'static str,
}

impl GenerationFailure {
    /// Create a new GenerationFailure at the current location.
    #[track_caller]
    pub fn new() -> Self {
        let location = std::panic::Location::caller();
        Self {
            line: location.line(),
            file: location.file(),
        }
    }
}

impl Default for GenerationFailure {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}
