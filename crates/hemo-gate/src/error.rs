/// Errors that can occur during gate evaluation.
///
/// Built-in stages never fail internally (they only pass or reject), but
/// the stage contract allows custom stages to surface evaluation errors.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// A stage returned an unexpected error.
    #[error("stage error in '{stage}': {message}")]
    StageError { stage: String, message: String },

    /// Configuration is invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

impl GateError {
    /// Create a stage error with a name and message.
    pub fn stage(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StageError {
            stage: stage.into(),
            message: message.into(),
        }
    }
}
