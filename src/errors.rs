use thiserror::Error;

/// Request-scoped failures. Neither kind is fatal to the hosting process.
#[derive(Debug, Error)]
pub enum BriefError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Summarization engine unavailable: {0}")]
    EngineUnavailable(String),
}

impl BriefError {
    /// HTTP status the presentation layer answers with.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            BriefError::InvalidInput(_) => 400,
            BriefError::EngineUnavailable(_) => 503,
        }
    }

    /// Message shown to the person who submitted the form.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            BriefError::InvalidInput(_) => {
                "Please paste the person's profile text (About / Experience / Headline) and try again."
            }
            BriefError::EngineUnavailable(_) => {
                "The summarization service is temporarily unavailable. Please try again in a moment."
            }
        }
    }
}

impl From<reqwest::Error> for BriefError {
    fn from(error: reqwest::Error) -> Self {
        BriefError::EngineUnavailable(error.to_string())
    }
}
