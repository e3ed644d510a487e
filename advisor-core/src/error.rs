use thiserror::Error;

/// Why a weather fetch failed, classified by cause.
///
/// The variants keep the underlying error around for logging; what the user
/// sees is always one of the fixed strings from [`FetchError::user_message`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("city not found")]
    NotFound,

    #[error("api key rejected by the weather service")]
    Unauthorized,

    #[error("weather service returned status {0}")]
    Upstream(u16),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed weather response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl FetchError {
    /// The single human-readable line shown for this failure. No distinction
    /// is made between transient and permanent causes beyond 404/401.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::NotFound => "City not found. Please check the spelling.",
            FetchError::Unauthorized => "API key invalid. Please check it.",
            FetchError::Upstream(_) | FetchError::Transport(_) | FetchError::Malformed(_) => {
                "Could not fetch weather data. Please try again."
            }
        }
    }
}
