use thiserror::Error;

/// Failure kinds surfaced by the session component and its collaborators.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("validation failed: {0}")]
    ValidationFailed(String),
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl Error {
    /// Message that is safe to show to the person at the keyboard.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials => "Invalid email or password.".to_string(),
            Self::ValidationFailed(message) => message.clone(),
            Self::StorageUnavailable(_) => {
                "Your session could not be saved on this device.".to_string()
            }
        }
    }
}
