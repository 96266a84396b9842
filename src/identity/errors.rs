//! Provider error codes and their user-facing messages.

use super::validation::ValidationError;

pub const USER_NOT_FOUND: &str = "auth/user-not-found";
pub const WRONG_PASSWORD: &str = "auth/wrong-password";
pub const EMAIL_ALREADY_IN_USE: &str = "auth/email-already-in-use";
pub const WEAK_PASSWORD: &str = "auth/weak-password";
pub const INVALID_EMAIL: &str = "auth/invalid-email";
pub const TOO_MANY_REQUESTS: &str = "auth/too-many-requests";
pub const NETWORK_REQUEST_FAILED: &str = "auth/network-request-failed";

pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

static FRIENDLY_MESSAGES: &[(&str, &str)] = &[
    (USER_NOT_FOUND, "No account found with this email."),
    (WRONG_PASSWORD, "Incorrect password. Please try again."),
    (EMAIL_ALREADY_IN_USE, "This email is already registered. Please sign in."),
    (WEAK_PASSWORD, "Password must be at least 6 characters."),
    (INVALID_EMAIL, "Please enter a valid email address."),
    (TOO_MANY_REQUESTS, "Too many failed attempts. Please try again later."),
    (NETWORK_REQUEST_FAILED, "Network error. Check your connection."),
];

/// Human-readable message for a provider error code. Unknown codes get the
/// fallback message.
pub fn friendly_message(code: &str) -> &'static str {
    FRIENDLY_MESSAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, message)| *message)
        .unwrap_or(FALLBACK_MESSAGE)
}

/// Failure reported by the identity provider or document store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct ProviderError {
    pub code: String,
    /// Provider's own diagnostic text; not shown to users
    pub message: String,
}

impl ProviderError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn friendly_message(&self) -> &'static str {
        friendly_message(&self.code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Rejected before reaching the provider
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("identity provider rejected the request ({})", .0.code)]
    Provider(#[from] ProviderError),
}

impl AuthError {
    /// Message to show the user
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Validation(e) => e.to_string(),
            AuthError::Provider(e) => e.friendly_message().to_string(),
        }
    }
}
