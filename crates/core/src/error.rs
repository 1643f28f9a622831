//! Error types shared across the TechPoa frontend crates

/// Standard result type for session and auth operations
pub type AuthResult<T> = std::result::Result<T, AuthError>;

/// Errors surfaced by the session store and the remote auth boundary
///
/// Display strings double as the inline messages shown on forms, so they are
/// written for end users rather than for logs.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, thiserror::Error)]
pub enum AuthError {
    /// The email/password pair was rejected by the backend.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Signup was attempted with an address that already has an account.
    #[error("An account with this email already exists")]
    EmailAlreadyRegistered,

    /// A password-reset or email-verification token was rejected.
    #[error("This link is invalid or has expired")]
    InvalidOrExpiredToken,

    /// An operation that needs a session ran without one.
    #[error("You are not signed in")]
    NotAuthenticated,

    /// Persisted session data failed to decode. The store recovers by
    /// clearing storage, so callers normally never see this variant.
    #[error("Stored session data is corrupt")]
    StorageCorrupt,

    /// Network-level failure talking to the backend.
    #[error("Network error: {0}")]
    Transport(String),
}

impl AuthError {
    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// True for failures the user can fix by correcting their input.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials | Self::EmailAlreadyRegistered | Self::InvalidOrExpiredToken
        )
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(_: serde_json::Error) -> Self {
        Self::StorageCorrupt
    }
}
