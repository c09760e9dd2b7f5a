#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A required descriptive field is missing or blank.
    #[error("Invalid submission: {0}")]
    InvalidSubmission(String),

    /// The uploaded file violates the type or size policy.
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    /// The presented operator credential does not match.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// A guarded operation was attempted without an authenticated session.
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// Lookup miss. Carries only the entity name so responses stay
    /// constant-shape regardless of what was looked up.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// The token-collision retry budget was exhausted.
    #[error("Token space exhausted after repeated collisions")]
    StorageExhausted,

    #[error("Internal error: {0}")]
    Internal(String),
}
