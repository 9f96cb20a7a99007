use thiserror::Error;

/// Authentication/authorization failure taxonomy.
///
/// The unauthenticated variants are terminal for a request (the handler is
/// never invoked); they all map to HTTP 401 at the transport boundary,
/// `Forbidden` to 403 and `NotFound` to 404.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header was presented.
    #[error("unauthenticated: no token")]
    MissingToken,

    /// An `Authorization` header was presented but the scheme was not exactly
    /// `Bearer ` followed by a non-empty token.
    ///
    /// The platform this replaces let such requests fall through without ever
    /// responding; rejecting them explicitly is a deliberate behavior change.
    #[error("unauthenticated: malformed authorization scheme")]
    MalformedScheme,

    /// The token failed signature or expiry verification.
    #[error("unauthenticated: invalid token")]
    InvalidToken,

    /// The token verified but its subject no longer exists.
    #[error("unauthenticated: principal not found")]
    PrincipalNotFound,

    /// The token verified but the account has been deactivated.
    #[error("unauthenticated: account deactivated")]
    Deactivated,

    /// A role or ownership check failed.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// The resource under an ownership check does not exist.
    #[error("not found")]
    NotFound,
}

impl AuthError {
    /// Whether this failure belongs to the unauthenticated (401) family.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            AuthError::MissingToken
                | AuthError::MalformedScheme
                | AuthError::InvalidToken
                | AuthError::PrincipalNotFound
                | AuthError::Deactivated
        )
    }
}
