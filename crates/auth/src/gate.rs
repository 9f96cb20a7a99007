//! Identity resolution for a single request.
//!
//! Per request the gate moves `Unauthenticated -> Verifying -> {Authenticated
//! | Rejected}`: extract the bearer credential, verify it, look the subject up
//! once, and require the account to be active. The resulting [`Principal`] is
//! immutable for the request's lifetime and never persisted.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use campushub_core::PrincipalId;

use crate::error::AuthError;
use crate::principal::Principal;
use crate::token::TokenVerifier;

/// One-shot lookup of a principal record by id.
///
/// Implementations must strip secret fields (password hashes etc.) before
/// constructing the [`Principal`].
pub trait PrincipalSource: Send + Sync {
    fn find_principal(&self, id: PrincipalId) -> Option<Principal>;
}

/// The request-interception gate: credential in, principal out.
pub struct AuthzGate {
    verifier: Arc<dyn TokenVerifier>,
    principals: Arc<dyn PrincipalSource>,
}

impl AuthzGate {
    pub fn new(verifier: Arc<dyn TokenVerifier>, principals: Arc<dyn PrincipalSource>) -> Self {
        Self {
            verifier,
            principals,
        }
    }

    /// Resolve the caller identity from an `Authorization` header value.
    ///
    /// Fails with the appropriate unauthenticated variant if the header is
    /// absent, the scheme is malformed, the token does not verify, the
    /// subject no longer exists, or the account is deactivated.
    pub fn authenticate(
        &self,
        authorization: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Principal, AuthError> {
        let header = authorization.ok_or(AuthError::MissingToken)?;
        let token = extract_bearer(header)?;
        let claims = self.verifier.verify(token, now)?;

        let principal = self
            .principals
            .find_principal(claims.sub)
            .ok_or(AuthError::PrincipalNotFound)?;

        if !principal.is_active {
            return Err(AuthError::Deactivated);
        }

        Ok(principal)
    }

    /// Same pipeline, but every failure resolves to an anonymous caller.
    ///
    /// Used by read endpoints that personalize output while remaining
    /// accessible without a credential.
    pub fn authenticate_optional(
        &self,
        authorization: Option<&str>,
        now: DateTime<Utc>,
    ) -> Option<Principal> {
        self.authenticate(authorization, now).ok()
    }
}

/// Extract the token from a `Bearer` header value, byte-exactly.
///
/// The scheme prefix must be exactly `Bearer ` (case-sensitive, one space)
/// followed by a non-empty token; the token is returned verbatim.
fn extract_bearer(header: &str) -> Result<&str, AuthError> {
    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MalformedScheme)?;

    if token.is_empty() {
        return Err(AuthError::MalformedScheme);
    }

    Ok(token)
}
