use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use campushub_core::PrincipalId;

use crate::error::AuthError;

/// Token claims model (transport-agnostic).
///
/// This is the minimal set of claims CampusHub expects once a token has been
/// decoded by whatever credential primitive is in use. Timestamps are unix
/// seconds on the wire (the usual `iat`/`exp` convention).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthClaims {
    /// Subject / principal identifier.
    pub sub: PrincipalId,

    /// Issued-at timestamp (unix seconds).
    pub iat: i64,

    /// Expiration timestamp (unix seconds).
    pub exp: i64,
}

impl AuthClaims {
    pub fn new(sub: PrincipalId, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.iat, 0)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// Deterministically validate token claims against an injected clock.
///
/// Note: this validates the *claims* only. Signature verification lives in
/// [`crate::token`]; any failure here surfaces as the same `InvalidToken`
/// outcome — an expired credential is rejected, never repaired.
pub fn validate_claims(claims: &AuthClaims, now: DateTime<Utc>) -> Result<(), AuthError> {
    if claims.exp <= claims.iat {
        return Err(AuthError::InvalidToken);
    }
    if now.timestamp() < claims.iat {
        return Err(AuthError::InvalidToken);
    }
    if now.timestamp() >= claims.exp {
        return Err(AuthError::InvalidToken);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn claims(issued_offset: i64, expires_offset: i64, now: DateTime<Utc>) -> AuthClaims {
        AuthClaims::new(
            PrincipalId::new(),
            now + Duration::seconds(issued_offset),
            now + Duration::seconds(expires_offset),
        )
    }

    #[test]
    fn valid_window_passes() {
        let now = Utc::now();
        assert!(validate_claims(&claims(-60, 60, now), now).is_ok());
    }

    #[test]
    fn expired_token_rejected() {
        let now = Utc::now();
        let result = validate_claims(&claims(-120, -60, now), now);
        assert_eq!(result, Err(AuthError::InvalidToken));
    }

    #[test]
    fn not_yet_valid_rejected() {
        let now = Utc::now();
        let result = validate_claims(&claims(60, 120, now), now);
        assert_eq!(result, Err(AuthError::InvalidToken));
    }

    #[test]
    fn inverted_window_rejected() {
        let now = Utc::now();
        let result = validate_claims(&claims(60, -60, now), now);
        assert_eq!(result, Err(AuthError::InvalidToken));
    }
}
