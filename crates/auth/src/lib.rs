//! `campushub-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: the gate
//! resolves a caller identity from a bearer credential through injected
//! verifier/lookup seams, and every authorization decision is a pure check.

pub mod authorize;
pub mod claims;
pub mod error;
pub mod gate;
pub mod ownership;
pub mod principal;
pub mod roles;
pub mod token;

pub use authorize::{authorize_roles, check_ownership};
pub use claims::{AuthClaims, validate_claims};
pub use error::AuthError;
pub use gate::{AuthzGate, PrincipalSource};
pub use ownership::{Owned, OwnershipField};
pub use principal::Principal;
pub use roles::Role;
pub use token::{Hs256TokenVerifier, TokenVerifier};

pub use campushub_core::PrincipalId;
