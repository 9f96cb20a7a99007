use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use campushub_auth::AuthzGate;

use crate::app::errors;
use crate::context::{OptionalPrincipal, PrincipalContext};

#[derive(Clone)]
pub struct AuthState {
    pub gate: Arc<AuthzGate>,
}

/// Strict gate: the handler only runs for an authenticated, active caller.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let authorization = match authorization_header(req.headers()) {
        Ok(value) => value,
        Err(resp) => return resp,
    };

    match state.gate.authenticate(authorization.as_deref(), Utc::now()) {
        Ok(principal) => {
            req.extensions_mut().insert(PrincipalContext(principal));
            next.run(req).await
        }
        Err(e) => errors::auth_error_to_response(e),
    }
}

/// Lenient gate: any credential failure degrades to an anonymous caller.
pub async fn optional_auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let principal = authorization_header(req.headers())
        .ok()
        .and_then(|value| state.gate.authenticate_optional(value.as_deref(), Utc::now()));

    req.extensions_mut().insert(OptionalPrincipal(principal));
    next.run(req).await
}

/// Read the `Authorization` header value, if any.
///
/// A header that is not valid UTF-8 cannot carry a well-formed bearer
/// credential, so it is rejected the same way as a bad scheme.
fn authorization_header(headers: &HeaderMap) -> Result<Option<String>, Response> {
    match headers.get(axum::http::header::AUTHORIZATION) {
        None => Ok(None),
        Some(value) => match value.to_str() {
            Ok(s) => Ok(Some(s.to_string())),
            Err(_) => Err(errors::json_error(
                StatusCode::UNAUTHORIZED,
                "unauthenticated",
                "malformed authorization header",
            )),
        },
    }
}
