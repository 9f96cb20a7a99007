use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use campushub_auth::AuthError;
use campushub_core::ResourceId;

/// Map a gate/authorization failure onto the transport.
///
/// Every unauthenticated variant becomes 401 with the same envelope, so a
/// probing client cannot distinguish "no such account" from "bad token".
pub fn auth_error_to_response(err: AuthError) -> axum::response::Response {
    if err.is_unauthenticated() {
        return json_error(StatusCode::UNAUTHORIZED, "unauthenticated", err.to_string());
    }
    match err {
        AuthError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        other => json_error(StatusCode::FORBIDDEN, "forbidden", other.to_string()),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn parse_resource_id(s: &str) -> Result<ResourceId, axum::response::Response> {
    s.parse().map_err(|_| {
        json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid resource id")
    })
}

pub fn require_nonempty(
    field: &'static str,
    value: &str,
) -> Result<(), axum::response::Response> {
    if value.trim().is_empty() {
        Err(json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            format!("{field} must not be empty"),
        ))
    } else {
        Ok(())
    }
}
