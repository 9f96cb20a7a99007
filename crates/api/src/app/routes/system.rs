use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::context::PrincipalContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn whoami(
    Extension(PrincipalContext(principal)): Extension<PrincipalContext>,
) -> impl IntoResponse {
    Json(json!({
        "principal_id": principal.id.to_string(),
        "role": principal.role.as_str(),
    }))
}
