use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use campushub_store::InMemoryStore;

use crate::app::errors;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new().route("/me", get(me))
}

/// The caller's own account record (secret fields never serialize).
pub async fn me(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Extension(PrincipalContext(principal)): Extension<PrincipalContext>,
) -> axum::response::Response {
    match store.user(principal.id) {
        Some(account) => (StatusCode::OK, Json(account)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "account not found"),
    }
}
