use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use chrono::Utc;
use serde_json::json;

use campushub_auth::check_ownership;
use campushub_community::Team;
use campushub_core::ResourceId;
use campushub_search::SearchQuery;
use campushub_store::InMemoryStore;

use crate::app::{dto, errors};
use crate::context::PrincipalContext;

pub fn public_router() -> Router {
    Router::new()
        .route("/", get(list_teams))
        .route("/:id", get(get_team))
}

pub fn protected_router() -> Router {
    Router::new()
        .route("/", post(create_team))
        .route("/search", get(search_teams))
        .route("/:id", put(update_team).delete(delete_team))
}

pub async fn list_teams(Extension(store): Extension<Arc<InMemoryStore>>) -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "items": store.list_teams() })))
}

pub async fn get_team(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_resource_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match store.team(id) {
        Some(t) => (StatusCode::OK, Json(t)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "team not found"),
    }
}

pub async fn create_team(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Extension(PrincipalContext(principal)): Extension<PrincipalContext>,
    Json(body): Json<dto::TeamRequest>,
) -> axum::response::Response {
    if let Err(resp) = errors::require_nonempty("name", &body.name) {
        return resp;
    }

    let team = Team {
        id: ResourceId::new(),
        name: body.name,
        description: body.description,
        leader: principal.id,
        members: body.members,
        created_at: Utc::now(),
    };
    store.insert_team(team.clone());

    (StatusCode::CREATED, Json(team)).into_response()
}

pub async fn update_team(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Extension(PrincipalContext(principal)): Extension<PrincipalContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::TeamRequest>,
) -> axum::response::Response {
    let id = match errors::parse_resource_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Some(existing) = store.team(id) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "team not found");
    };
    if let Err(e) = check_ownership(&principal, &existing) {
        return errors::auth_error_to_response(e);
    }
    if let Err(resp) = errors::require_nonempty("name", &body.name) {
        return resp;
    }

    let updated = Team {
        id,
        name: body.name,
        description: body.description,
        leader: existing.leader,
        members: body.members,
        created_at: existing.created_at,
    };
    store.update_team(updated.clone());

    (StatusCode::OK, Json(updated)).into_response()
}

pub async fn delete_team(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Extension(PrincipalContext(principal)): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_resource_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Some(existing) = store.team(id) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "team not found");
    };
    if let Err(e) = check_ownership(&principal, &existing) {
        return errors::auth_error_to_response(e);
    }

    store.remove_team(id);
    StatusCode::NO_CONTENT.into_response()
}

pub async fn search_teams(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Query(params): Query<dto::SearchParams>,
) -> impl IntoResponse {
    let query = SearchQuery::new(params.q);
    let hits = if query.is_empty() {
        vec![]
    } else {
        store.search_teams(&query.normalized)
    };
    (StatusCode::OK, Json(json!({ "data": hits })))
}
