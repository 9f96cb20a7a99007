use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use serde_json::json;

use campushub_auth::check_ownership;
use campushub_community::CommunityEvent;
use campushub_core::ResourceId;
use campushub_search::SearchQuery;
use campushub_store::InMemoryStore;

use crate::app::{dto, errors};
use crate::context::PrincipalContext;

pub fn public_router() -> Router {
    Router::new()
        .route("/", get(list_events))
        .route("/:id", get(get_event))
}

pub fn protected_router() -> Router {
    Router::new()
        .route("/", post(create_event))
        .route("/search", get(search_events))
        .route("/:id", put(update_event).delete(delete_event))
}

pub async fn list_events(
    Extension(store): Extension<Arc<InMemoryStore>>,
) -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "items": store.list_events() })))
}

pub async fn get_event(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_resource_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match store.event(id) {
        Some(event) => (StatusCode::OK, Json(event)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "event not found"),
    }
}

pub async fn create_event(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Extension(PrincipalContext(principal)): Extension<PrincipalContext>,
    Json(body): Json<dto::EventRequest>,
) -> axum::response::Response {
    if let Err(resp) = errors::require_nonempty("title", &body.title) {
        return resp;
    }

    let event = CommunityEvent {
        id: ResourceId::new(),
        title: body.title,
        description: body.description,
        location: body.location,
        category: body.category,
        starts_at: body.starts_at,
        owner: principal.id,
        tags: body.tags,
    };
    store.insert_event(event.clone());

    (StatusCode::CREATED, Json(event)).into_response()
}

pub async fn update_event(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Extension(PrincipalContext(principal)): Extension<PrincipalContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::EventRequest>,
) -> axum::response::Response {
    let id = match errors::parse_resource_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Some(existing) = store.event(id) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "event not found");
    };
    if let Err(e) = check_ownership(&principal, &existing) {
        return errors::auth_error_to_response(e);
    }
    if let Err(resp) = errors::require_nonempty("title", &body.title) {
        return resp;
    }

    let updated = CommunityEvent {
        id,
        title: body.title,
        description: body.description,
        location: body.location,
        category: body.category,
        starts_at: body.starts_at,
        owner: existing.owner,
        tags: body.tags,
    };
    store.update_event(updated.clone());

    (StatusCode::OK, Json(updated)).into_response()
}

pub async fn delete_event(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Extension(PrincipalContext(principal)): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_resource_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Some(existing) = store.event(id) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "event not found");
    };
    if let Err(e) = check_ownership(&principal, &existing) {
        return errors::auth_error_to_response(e);
    }

    store.remove_event(id);
    StatusCode::NO_CONTENT.into_response()
}

pub async fn search_events(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Query(params): Query<dto::SearchParams>,
) -> impl IntoResponse {
    let query = SearchQuery::new(params.q);
    let hits = if query.is_empty() {
        vec![]
    } else {
        store.search_events(&query.normalized)
    };
    (StatusCode::OK, Json(json!({ "data": hits })))
}
