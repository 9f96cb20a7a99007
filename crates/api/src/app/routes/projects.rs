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
use campushub_community::Project;
use campushub_core::ResourceId;
use campushub_search::SearchQuery;
use campushub_store::InMemoryStore;

use crate::app::{dto, errors};
use crate::context::PrincipalContext;

pub fn public_router() -> Router {
    Router::new()
        .route("/", get(list_projects))
        .route("/:id", get(get_project))
}

pub fn protected_router() -> Router {
    Router::new()
        .route("/", post(create_project))
        .route("/search", get(search_projects))
        .route("/:id", put(update_project).delete(delete_project))
}

pub async fn list_projects(Extension(store): Extension<Arc<InMemoryStore>>) -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "items": store.list_projects() })))
}

pub async fn get_project(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_resource_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match store.project(id) {
        Some(p) => (StatusCode::OK, Json(p)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "project not found"),
    }
}

pub async fn create_project(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Extension(PrincipalContext(principal)): Extension<PrincipalContext>,
    Json(body): Json<dto::ProjectRequest>,
) -> axum::response::Response {
    if let Err(resp) = errors::require_nonempty("name", &body.name) {
        return resp;
    }

    let project = Project {
        id: ResourceId::new(),
        name: body.name,
        description: body.description,
        category: body.category,
        created_by: principal.id,
        created_at: Utc::now(),
        tags: body.tags,
    };
    store.insert_project(project.clone());

    (StatusCode::CREATED, Json(project)).into_response()
}

pub async fn update_project(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Extension(PrincipalContext(principal)): Extension<PrincipalContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::ProjectRequest>,
) -> axum::response::Response {
    let id = match errors::parse_resource_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Some(existing) = store.project(id) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "project not found");
    };
    if let Err(e) = check_ownership(&principal, &existing) {
        return errors::auth_error_to_response(e);
    }
    if let Err(resp) = errors::require_nonempty("name", &body.name) {
        return resp;
    }

    let updated = Project {
        id,
        name: body.name,
        description: body.description,
        category: body.category,
        created_by: existing.created_by,
        created_at: existing.created_at,
        tags: body.tags,
    };
    store.update_project(updated.clone());

    (StatusCode::OK, Json(updated)).into_response()
}

pub async fn delete_project(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Extension(PrincipalContext(principal)): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_resource_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Some(existing) = store.project(id) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "project not found");
    };
    if let Err(e) = check_ownership(&principal, &existing) {
        return errors::auth_error_to_response(e);
    }

    store.remove_project(id);
    StatusCode::NO_CONTENT.into_response()
}

pub async fn search_projects(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Query(params): Query<dto::SearchParams>,
) -> impl IntoResponse {
    let query = SearchQuery::new(params.q);
    let hits = if query.is_empty() {
        vec![]
    } else {
        store.search_projects(&query.normalized)
    };
    (StatusCode::OK, Json(json!({ "data": hits })))
}
