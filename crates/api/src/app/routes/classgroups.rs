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

use campushub_auth::{Role, authorize_roles, check_ownership};
use campushub_community::ClassGroup;
use campushub_core::ResourceId;
use campushub_search::SearchQuery;
use campushub_store::InMemoryStore;

use crate::app::{dto, errors};
use crate::context::{OptionalPrincipal, PrincipalContext};

pub fn public_router() -> Router {
    Router::new()
        .route("/", get(list_class_groups))
        .route("/:id", get(get_class_group))
}

pub fn protected_router() -> Router {
    Router::new()
        .route("/", post(create_class_group))
        .route("/search", get(search_class_groups))
        .route("/:id", put(update_class_group).delete(delete_class_group))
}

/// Listing is roster-scoped: anonymous callers and outsiders see nothing.
pub async fn list_class_groups(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Extension(OptionalPrincipal(viewer)): Extension<OptionalPrincipal>,
) -> impl IntoResponse {
    let items: Vec<ClassGroup> = match viewer {
        Some(p) => store
            .list_class_groups()
            .into_iter()
            .filter(|g| g.is_visible_to(p.id))
            .collect(),
        None => vec![],
    };
    (StatusCode::OK, Json(json!({ "items": items })))
}

/// A group a caller may not see reads as absent, not as forbidden.
pub async fn get_class_group(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Extension(OptionalPrincipal(viewer)): Extension<OptionalPrincipal>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_resource_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match store.class_group(id) {
        Some(g) if viewer.is_some_and(|p| g.is_visible_to(p.id)) => {
            (StatusCode::OK, Json(g)).into_response()
        }
        _ => errors::json_error(StatusCode::NOT_FOUND, "not_found", "class group not found"),
    }
}

pub async fn create_class_group(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Extension(PrincipalContext(principal)): Extension<PrincipalContext>,
    Json(body): Json<dto::ClassGroupRequest>,
) -> axum::response::Response {
    if let Err(e) = authorize_roles(&principal, &[Role::Faculty, Role::Admin]) {
        return errors::auth_error_to_response(e);
    }
    if let Err(resp) = errors::require_nonempty("name", &body.name) {
        return resp;
    }

    let group = ClassGroup {
        id: ResourceId::new(),
        name: body.name,
        description: body.description,
        course_code: body.course_code,
        leader: principal.id,
        enrolled: body.enrolled,
        created_at: Utc::now(),
    };
    store.insert_class_group(group.clone());

    (StatusCode::CREATED, Json(group)).into_response()
}

pub async fn update_class_group(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Extension(PrincipalContext(principal)): Extension<PrincipalContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::ClassGroupRequest>,
) -> axum::response::Response {
    let id = match errors::parse_resource_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Some(existing) = store.class_group(id) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "class group not found");
    };
    if let Err(e) = check_ownership(&principal, &existing) {
        return errors::auth_error_to_response(e);
    }
    if let Err(resp) = errors::require_nonempty("name", &body.name) {
        return resp;
    }

    let updated = ClassGroup {
        id,
        name: body.name,
        description: body.description,
        course_code: body.course_code,
        leader: existing.leader,
        enrolled: body.enrolled,
        created_at: existing.created_at,
    };
    store.update_class_group(updated.clone());

    (StatusCode::OK, Json(updated)).into_response()
}

pub async fn delete_class_group(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Extension(PrincipalContext(principal)): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_resource_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Some(existing) = store.class_group(id) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "class group not found");
    };
    if let Err(e) = check_ownership(&principal, &existing) {
        return errors::auth_error_to_response(e);
    }

    store.remove_class_group(id);
    StatusCode::NO_CONTENT.into_response()
}

pub async fn search_class_groups(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Extension(PrincipalContext(principal)): Extension<PrincipalContext>,
    Query(params): Query<dto::SearchParams>,
) -> impl IntoResponse {
    let query = SearchQuery::new(params.q);
    let hits = if query.is_empty() {
        vec![]
    } else {
        store.search_class_groups(&query.normalized, Some(principal.id))
    };
    (StatusCode::OK, Json(json!({ "data": hits })))
}
