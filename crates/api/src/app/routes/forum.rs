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
use campushub_community::ForumPost;
use campushub_core::ResourceId;
use campushub_search::SearchQuery;
use campushub_store::InMemoryStore;

use crate::app::{dto, errors};
use crate::context::PrincipalContext;

pub fn public_router() -> Router {
    Router::new()
        .route("/", get(list_posts))
        .route("/:id", get(get_post))
}

pub fn protected_router() -> Router {
    Router::new()
        .route("/", post(create_post))
        .route("/search", get(search_posts))
        .route("/:id", put(update_post).delete(delete_post))
}

pub async fn list_posts(Extension(store): Extension<Arc<InMemoryStore>>) -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "items": store.list_posts() })))
}

pub async fn get_post(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_resource_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match store.post(id) {
        Some(p) => (StatusCode::OK, Json(p)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "post not found"),
    }
}

pub async fn create_post(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Extension(PrincipalContext(principal)): Extension<PrincipalContext>,
    Json(body): Json<dto::PostRequest>,
) -> axum::response::Response {
    if let Err(resp) = errors::require_nonempty("title", &body.title) {
        return resp;
    }

    let post = ForumPost {
        id: ResourceId::new(),
        title: body.title,
        content: body.content,
        category: body.category,
        author: principal.id,
        posted_at: Utc::now(),
        tags: body.tags,
    };
    store.insert_post(post.clone());

    (StatusCode::CREATED, Json(post)).into_response()
}

pub async fn update_post(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Extension(PrincipalContext(principal)): Extension<PrincipalContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::PostRequest>,
) -> axum::response::Response {
    let id = match errors::parse_resource_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Some(existing) = store.post(id) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "post not found");
    };
    if let Err(e) = check_ownership(&principal, &existing) {
        return errors::auth_error_to_response(e);
    }
    if let Err(resp) = errors::require_nonempty("title", &body.title) {
        return resp;
    }

    let updated = ForumPost {
        id,
        title: body.title,
        content: body.content,
        category: body.category,
        author: existing.author,
        posted_at: existing.posted_at,
        tags: body.tags,
    };
    store.update_post(updated.clone());

    (StatusCode::OK, Json(updated)).into_response()
}

pub async fn delete_post(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Extension(PrincipalContext(principal)): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_resource_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Some(existing) = store.post(id) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "post not found");
    };
    if let Err(e) = check_ownership(&principal, &existing) {
        return errors::auth_error_to_response(e);
    }

    store.remove_post(id);
    StatusCode::NO_CONTENT.into_response()
}

pub async fn search_posts(
    Extension(store): Extension<Arc<InMemoryStore>>,
    Query(params): Query<dto::SearchParams>,
) -> impl IntoResponse {
    let query = SearchQuery::new(params.q);
    let hits = if query.is_empty() {
        vec![]
    } else {
        store.search_posts(&query.normalized)
    };
    (StatusCode::OK, Json(json!({ "data": hits })))
}
