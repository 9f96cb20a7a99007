use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use campushub_search::{FederatedSearch, SearchQuery};

use crate::app::dto;
use crate::context::PrincipalContext;

/// One federated search across every resource kind.
///
/// The aggregation never errors: a failing kind contributes zero results, so
/// this endpoint answers 200 with whatever the healthy kinds produced.
pub async fn federated(
    Extension(search): Extension<Arc<FederatedSearch>>,
    Extension(PrincipalContext(principal)): Extension<PrincipalContext>,
    Query(params): Query<dto::SearchParams>,
) -> impl IntoResponse {
    let query = SearchQuery::new(params.q);
    let results = search.search(&query, Some(&principal)).await;
    (StatusCode::OK, Json(json!({ "data": results })))
}
