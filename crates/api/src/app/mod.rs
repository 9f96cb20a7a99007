//! HTTP application wiring (Axum router + middleware stacks).
//!
//! Two route trees share the same handlers' world view:
//! - public reads run behind the lenient gate (anonymous allowed),
//! - mutations and search run behind the strict gate.

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use campushub_auth::{AuthzGate, Hs256TokenVerifier};
use campushub_search::FederatedSearch;
use campushub_store::{InMemoryStore, community_backends};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(store: Arc<InMemoryStore>, jwt_secret: &str) -> Router {
    let verifier = Arc::new(Hs256TokenVerifier::new(jwt_secret.as_bytes()));
    let gate = Arc::new(AuthzGate::new(verifier, store.clone()));
    let auth_state = middleware::AuthState { gate };

    let federated = Arc::new(FederatedSearch::new(community_backends(&store)));

    let protected = routes::protected_router()
        .layer(Extension(store.clone()))
        .layer(Extension(federated))
        .layer(axum::middleware::from_fn_with_state(
            auth_state.clone(),
            middleware::auth_middleware,
        ));

    let public = routes::public_router()
        .layer(Extension(store))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::optional_auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(public)
        .merge(protected)
        .layer(ServiceBuilder::new())
}
