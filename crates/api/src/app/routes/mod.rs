use axum::{Router, routing::get};

pub mod classgroups;
pub mod events;
pub mod forum;
pub mod projects;
pub mod search;
pub mod system;
pub mod teams;
pub mod users;

/// Routes that admit anonymous callers (reads, personalized where possible).
pub fn public_router() -> Router {
    Router::new()
        .nest("/events", events::public_router())
        .nest("/forum", forum::public_router())
        .nest("/projects", projects::public_router())
        .nest("/teams", teams::public_router())
        .nest("/classgroups", classgroups::public_router())
}

/// Routes that require an authenticated, active caller.
pub fn protected_router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .route("/search", get(search::federated))
        .nest("/events", events::protected_router())
        .nest("/forum", forum::protected_router())
        .nest("/projects", projects::protected_router())
        .nest("/teams", teams::protected_router())
        .nest("/classgroups", classgroups::protected_router())
        .nest("/users", users::router())
}
