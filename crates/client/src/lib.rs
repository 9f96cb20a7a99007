//! `campushub-client` — caller-side search aggregation.
//!
//! Wires keystroke input to the federated search: a 300 ms quiescence
//! debounce, and a monotone sequence number that discards stale in-flight
//! responses (last-query-wins). The HTTP transport issues the per-kind
//! `GET /<kind>/search` calls concurrently and normalizes their kind-native
//! payloads client-side.

pub mod http;
pub mod session;

pub use http::{HttpKindBackend, Session, http_backends};
pub use session::SearchSession;
