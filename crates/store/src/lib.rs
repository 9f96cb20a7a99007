//! `campushub-store` — in-memory document store and search backends.
//!
//! The real platform keeps these collections in an external document store;
//! here they live behind `RwLock`ed maps with the same query surface:
//! fetch-by-id, list, and case-insensitive substring search per kind.

pub mod backends;
pub mod normalize;
pub mod store;

pub use backends::{StoreSearchBackend, community_backends};
pub use store::InMemoryStore;
