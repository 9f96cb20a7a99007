//! `campushub-search` — federated multi-collection search aggregation.
//!
//! Given free text, produce a single relevance-ordered list of matches
//! spanning independently-stored resource kinds, tolerating partial backend
//! failure. The aggregation core is transport-agnostic: backends may be
//! in-process store queries or HTTP calls to per-kind endpoints.

pub mod backend;
pub mod error;
pub mod federate;
pub mod query;
pub mod rank;
pub mod result;

pub use backend::SearchBackend;
pub use error::SearchError;
pub use federate::FederatedSearch;
pub use query::SearchQuery;
pub use rank::merge_rank;
pub use result::{SearchKind, SearchResult};
