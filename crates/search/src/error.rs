use thiserror::Error;

use crate::result::SearchKind;

/// Failure of a single per-kind lookup.
///
/// These are recovered locally by the aggregator (logged, substituted with an
/// empty contribution) and never surfaced to the caller of a federated
/// search.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("search backend '{kind}' failed: {message}")]
    Backend { kind: SearchKind, message: String },

    #[error("search transport failed: {0}")]
    Transport(String),
}

impl SearchError {
    pub fn backend(kind: SearchKind, message: impl Into<String>) -> Self {
        Self::Backend {
            kind,
            message: message.into(),
        }
    }
}
