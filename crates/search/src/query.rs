use serde::{Deserialize, Serialize};

/// A free-text search query.
///
/// `normalized` is the trimmed, lowercased form used for matching and
/// ranking; the raw text is kept for display/transport. Empty or
/// whitespace-only input is invalid and yields an empty result set without
/// dispatching any lookups — a cost-avoidance contract, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub raw: String,
    pub normalized: String,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = raw.trim().to_lowercase();
        Self { raw, normalized }
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}
