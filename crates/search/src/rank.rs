//! Merge & rank: a stable two-bucket partition.
//!
//! Results whose title contains the query text (case-insensitive) sort before
//! results that do not; within either bucket arrival order is preserved. This
//! is deliberately not a scoring function — no per-field weighting, no
//! semantic similarity.

use crate::query::SearchQuery;
use crate::result::SearchResult;

/// Concatenate per-kind result batches and partition them stably by title
/// match.
pub fn merge_rank(batches: Vec<Vec<SearchResult>>, query: &SearchQuery) -> Vec<SearchResult> {
    let mut title_matches = Vec::new();
    let mut rest = Vec::new();

    for result in batches.into_iter().flatten() {
        if result.title.to_lowercase().contains(&query.normalized) {
            title_matches.push(result);
        } else {
            rest.push(result);
        }
    }

    title_matches.extend(rest);
    title_matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::SearchKind;
    use campushub_core::ResourceId;

    fn result(kind: SearchKind, title: &str) -> SearchResult {
        SearchResult {
            id: ResourceId::new(),
            kind,
            title: title.to_string(),
            description: String::new(),
            url: String::new(),
            category: None,
            author: None,
            timestamp: None,
            tags: vec![],
        }
    }

    #[test]
    fn title_matches_precede_non_matches_across_batches() {
        let query = SearchQuery::new("Robotics");
        let batch_a = vec![
            result(SearchKind::Event, "AI Club"),
            result(SearchKind::Event, "Robotics"),
        ];
        // Later-settling batch still ranks its title match ahead of earlier
        // non-matches.
        let batch_b = vec![result(SearchKind::Team, "Study Robotics Group")];

        let merged = merge_rank(vec![batch_a, batch_b], &query);
        let titles: Vec<&str> = merged.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Robotics", "Study Robotics Group", "AI Club"]);
    }

    #[test]
    fn match_is_case_insensitive() {
        let query = SearchQuery::new("robotics");
        let merged = merge_rank(
            vec![vec![
                result(SearchKind::Team, "chess"),
                result(SearchKind::Team, "ROBOTICS LAB"),
            ]],
            &query,
        );
        assert_eq!(merged[0].title, "ROBOTICS LAB");
    }

    #[test]
    fn arrival_order_is_preserved_within_buckets() {
        let query = SearchQuery::new("x");
        let merged = merge_rank(
            vec![
                vec![result(SearchKind::Event, "alpha"), result(SearchKind::Event, "beta")],
                vec![result(SearchKind::Forum, "gamma")],
            ],
            &query,
        );
        let titles: Vec<&str> = merged.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["alpha", "beta", "gamma"]);
    }
}
