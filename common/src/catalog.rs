//! The in-memory sequence of materials currently known to the client.
//!
//! Replaced wholesale on each successful fetch, cleared on a failed one.
//! Each fetch carries a sequence number so a slow response that resolves
//! after a faster, later one is dropped instead of clobbering fresher state.

use crate::error::ApiError;
use crate::model::Material;

/// What [`Catalog::complete_fetch`] did with a response.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The catalog now holds this response's materials.
    Replaced,
    /// The fetch failed; the displayed list was cleared and the error kept.
    Failed(ApiError),
    /// A newer fetch was issued after this one; the response was ignored.
    Stale,
}

#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<Material>,
    error: Option<ApiError>,
    /// Sequence number of the most recently issued fetch.
    latest_seq: u64,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Material] {
        &self.entries
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Issues a sequence number for a fetch about to start. Only the
    /// response carrying the latest issued number will be applied.
    pub fn begin_fetch(&mut self) -> u64 {
        self.latest_seq += 1;
        self.latest_seq
    }

    /// Applies a fetch result. Success replaces the catalog atomically;
    /// failure clears the displayed list and records the error; a stale
    /// sequence number is ignored entirely.
    pub fn complete_fetch(
        &mut self,
        seq: u64,
        result: Result<Vec<Material>, ApiError>,
    ) -> FetchOutcome {
        if seq != self.latest_seq {
            return FetchOutcome::Stale;
        }
        match result {
            Ok(materials) => {
                self.entries = materials;
                self.error = None;
                FetchOutcome::Replaced
            }
            Err(err) => {
                self.entries.clear();
                self.error = Some(err.clone());
                FetchOutcome::Failed(err)
            }
        }
    }

    /// Local, synchronous filter: a stable subsequence of the catalog whose
    /// entries contain `term` (case-insensitive) in course code, title, or
    /// description. An empty term returns the full catalog. Never contacts
    /// the API.
    pub fn filter(&self, term: &str) -> Vec<Material> {
        self.entries
            .iter()
            .filter(|m| m.matches_term(term))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(id: &str, level: u32, code: &str, title: &str, description: &str) -> Material {
        Material {
            id: id.to_string(),
            level,
            course_code: code.to_string(),
            course_title: title.to_string(),
            description: description.to_string(),
            file_url: format!("https://files.example/{id}.pdf"),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    fn populated() -> Catalog {
        let mut catalog = Catalog::new();
        let seq = catalog.begin_fetch();
        catalog.complete_fetch(
            seq,
            Ok(vec![
                material("m1", 100, "MTH 101", "Calculus I", "Limits and continuity"),
                material("m2", 200, "CSC 249.2", "Data Structures", "Linked lists"),
                material("m3", 300, "PHY 301", "Waves", "Standing waves"),
            ]),
        );
        catalog
    }

    #[test]
    fn successful_fetch_replaces_the_catalog() {
        let catalog = populated();
        assert_eq!(catalog.entries().len(), 3);
        assert!(catalog.error().is_none());
    }

    #[test]
    fn failed_fetch_clears_the_list_and_records_the_error() {
        let mut catalog = populated();
        let seq = catalog.begin_fetch();
        let outcome =
            catalog.complete_fetch(seq, Err(ApiError::Network("connection refused".to_string())));

        assert!(matches!(outcome, FetchOutcome::Failed(ApiError::Network(_))));
        assert!(catalog.is_empty());
        assert_eq!(
            catalog.error(),
            Some(&ApiError::Network("connection refused".to_string()))
        );
    }

    #[test]
    fn stale_response_never_clobbers_a_fresher_one() {
        let mut catalog = Catalog::new();
        let slow = catalog.begin_fetch();
        let fast = catalog.begin_fetch();

        // The later request resolves first.
        catalog.complete_fetch(fast, Ok(vec![material("fresh", 100, "A", "B", "C")]));
        // The earlier one arrives afterwards and must be dropped.
        let outcome = catalog.complete_fetch(slow, Ok(vec![material("old", 100, "X", "Y", "Z")]));

        assert_eq!(outcome, FetchOutcome::Stale);
        assert_eq!(catalog.entries().len(), 1);
        assert_eq!(catalog.entries()[0].id, "fresh");

        // A stale failure is dropped too.
        let outcome = catalog.complete_fetch(slow, Err(ApiError::Network("late".to_string())));
        assert_eq!(outcome, FetchOutcome::Stale);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn filter_is_a_stable_case_insensitive_subsequence() {
        let catalog = populated();

        let hits = catalog.filter("wAvEs");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "m3");

        // "li" hits m1 (Limits) and m2 (Linked lists), in catalog order.
        let hits = catalog.filter("li");
        let ids: Vec<&str> = hits.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["m1", "m2"]);

        assert!(catalog.filter("quantum").is_empty());
    }

    #[test]
    fn empty_term_returns_the_full_catalog_unchanged() {
        let catalog = populated();
        let all = catalog.filter("");
        assert_eq!(all, catalog.entries());
    }
}
