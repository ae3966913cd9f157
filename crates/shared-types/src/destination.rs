use serde::{Deserialize, Serialize};

// ── Destination record ──────────────────────────────────────────────

/// A destination in the travel catalog.
///
/// Records are immutable once loaded; `popularity` is a percentage in
/// `[0, 100]` and `price` is a non-negative USD amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub popularity: i32,
    pub price: f64,
}

impl Destination {
    /// Whether this destination matches a search query.
    ///
    /// Case-insensitive substring match against name or country.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q) || self.country.to_lowercase().contains(&q)
    }
}

/// Filter a catalog by search query, preserving the original order.
///
/// The empty query returns the full catalog. Total for any string input.
pub fn filter_destinations(catalog: &[Destination], query: &str) -> Vec<Destination> {
    catalog
        .iter()
        .filter(|d| d.matches_query(query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Vec<Destination> {
        vec![
            Destination {
                id: 1,
                name: "Santorini".into(),
                country: "Greece".into(),
                popularity: 95,
                price: 1299.0,
            },
            Destination {
                id: 2,
                name: "Bali".into(),
                country: "Indonesia".into(),
                popularity: 88,
                price: 899.0,
            },
            Destination {
                id: 3,
                name: "Maldives".into(),
                country: "Maldives".into(),
                popularity: 92,
                price: 2199.0,
            },
        ]
    }

    #[test]
    fn empty_query_is_identity() {
        let catalog = sample_catalog();
        assert_eq!(filter_destinations(&catalog, ""), catalog);
    }

    #[test]
    fn query_matches_country() {
        let catalog = sample_catalog();
        let filtered = filter_destinations(&catalog, "mal");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Maldives");
    }

    #[test]
    fn query_matches_name_through_country_field() {
        let catalog = sample_catalog();
        let filtered = filter_destinations(&catalog, "greece");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Santorini");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let catalog = sample_catalog();
        assert_eq!(
            filter_destinations(&catalog, "BALI"),
            filter_destinations(&catalog, "bali")
        );
        assert_eq!(filter_destinations(&catalog, "BALI").len(), 1);
    }

    #[test]
    fn result_is_an_order_preserving_subsequence() {
        let catalog = sample_catalog();
        // "i" appears in Santorini, Bali, Maldives and Indonesia.
        let filtered = filter_destinations(&catalog, "i");
        let ids: Vec<i64> = filtered.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn excluded_records_match_neither_field() {
        let catalog = sample_catalog();
        let filtered = filter_destinations(&catalog, "greece");
        for d in &catalog {
            if !filtered.contains(d) {
                assert!(!d.matches_query("greece"));
            }
        }
    }

    #[test]
    fn unmatched_query_returns_empty() {
        let catalog = sample_catalog();
        assert!(filter_destinations(&catalog, "atlantis").is_empty());
    }

    #[test]
    fn unicode_queries_are_total() {
        let catalog = sample_catalog();
        assert!(filter_destinations(&catalog, "ギリシャ").is_empty());
        // Degenerate inputs must not panic.
        assert!(filter_destinations(&catalog, "\u{0}").is_empty());
    }

    #[test]
    fn destination_roundtrip_through_json() {
        let dest = sample_catalog().remove(0);
        let json = serde_json::to_string(&dest).unwrap();
        let parsed: Destination = serde_json::from_str(&json).unwrap();
        assert_eq!(dest, parsed);
    }

    #[test]
    fn destination_deserializes_from_api_json() {
        let json = r#"{"id": 7, "name": "Kyoto", "country": "Japan", "popularity": 90, "price": 1450.0}"#;
        let dest: Destination = serde_json::from_str(json).unwrap();
        assert_eq!(dest.id, 7);
        assert_eq!(dest.country, "Japan");
        assert!((0..=100).contains(&dest.popularity));
        assert!(dest.price >= 0.0);
    }
}
