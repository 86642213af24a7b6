//! Property-based tests for catalog filtering and the recent list.
//!
//! Uses proptest to check the invariants that hold for arbitrary queries
//! and arbitrary usage sequences.

use glyphpick::catalog::{Catalog, SymbolRecord};
use glyphpick::store::{SymbolStore, MAX_RECENT};
use proptest::prelude::*;

fn arb_record() -> impl Strategy<Value = SymbolRecord> {
    (
        "[\\PC]{1,2}",
        "[a-zA-Z ]{1,20}",
        prop::collection::vec("[a-z]{1,8}", 0..3),
        "[a-z]{0,10}",
    )
        .prop_map(|(symbol, name, aliases, category)| SymbolRecord {
            symbol,
            name,
            aliases,
            category,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Filtering never panics and every hit actually matches the query.
    #[test]
    fn filter_is_sound(
        records in prop::collection::vec(arb_record(), 0..50),
        query in ".{0,30}",
    ) {
        let catalog = Catalog::new(records);
        let needle = query.trim().to_lowercase();
        for hit in catalog.filter(&query) {
            prop_assert!(
                needle.is_empty() || hit.matches(&needle),
                "non-matching record {:?} for query {:?}",
                hit.name,
                query
            );
        }
    }

    /// Filtering preserves catalog order.
    #[test]
    fn filter_preserves_order(
        records in prop::collection::vec(arb_record(), 0..50),
        query in "[a-z]{0,5}",
    ) {
        let catalog = Catalog::new(records);
        let hits = catalog.filter(&query);
        let positions: Vec<usize> = hits
            .iter()
            .map(|h| {
                catalog
                    .records()
                    .iter()
                    .position(|r| std::ptr::eq(r, *h))
                    .unwrap()
            })
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// An empty (or blank) query always returns the whole catalog.
    #[test]
    fn blank_query_returns_all(
        records in prop::collection::vec(arb_record(), 0..50),
        blanks in " {0,5}",
    ) {
        let catalog = Catalog::new(records);
        prop_assert_eq!(catalog.filter(&blanks).len(), catalog.len());
    }

    /// The recent list stays bounded and duplicate-free under any sequence
    /// of usages.
    #[test]
    fn recent_list_invariants(indices in prop::collection::vec(0usize..20, 0..100)) {
        let mut store = SymbolStore::in_memory();
        for i in &indices {
            let record = SymbolRecord {
                symbol: format!("s{i}"),
                name: format!("Symbol {i}"),
                aliases: vec![],
                category: String::new(),
            };
            store.record_usage(&record).unwrap();
        }

        prop_assert!(store.recent().len() <= MAX_RECENT);

        let mut seen: Vec<&str> = store.recent().iter().map(|r| r.symbol.as_str()).collect();
        seen.sort_unstable();
        let before = seen.len();
        seen.dedup();
        prop_assert_eq!(seen.len(), before, "duplicate symbol in recent list");

        // The head of the list is always the last symbol used.
        if let Some(last) = indices.last() {
            prop_assert_eq!(store.recent()[0].symbol.clone(), format!("s{last}"));
        }
    }

    /// Toggling a favorite twice always restores the previous state.
    #[test]
    fn favorite_toggle_is_an_involution(indices in prop::collection::vec(0usize..10, 0..40)) {
        let mut store = SymbolStore::in_memory();
        for i in &indices {
            let record = SymbolRecord {
                symbol: format!("s{i}"),
                name: format!("Symbol {i}"),
                aliases: vec![],
                category: String::new(),
            };
            let was_favorite = store.is_favorite(&record.symbol);
            store.toggle_favorite(&record).unwrap();
            store.toggle_favorite(&record).unwrap();
            prop_assert_eq!(store.is_favorite(&record.symbol), was_favorite);
        }
    }
}
