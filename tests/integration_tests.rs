//! Integration tests for glyphpick.
//!
//! These tests drive the TUI state machine headlessly through its action
//! dispatcher, with an in-memory clipboard, and exercise the persistence
//! layer against real temporary files.

use std::time::{Duration, Instant};

use glyphpick::catalog::{Catalog, SymbolRecord};
use glyphpick::clipboard::MemoryClipboard;
use glyphpick::store::{SymbolStore, MAX_RECENT};
use glyphpick::tui::state::{Action, AppState, AUTO_CLOSE_DELAY};
use glyphpick::tui::Theme;

fn record(symbol: &str, name: &str, aliases: &[&str]) -> SymbolRecord {
    SymbolRecord {
        symbol: symbol.to_string(),
        name: name.to_string(),
        aliases: aliases.iter().map(ToString::to_string).collect(),
        category: "greek".to_string(),
    }
}

fn greek_catalog() -> Catalog {
    Catalog::new(vec![
        record("α", "Alpha", &["a"]),
        record("β", "Beta", &["b", "beta"]),
        record("γ", "Gamma", &["g"]),
        record("δ", "Delta", &["d"]),
        record("ε", "Epsilon", &["e"]),
        record("ζ", "Zeta", &["z"]),
    ])
}

fn picker(store: SymbolStore) -> AppState {
    AppState::new(
        greek_catalog(),
        store,
        Theme::dark(),
        Box::new(MemoryClipboard::default()),
        Duration::from_millis(100),
        true,
    )
}

mod state_machine {
    use super::*;

    #[test]
    fn test_search_copy_flow() {
        let mut app = picker(SymbolStore::in_memory());
        let t0 = Instant::now();

        // Type "bet", wait out the debounce, press Down then Enter.
        app.dispatch(Action::QueryChanged("bet".to_string()), t0);
        app.tick(t0 + Duration::from_millis(100));
        assert_eq!(app.items.len(), 1);
        assert_eq!(app.items[0].record.symbol, "β");

        app.dispatch(Action::MoveDown, t0);
        app.dispatch(Action::Activate, t0);

        assert!(app.toast.is_some(), "copy confirmation shown");
        assert_eq!(app.store.recent()[0].symbol, "β");
        assert!(!app.should_quit);

        // The popup closes itself after the grace period.
        app.tick(t0 + AUTO_CLOSE_DELAY);
        assert!(app.should_quit);
    }

    #[test]
    fn test_rapid_typing_debounces_to_one_rebuild() {
        let mut app = picker(SymbolStore::in_memory());
        let t0 = Instant::now();

        for (i, q) in ["g", "ga", "gam"].iter().enumerate() {
            app.dispatch(
                Action::QueryChanged((*q).to_string()),
                t0 + Duration::from_millis(i as u64 * 30),
            );
            // Grid untouched while the timer keeps getting pushed back.
            assert_eq!(app.items.len(), 6);
        }

        app.tick(t0 + Duration::from_millis(60 + 100));
        assert_eq!(app.items.len(), 1);
        assert_eq!(app.items[0].record.name, "Gamma");
    }

    #[test]
    fn test_selection_survives_only_until_grid_changes() {
        let mut app = picker(SymbolStore::in_memory());
        let t0 = Instant::now();

        app.dispatch(Action::MoveDown, t0);
        app.dispatch(Action::MoveRight, t0);
        assert_eq!(app.selected, Some(1));

        app.dispatch(Action::QueryChanged("alpha".to_string()), t0);
        app.tick(t0 + Duration::from_millis(100));
        assert_eq!(app.selected, None, "stale index must not survive a refilter");
    }

    #[test]
    fn test_favorites_render_before_recent_and_results() {
        let mut app = picker(SymbolStore::in_memory());
        let t0 = Instant::now();

        // Copy δ so it lands in recent, then favorite the first grid item.
        app.dispatch(Action::QueryChanged("delta".to_string()), t0);
        app.tick(t0 + Duration::from_millis(100));
        app.dispatch(Action::MoveDown, t0);
        app.dispatch(Action::Activate, t0);

        app.dispatch(Action::QueryChanged(String::new()), t0);
        app.tick(t0 + Duration::from_millis(200));
        app.dispatch(Action::MoveDown, t0);
        app.dispatch(Action::ToggleFavorite, t0);

        let (favorites, recent, results) = app.section_counts();
        assert_eq!(favorites, 1);
        assert_eq!(recent, 1);
        assert_eq!(results, 6);
        assert!(app.items[0].favorite);
    }

    #[test]
    fn test_clipboard_failure_keeps_popup_open() {
        let mut app = AppState::new(
            greek_catalog(),
            SymbolStore::in_memory(),
            Theme::dark(),
            Box::new(MemoryClipboard {
                fail: true,
                ..MemoryClipboard::default()
            }),
            Duration::from_millis(100),
            true,
        );
        let t0 = Instant::now();

        app.dispatch(Action::MoveDown, t0);
        app.dispatch(Action::Activate, t0);

        assert!(app.toast.is_none());
        assert!(app.store.recent().is_empty());
        app.tick(t0 + Duration::from_secs(5));
        assert!(!app.should_quit, "no auto-close without a successful copy");
    }

    #[test]
    fn test_auto_close_disabled() {
        let mut app = AppState::new(
            greek_catalog(),
            SymbolStore::in_memory(),
            Theme::dark(),
            Box::new(MemoryClipboard::default()),
            Duration::from_millis(100),
            false,
        );
        let t0 = Instant::now();

        app.dispatch(Action::MoveDown, t0);
        app.dispatch(Action::Activate, t0);
        assert!(app.toast.is_some());

        app.tick(t0 + Duration::from_secs(5));
        assert!(!app.should_quit);
    }
}

mod persistence {
    use super::*;

    #[test]
    fn test_recent_and_favorites_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = SymbolStore::open(path.clone());
        store.record_usage(&record("α", "Alpha", &["a"])).unwrap();
        store.record_usage(&record("β", "Beta", &["b"])).unwrap();
        store.toggle_favorite(&record("γ", "Gamma", &["g"])).unwrap();

        let reopened = SymbolStore::open(path);
        assert_eq!(reopened.recent().len(), 2);
        assert_eq!(reopened.recent()[0].symbol, "β", "most recent first");
        assert!(reopened.is_favorite("γ"));
    }

    #[test]
    fn test_recent_list_honors_cap_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = SymbolStore::open(path.clone());
        for i in 0..25 {
            store
                .record_usage(&record(&format!("s{i}"), &format!("Symbol {i}"), &[]))
                .unwrap();
        }

        let reopened = SymbolStore::open(path);
        assert_eq!(reopened.recent().len(), MAX_RECENT);
        assert_eq!(reopened.recent()[0].symbol, "s24");
    }

    #[test]
    fn test_tui_session_writes_through_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut app = picker(SymbolStore::open(path.clone()));
        let t0 = Instant::now();
        app.dispatch(Action::MoveDown, t0);
        app.dispatch(Action::Activate, t0);
        app.dispatch(Action::MoveDown, t0);
        app.dispatch(Action::ToggleFavorite, t0);

        let reopened = SymbolStore::open(path);
        assert_eq!(reopened.recent().len(), 1);
        assert_eq!(reopened.favorites_len(), 1);
    }
}

mod catalog_behavior {
    use super::*;

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let catalog = greek_catalog();
        let all = catalog.filter("");
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].symbol, "α");
        assert_eq!(all[5].symbol, "ζ");
    }

    #[test]
    fn test_filter_matches_aliases_case_insensitively() {
        let catalog = greek_catalog();
        let hits = catalog.filter("  BETA ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].symbol, "β");
    }

    #[test]
    fn test_filter_matches_category() {
        let catalog = greek_catalog();
        assert_eq!(catalog.filter("greek").len(), 6);
    }

    #[test]
    fn test_embedded_catalog_parses_and_is_nonempty() {
        let catalog = Catalog::embedded();
        assert!(!catalog.is_empty());
        assert!(catalog.records().iter().any(|r| r.symbol == "α"));
        // Glyphs are unique keys.
        let mut symbols: Vec<&str> =
            catalog.records().iter().map(|r| r.symbol.as_str()).collect();
        symbols.sort_unstable();
        let before = symbols.len();
        symbols.dedup();
        assert_eq!(symbols.len(), before, "duplicate glyph in embedded catalog");
    }
}
