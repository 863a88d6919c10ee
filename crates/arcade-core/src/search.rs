//! Live search over the loaded catalog
//!
//! Runs on every input change. Results go to their own region and ignore
//! the grid's pagination cursor.

use crate::card::{render_card, CardTarget, DisplayUnit};
use crate::catalog::GameRecord;
use crate::listing::CatalogSession;
use crate::prefs::{KeyValueStore, PreferenceStore};
use crate::surface::{Region, RegionContent, Surface};

pub const NO_RESULTS: &str = "No results found";

/// Trimmed, lowercased query. `None` when nothing is left to match.
pub fn normalize_query(raw: &str) -> Option<String> {
    let query = raw.trim().to_lowercase();
    (!query.is_empty()).then_some(query)
}

/// Case-insensitive substring match on name, category or description.
/// `query` must already be normalized.
pub fn matches_query(game: &GameRecord, query: &str) -> bool {
    [&game.name, &game.category, &game.description]
        .iter()
        .any(|field| field.to_lowercase().contains(query))
}

impl CatalogSession {
    /// Matching records in catalog order, or `None` for an empty query
    pub fn search_matches<S: KeyValueStore>(
        &self,
        raw_query: &str,
        prefs: &PreferenceStore<S>,
    ) -> Option<Vec<&GameRecord>> {
        let query = normalize_query(raw_query)?;
        let favorites = self.mode().favorites_for(prefs);
        Some(
            self.filtered(&favorites)
                .filter(|g| matches_query(g, &query))
                .collect(),
        )
    }

    /// Re-run the search for `raw_query` and redraw the results region.
    /// Returns the number of matches.
    pub fn search<S: KeyValueStore, U: Surface>(
        &mut self,
        raw_query: &str,
        prefs: &PreferenceStore<S>,
        surface: &mut U,
    ) -> usize {
        self.set_query(raw_query);

        let Some(matches) = self.search_matches(raw_query, prefs) else {
            surface.fill(Region::SearchGrid, RegionContent::Empty);
            surface.toggle(Region::SearchResults, false);
            return 0;
        };

        let count = matches.len();
        surface.toggle(Region::SearchResults, true);
        if matches.is_empty() {
            surface.fill(Region::SearchGrid, RegionContent::message(NO_RESULTS));
        } else {
            let ratings = prefs.ratings();
            let units: Vec<DisplayUnit> = matches
                .into_iter()
                .map(|g| render_card(g, &ratings, CardTarget::Link))
                .collect();
            surface.fill(Region::SearchGrid, RegionContent::Units(units));
        }

        tracing::debug!(query = raw_query, count, "search");
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::SiteConfig;
    use crate::listing::ViewMode;
    use crate::prefs::{MemoryStore, Rating, FAVORITES_KEY};
    use crate::surface::testing::RecordingSurface;

    fn catalog() -> Catalog {
        vec![
            GameRecord {
                id: "a".into(),
                name: "Tile Slider".into(),
                category: "puzzle".into(),
                featured: true,
                average_rating: 4.5,
                ..Default::default()
            },
            GameRecord {
                id: "b".into(),
                name: "Blaster".into(),
                category: "arcade".into(),
                description: "Shoot the PUZZLING aliens".into(),
                average_rating: 3.0,
                ..Default::default()
            },
            GameRecord {
                id: "c".into(),
                name: "Racer".into(),
                category: "racing".into(),
                ..Default::default()
            },
        ]
        .into()
    }

    fn session(mode: ViewMode) -> CatalogSession {
        CatalogSession::new(catalog(), mode, &SiteConfig::default())
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  PuZ "), Some("puz".to_string()));
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query(""), None);
    }

    #[test]
    fn test_matches_any_field_case_insensitively() {
        let prefs = PreferenceStore::new(MemoryStore::new());
        let s = session(ViewMode::Homepage);
        let ids: Vec<&str> = s
            .search_matches("PUZ", &prefs)
            .unwrap()
            .iter()
            .map(|g| g.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_matches_name_and_category() {
        let prefs = PreferenceStore::new(MemoryStore::new());
        let catalog: Catalog = vec![
            GameRecord { id: "a".into(), category: "puzzle".into(), ..Default::default() },
            GameRecord { id: "b".into(), category: "arcade".into(), ..Default::default() },
        ]
        .into();
        let mut s = CatalogSession::new(catalog, ViewMode::Homepage, &SiteConfig::default());
        let mut surface = RecordingSurface::default();
        assert_eq!(s.search("puz", &prefs, &mut surface), 1);
        assert_eq!(surface.card_ids(Region::SearchGrid), vec!["a"]);
    }

    #[test]
    fn test_empty_query_hides_results() {
        let prefs = PreferenceStore::new(MemoryStore::new());
        let mut s = session(ViewMode::Homepage);
        let mut surface = RecordingSurface::default();

        s.search("slider", &prefs, &mut surface);
        assert_eq!(surface.is_visible(Region::SearchResults), Some(true));

        assert_eq!(s.search("  ", &prefs, &mut surface), 0);
        assert_eq!(surface.is_visible(Region::SearchResults), Some(false));
        assert_eq!(surface.content(Region::SearchGrid), RegionContent::Empty);
    }

    #[test]
    fn test_no_match_message() {
        let prefs = PreferenceStore::new(MemoryStore::new());
        let mut s = session(ViewMode::Homepage);
        let mut surface = RecordingSurface::default();
        assert_eq!(s.search("zzz", &prefs, &mut surface), 0);
        assert_eq!(surface.content(Region::SearchGrid).as_message(), Some(NO_RESULTS));
        assert_eq!(surface.is_visible(Region::SearchResults), Some(true));
    }

    #[test]
    fn test_mode_predicate_applies() {
        let prefs = PreferenceStore::new(MemoryStore::new());
        let mut surface = RecordingSurface::default();

        let mut s = session(ViewMode::ExcludeSelf("a".into()));
        s.search("puz", &prefs, &mut surface);
        assert_eq!(surface.card_ids(Region::SearchGrid), vec!["b"]);

        let mut s = session(ViewMode::Category("arcade".into()));
        s.search("r", &prefs, &mut surface);
        assert_eq!(surface.card_ids(Region::SearchGrid), vec!["b"]);
    }

    #[test]
    fn test_search_ignores_cursor() {
        let prefs = PreferenceStore::new(MemoryStore::new());
        let config = SiteConfig { page_size: 1, ..SiteConfig::default() };
        let mut s = CatalogSession::new(catalog(), ViewMode::Homepage, &config);
        let mut surface = RecordingSurface::default();
        assert_eq!(s.search("r", &prefs, &mut surface), 3);
        assert_eq!(s.cursor(), 1);
        assert_eq!(s.query(), "r");
    }

    #[test]
    fn test_favorites_mode_searches_favorites_only() {
        let prefs = PreferenceStore::new(MemoryStore::new().with_item(FAVORITES_KEY, r#"["b","c"]"#));
        let mut s = session(ViewMode::Favorites);
        let mut surface = RecordingSurface::default();

        assert_eq!(s.search("r", &prefs, &mut surface), 2);
        assert_eq!(surface.card_ids(Region::SearchGrid), vec!["b", "c"]);

        assert_eq!(s.search("slider", &prefs, &mut surface), 0);
        assert_eq!(surface.content(Region::SearchGrid).as_message(), Some(NO_RESULTS));
    }

    #[test]
    fn test_favorites_past_first_page_reachable_by_search() {
        let catalog: Catalog = (0..12)
            .map(|i| GameRecord {
                id: i.to_string(),
                name: format!("Game {}", i),
                ..Default::default()
            })
            .collect::<Vec<_>>()
            .into();
        let ids: Vec<String> = (0..12).map(|i| i.to_string()).collect();
        let prefs = PreferenceStore::new(
            MemoryStore::new().with_item(FAVORITES_KEY, &serde_json::to_string(&ids).unwrap()),
        );
        let mut s = CatalogSession::new(catalog, ViewMode::Favorites, &SiteConfig::default());
        let mut surface = RecordingSurface::default();

        assert_eq!(s.search("game 11", &prefs, &mut surface), 1);
        assert_eq!(surface.card_ids(Region::SearchGrid), vec!["11"]);
    }

    #[test]
    fn test_user_rating_drives_result_stars() {
        let prefs = PreferenceStore::new(MemoryStore::new());
        let mut s = session(ViewMode::Homepage);
        let mut surface = RecordingSurface::default();

        s.search("slider", &prefs, &mut surface);
        let stars = |surface: &RecordingSurface| surface.content(Region::SearchGrid).units()[0].stars;
        assert_eq!(stars(&surface), [true, true, true, true, false]);

        prefs.set_rating("a", Rating::new(2).unwrap());
        s.search("slider", &prefs, &mut surface);
        assert_eq!(stars(&surface), [true, true, false, false, false]);
    }
}
