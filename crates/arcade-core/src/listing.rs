//! Paginated game grid
//!
//! A [`CatalogSession`] owns the loaded catalog plus the per-page view state
//! (mode, cursor, query). Every render is a full recompute from that state.

use std::collections::BTreeSet;

use crate::card::{render_card, CardTarget, DisplayUnit};
use crate::catalog::{Catalog, GameRecord};
use crate::config::SiteConfig;
use crate::error::PageError;
use crate::prefs::{KeyValueStore, PreferenceStore};
use crate::surface::{Region, RegionContent, Surface};

pub const LOAD_FAILED: &str = "Failed to load games. Please try again later.";
pub const INVALID_CATEGORY: &str = "Invalid category. Please select a category.";

/// Filtering context, fixed per page type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    /// Every game not explicitly hidden from the homepage
    Homepage,
    Category(String),
    /// Everything except the game currently being played
    ExcludeSelf(String),
    Favorites,
}

impl ViewMode {
    /// Whether `game` belongs to this view. `favorites` is only consulted in
    /// [`ViewMode::Favorites`].
    pub fn admits(&self, game: &GameRecord, favorites: &BTreeSet<String>) -> bool {
        match self {
            ViewMode::Homepage => game.shown_on_homepage(),
            ViewMode::Category(category) => game.category == *category,
            ViewMode::ExcludeSelf(current) => game.id != *current,
            ViewMode::Favorites => favorites.contains(&game.id),
        }
    }

    /// Favorites show only the first page and no load-more button; later
    /// favorites are still reachable through search, which is unpaged.
    pub fn paginates(&self) -> bool {
        !matches!(self, ViewMode::Favorites)
    }

    pub fn title(&self) -> String {
        match self {
            ViewMode::Homepage => "All Games".to_string(),
            ViewMode::Category(category) => format!("{} Games", category),
            ViewMode::ExcludeSelf(_) => "More Games".to_string(),
            ViewMode::Favorites => "Favorite Games".to_string(),
        }
    }

    pub fn empty_message(&self) -> String {
        match self {
            ViewMode::Homepage => "No games available.".to_string(),
            ViewMode::Category(category) => format!("No games found in {} category.", category),
            ViewMode::ExcludeSelf(_) => "No more games found".to_string(),
            ViewMode::Favorites => "No favorite games yet.".to_string(),
        }
    }

    pub(crate) fn favorites_for<S: KeyValueStore>(&self, prefs: &PreferenceStore<S>) -> BTreeSet<String> {
        match self {
            ViewMode::Favorites => prefs.favorites(),
            _ => BTreeSet::new(),
        }
    }
}

/// Outcome of one grid render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSummary {
    pub shown: usize,
    pub matching: usize,
    pub load_more: bool,
}

/// View state for one page view: catalog, mode, cursor and query.
#[derive(Debug, Clone)]
pub struct CatalogSession {
    catalog: Catalog,
    mode: ViewMode,
    cursor: usize,
    increment: usize,
    query: String,
}

impl CatalogSession {
    pub fn new(catalog: Catalog, mode: ViewMode, config: &SiteConfig) -> Self {
        Self {
            catalog,
            mode,
            cursor: config.page_size,
            increment: config.page_increment,
            query: String::new(),
        }
    }

    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub(crate) fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// Catalog entries admitted by the mode, in catalog order
    pub fn filtered<'a, 'f>(&'a self, favorites: &'f BTreeSet<String>) -> impl Iterator<Item = &'a GameRecord> {
        self.catalog.iter().filter(move |g| self.mode.admits(g, favorites))
    }

    /// Replace the grid with the first `cursor` matching cards, or the mode's
    /// empty message, and set the title and load-more visibility.
    pub fn render_list<S: KeyValueStore, U: Surface>(
        &self,
        prefs: &PreferenceStore<S>,
        surface: &mut U,
    ) -> ListSummary {
        let favorites = self.mode.favorites_for(prefs);
        let ratings = prefs.ratings();

        let matching: Vec<&GameRecord> = self.filtered(&favorites).collect();
        let units: Vec<DisplayUnit> = matching
            .iter()
            .take(self.cursor)
            .map(|g| render_card(g, &ratings, CardTarget::Link))
            .collect();

        let shown = units.len();
        let load_more = self.mode.paginates() && shown < matching.len();

        surface.fill(Region::SectionTitle, RegionContent::Text(self.mode.title()));
        if units.is_empty() {
            surface.fill(Region::GameGrid, RegionContent::Message(self.mode.empty_message()));
        } else {
            surface.fill(Region::GameGrid, RegionContent::Units(units));
        }
        surface.toggle(Region::LoadMore, load_more);

        tracing::debug!(shown, matching = matching.len(), load_more, "rendered game grid");
        ListSummary {
            shown,
            matching: matching.len(),
            load_more,
        }
    }

    /// Grow the cursor by one increment and re-render. Never refetches.
    pub fn load_more<S: KeyValueStore, U: Surface>(
        &mut self,
        prefs: &PreferenceStore<S>,
        surface: &mut U,
    ) -> ListSummary {
        self.cursor += self.increment;
        self.render_list(prefs, surface)
    }
}

/// Replace the grid with the catalog failure message and hide the controls
pub fn render_load_failure<U: Surface>(surface: &mut U, message: &str) {
    surface.toggle(Region::Loading, false);
    surface.fill(Region::GameGrid, RegionContent::message(message));
    surface.toggle(Region::LoadMore, false);
}

pub fn render_page_error<U: Surface>(surface: &mut U, error: &PageError) {
    let message = match error {
        PageError::MissingCategory => INVALID_CATEGORY,
    };
    surface.fill(Region::SectionTitle, RegionContent::Text("All Games".to_string()));
    surface.fill(Region::GameGrid, RegionContent::message(message));
    surface.toggle(Region::LoadMore, false);
}
