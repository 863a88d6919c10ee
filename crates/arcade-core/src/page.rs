//! Page type detection
//!
//! Each static page boots the same bundle; the location and optional
//! `data-*` hints on the mount element decide which view it becomes.

use crate::error::PageError;
use crate::listing::ViewMode;

/// Values a page may pin in its markup (`data-category`, `data-game-id`).
/// They win over the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageHints {
    pub category: Option<String>,
    pub game_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContext {
    Homepage,
    Favorites,
    Category(Option<String>),
    Game(String),
}

impl PageContext {
    /// `path` is `location.pathname`, `query` is `location.search` with or
    /// without the leading `?`. Only the last path segment is matched, so a
    /// site hosted under `/game-hub/` still has a homepage. A game page
    /// needs an id; without one it falls back to the homepage.
    pub fn detect(path: &str, query: &str, hints: &PageHints) -> Self {
        let page = last_segment(path).to_lowercase();
        let param = |name: &str| query_param(query, name).filter(|v| !v.is_empty());

        if page.contains("favorites.html") {
            return PageContext::Favorites;
        }

        if page.contains("category") || hints.category.is_some() {
            let category = hints.category.clone().filter(|v| !v.is_empty()).or_else(|| param("category"));
            return PageContext::Category(category);
        }

        let hinted = hints.game_id.clone().filter(|v| !v.is_empty());
        let game_page = page.contains("game") && !page.starts_with("games");
        match hinted.or_else(|| game_page.then(|| param("id")).flatten()) {
            Some(id) => PageContext::Game(id),
            None => PageContext::Homepage,
        }
    }

    pub fn view_mode(&self) -> Result<ViewMode, PageError> {
        match self {
            PageContext::Homepage => Ok(ViewMode::Homepage),
            PageContext::Favorites => Ok(ViewMode::Favorites),
            PageContext::Category(Some(category)) => Ok(ViewMode::Category(category.clone())),
            PageContext::Category(None) => Err(PageError::MissingCategory),
            PageContext::Game(id) => Ok(ViewMode::ExcludeSelf(id.clone())),
        }
    }

    pub fn game_id(&self) -> Option<&str> {
        match self {
            PageContext::Game(id) => Some(id),
            _ => None,
        }
    }
}

fn last_segment(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or_default()
}

/// First value of `name` in a URL query string, percent-decoded
pub fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            let value = value.replace('+', " ");
            urlencoding::decode(&value)
                .map(|v| v.into_owned())
                .unwrap_or(value)
        })
}
