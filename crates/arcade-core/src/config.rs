//! Site configuration
//!
//! Every field has a default matching the deployed site, so an absent or
//! partial override is always usable.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Fixed paths and pagination constants for one deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Catalog fetched once per page view
    pub catalog_path: String,
    /// Second copy of the catalog used only for preload hints on game pages
    pub preload_path: String,
    /// Background caching worker script
    pub service_worker_path: String,
    /// Cards visible before the first "load more"
    pub page_size: usize,
    /// Cards added per "load more" activation
    pub page_increment: usize,
    /// Viewport widths at or below this get the card visibility observer
    pub mobile_breakpoint: u32,
    pub site_name: String,
    pub nav_links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            catalog_path: "assets/games.json".to_string(),
            preload_path: "/games.json".to_string(),
            service_worker_path: "/sw.js".to_string(),
            page_size: 8,
            page_increment: 8,
            mobile_breakpoint: 767,
            site_name: "Zontal Arcade".to_string(),
            nav_links: vec![
                NavLink::new("Home", "/"),
                NavLink::new("Favorites", "/favorites.html"),
            ],
        }
    }
}

impl SiteConfig {
    /// Parse an override document. Missing keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Like [`SiteConfig::from_json`] but never fails; a malformed document
    /// is logged and the defaults are used.
    pub fn from_json_or_default(text: Option<&str>) -> Self {
        match text.map(str::trim).filter(|t| !t.is_empty()) {
            None => Self::default(),
            Some(text) => Self::from_json(text).unwrap_or_else(|e| {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }),
        }
    }

    /// Document title for a single game page
    pub fn page_title(&self, game_name: &str) -> String {
        format!("{} - {}", game_name, self.site_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.catalog_path, "assets/games.json");
        assert_eq!(config.page_size, 8);
        assert_eq!(config.page_increment, 8);
        assert_eq!(config.nav_links[1].href, "/favorites.html");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{"pageSize": 12, "siteName": "Test"}"#).unwrap();
        assert_eq!(config.page_size, 12);
        assert_eq!(config.site_name, "Test");
        assert_eq!(config.page_increment, 8);
        assert_eq!(config.service_worker_path, "/sw.js");
    }

    #[test]
    fn test_malformed_falls_back() {
        assert!(SiteConfig::from_json("{nope").is_err());
        assert_eq!(SiteConfig::from_json_or_default(Some("{nope")), SiteConfig::default());
        assert_eq!(SiteConfig::from_json_or_default(Some("   ")), SiteConfig::default());
        assert_eq!(SiteConfig::from_json_or_default(None), SiteConfig::default());
    }

    #[test]
    fn test_page_title() {
        assert_eq!(SiteConfig::default().page_title("Snake"), "Snake - Zontal Arcade");
    }
}
