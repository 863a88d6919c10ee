//! Mount points the renderers write into
//!
//! The page exposes a fixed set of regions. Renderers only ever fill or
//! toggle these, which keeps filtering and pagination testable without a DOM.

use crate::card::DisplayUnit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    GameGrid,
    SectionTitle,
    SearchInput,
    SearchResults,
    SearchGrid,
    LoadMore,
    Loading,
}

impl Region {
    /// Element id of the region in the page markup
    pub fn element_id(self) -> &'static str {
        match self {
            Region::GameGrid => "zon_games",
            Region::SectionTitle => "sectionTitle",
            Region::SearchInput => "searchInput",
            Region::SearchResults => "searchResults",
            Region::SearchGrid => "searchGrid",
            Region::LoadMore => "loadMore",
            Region::Loading => "searchLoading",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RegionContent {
    #[default]
    Empty,
    Units(Vec<DisplayUnit>),
    /// Status text shown in place of cards
    Message(String),
    /// Plain text such as a heading
    Text(String),
}

impl RegionContent {
    pub fn message(text: impl Into<String>) -> Self {
        RegionContent::Message(text.into())
    }

    pub fn units(&self) -> &[DisplayUnit] {
        match self {
            RegionContent::Units(units) => units,
            _ => &[],
        }
    }

    /// Text of a `Text` or `Message`; empty for anything else
    pub fn into_text(self) -> String {
        match self {
            RegionContent::Text(text) | RegionContent::Message(text) => text,
            _ => String::new(),
        }
    }

    pub fn as_message(&self) -> Option<&str> {
        match self {
            RegionContent::Message(text) => Some(text),
            _ => None,
        }
    }
}

/// Rendering target. Each call replaces the region's previous state.
pub trait Surface {
    fn fill(&mut self, region: Region, content: RegionContent);
    fn toggle(&mut self, region: Region, visible: bool);
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;

    use super::*;

    /// Keeps the latest state of every region
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub contents: HashMap<Region, RegionContent>,
        pub visible: HashMap<Region, bool>,
    }

    impl RecordingSurface {
        pub fn content(&self, region: Region) -> RegionContent {
            self.contents.get(&region).cloned().unwrap_or_default()
        }

        pub fn card_ids(&self, region: Region) -> Vec<String> {
            self.content(region).units().iter().map(|u| u.id.clone()).collect()
        }

        pub fn is_visible(&self, region: Region) -> Option<bool> {
            self.visible.get(&region).copied()
        }
    }

    impl Surface for RecordingSurface {
        fn fill(&mut self, region: Region, content: RegionContent) {
            self.contents.insert(region, content);
        }

        fn toggle(&mut self, region: Region, visible: bool) {
            self.visible.insert(region, visible);
        }
    }
}
