//! Reactive mount points
//!
//! One signal per page region. The core renderers write through the
//! [`Surface`] impl and the components below read the signals.

use arcade_core::surface::{Region, RegionContent, Surface};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct PageRegions {
    pub grid: RwSignal<RegionContent>,
    pub title: RwSignal<String>,
    pub search_input: RwSignal<String>,
    pub search_results: RwSignal<bool>,
    pub search_grid: RwSignal<RegionContent>,
    pub load_more: RwSignal<bool>,
    pub loading: RwSignal<bool>,
}

impl PageRegions {
    pub fn new() -> Self {
        Self {
            grid: RwSignal::new(RegionContent::Empty),
            title: RwSignal::new(String::new()),
            search_input: RwSignal::new(String::new()),
            search_results: RwSignal::new(false),
            search_grid: RwSignal::new(RegionContent::Empty),
            load_more: RwSignal::new(false),
            loading: RwSignal::new(false),
        }
    }
}

impl Surface for PageRegions {
    fn fill(&mut self, region: Region, content: RegionContent) {
        match region {
            Region::GameGrid => self.grid.set(content),
            Region::SearchGrid => self.search_grid.set(content),
            Region::SectionTitle => self.title.set(content.into_text()),
            Region::SearchInput => self.search_input.set(content.into_text()),
            Region::SearchResults | Region::LoadMore | Region::Loading => {
                tracing::warn!(?region, "region only supports visibility");
            }
        }
    }

    fn toggle(&mut self, region: Region, visible: bool) {
        match region {
            Region::SearchResults => self.search_results.set(visible),
            Region::LoadMore => self.load_more.set(visible),
            Region::Loading => self.loading.set(visible),
            Region::GameGrid | Region::SectionTitle | Region::SearchInput | Region::SearchGrid => {
                tracing::warn!(?region, "region is always visible");
            }
        }
    }
}
