//! Live search input and its results panel

use arcade_core::CatalogSession;
use leptos::prelude::*;

use crate::components::game_card::region_view;
use crate::regions::PageRegions;
use crate::storage::preferences;

#[component]
pub fn SearchBar(
    regions: PageRegions,
    session: StoredValue<Option<CatalogSession>>,
) -> impl IntoView {
    // No debounce: every keystroke re-filters the in-memory catalog.
    // Input before the catalog has loaded is ignored.
    let on_search = move |query: String| {
        regions.search_input.set(query.clone());
        let mut surface = regions;
        session.update_value(|session| {
            if let Some(session) = session {
                session.search(&query, &preferences(), &mut surface);
            }
        });
    };

    view! {
        <div class="search-container">
            <input
                id="searchInput"
                type="text"
                placeholder="Search games..."
                prop:value=move || regions.search_input.get()
                on:input=move |ev| on_search(event_target_value(&ev))
            />
            <div
                id="searchLoading"
                class="search-loading"
                style:display=move || if regions.loading.get() { "block" } else { "none" }
            >
                "Loading games..."
            </div>
        </div>
        <div id="searchResults" class="search-results" class:active=move || regions.search_results.get()>
            <div id="searchGrid" class="game-grid">
                {move || region_view(regions.search_grid.get())}
            </div>
        </div>
    }
}
