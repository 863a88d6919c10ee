//! Paginated game grid with "load more"

use arcade_core::CatalogSession;
use leptos::prelude::*;

use crate::components::card_observer::observe_cards;
use crate::components::game_card::region_view;
use crate::regions::PageRegions;
use crate::storage::preferences;

#[component]
pub fn GameGrid(
    regions: PageRegions,
    session: StoredValue<Option<CatalogSession>>,
    /// Narrow viewports get the card visibility observer
    mobile_breakpoint: u32,
) -> impl IntoView {
    let on_load_more = move |_| {
        let mut surface = regions;
        session.update_value(|session| {
            if let Some(session) = session {
                let summary = session.load_more(&preferences(), &mut surface);
                tracing::debug!(shown = summary.shown, cursor = session.cursor(), "load more");
            }
        });
    };

    // Cards are rebuilt on every render, so the observer has to be re-armed
    Effect::new(move |_| {
        regions.grid.track();
        regions.search_grid.track();
        observe_cards(mobile_breakpoint);
    });

    view! {
        <section class="games-section">
            <h2 id="sectionTitle" class="section-title">{move || regions.title.get()}</h2>
            <div id="zon_games" class="game-grid">
                {move || region_view(regions.grid.get())}
            </div>
            <button
                id="loadMore"
                class="load-more"
                style:display=move || if regions.load_more.get() { "block" } else { "none" }
                on:click=on_load_more
            >
                "Load More"
            </button>
        </section>
    }
}
