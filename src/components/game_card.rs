//! Game card and star row views

use arcade_core::card::{DisplayUnit, STAR_COUNT};
use arcade_core::surface::RegionContent;
use leptos::prelude::*;

#[component]
pub fn GameCard(unit: DisplayUnit) -> impl IntoView {
    let size = unit.size.pixels();
    let featured = unit.is_featured().then_some("true");
    let popular = unit.is_popular().then_some("true");

    view! {
        <a
            href=unit.destination.href().to_string()
            class="game-card"
            data-name=unit.search_name
            data-category=unit.category
            data-featured=featured
            data-popular=popular
        >
            <div class="game-status">
                {unit.badges.into_iter().map(|badge| view! {
                    <span class=badge.class()>
                        <span>{badge.glyph()}</span>
                    </span>
                }).collect::<Vec<_>>()}
            </div>
            <img
                src=unit.image
                alt=unit.alt
                loading="lazy"
                decoding="async"
                fetchpriority=unit.priority.as_str()
                width=size
                height=size
                style="aspect-ratio: 1/1"
            />
            <h3>{unit.title}</h3>
            <StarRow stars=unit.stars />
        </a>
    }
}

/// Five read-only stars
#[component]
pub fn StarRow(stars: [bool; STAR_COUNT]) -> impl IntoView {
    view! {
        <div class="rating">
            {stars.into_iter().map(|filled| view! {
                <span class="star" class:filled=filled>"★"</span>
            }).collect::<Vec<_>>()}
        </div>
    }
}

/// Cards or a status line for a grid region
pub fn region_view(content: RegionContent) -> AnyView {
    match content {
        RegionContent::Units(units) => units
            .into_iter()
            .map(|unit| view! { <GameCard unit=unit /> })
            .collect::<Vec<_>>()
            .into_any(),
        RegionContent::Message(text) => view! {
            <p class="grid-message">{text}</p>
        }.into_any(),
        RegionContent::Text(_) | RegionContent::Empty => view! {}.into_any(),
    }
}
