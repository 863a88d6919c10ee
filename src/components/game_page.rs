//! Single-game page: embedded player, favorites button, user rating and
//! fullscreen toggle

use arcade_core::card::STAR_COUNT;
use arcade_core::detail::{fullscreen_label, preview_stars, GameDetail, GAME_LOAD_FAILED, GAME_NOT_FOUND};
use arcade_core::Rating;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::components::game_card::StarRow;
use crate::storage::preferences;

/// Where the game container is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Loading,
    Ready,
    NotFound,
    Failed,
}

#[component]
pub fn GamePage(status: RwSignal<GameStatus>, detail: RwSignal<Option<GameDetail>>) -> impl IntoView {
    view! {
        {move || match status.get() {
            GameStatus::Loading => view! {
                <div class="game-container">
                    <div class="loading">"Loading game..."</div>
                </div>
            }.into_any(),
            GameStatus::NotFound => view! {
                <div class="game-container">
                    <p class="grid-message">{GAME_NOT_FOUND}</p>
                </div>
            }.into_any(),
            GameStatus::Failed => view! {
                <div class="game-container">
                    <p class="grid-message">{GAME_LOAD_FAILED}</p>
                </div>
            }.into_any(),
            GameStatus::Ready => view! { <GamePlayer detail=detail /> }.into_any(),
        }}
    }
}

#[component]
fn GamePlayer(detail: RwSignal<Option<GameDetail>>) -> impl IntoView {
    let (fullscreen, set_fullscreen) = signal(false);
    let (hovered, set_hovered) = signal::<Option<u8>>(None);
    let player_ref = NodeRef::<html::Div>::new();

    let text = move |f: fn(&GameDetail) -> String| move || detail.with(|d| d.as_ref().map(f).unwrap_or_default());

    // Only changes when the game itself changes; re-setting the iframe src
    // would restart the game on every favorite or rating click
    let player_url = Memo::new(move |_| {
        detail.with(|d| d.as_ref().map(|d| d.player_url().to_string()).unwrap_or_default())
    });

    // Leaving fullscreen with Esc bypasses the button
    Effect::new(move |_| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let doc = document.clone();
        let on_change = Closure::<dyn Fn()>::new(move || {
            set_fullscreen.set(doc.fullscreen_element().is_some());
        });
        document.set_onfullscreenchange(Some(on_change.as_ref().unchecked_ref()));
        on_change.forget();
    });

    let on_fullscreen = move |_| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if document.fullscreen_element().is_none() {
            if let Some(container) = player_ref.get() {
                match container.request_fullscreen() {
                    Ok(()) => set_fullscreen.set(true),
                    Err(e) => tracing::error!("Fullscreen error: {:?}", e),
                }
            }
        } else {
            document.exit_fullscreen();
            set_fullscreen.set(false);
        }
    };

    let on_favorite = move |_| {
        detail.update(|d| {
            if let Some(d) = d {
                d.toggle_favorite(&preferences());
            }
        });
    };

    let rate = move |value: u8| match Rating::new(value) {
        Ok(rating) => detail.update(|d| {
            if let Some(d) = d {
                d.rate(&preferences(), rating);
            }
        }),
        Err(e) => tracing::warn!("{}", e),
    };

    let user_star_filled = move |index: usize| match hovered.get() {
        Some(h) => preview_stars(h)[index],
        None => detail.with(|d| d.as_ref().map(|d| d.user_stars()[index]).unwrap_or(false)),
    };

    view! {
        <div class="game-container">
            <div class="game-info">
                <img
                    id="gameImage"
                    src=text(|d| d.image.clone())
                    alt=text(|d| d.name.clone())
                />
                <div class="game-meta">
                    <h1 id="gameName">{text(|d| d.name.clone())}</h1>
                    <p id="gameCategory">{text(|d| d.category_line())}</p>
                    {move || {
                        let stars = detail.with(|d| d.as_ref().map(|d| d.rating_stars()).unwrap_or_default());
                        view! { <div id="gameRating"><StarRow stars=stars /></div> }
                    }}
                    <p id="gameDescription">{text(|d| d.description.clone())}</p>
                </div>
            </div>
            <div class="game-iframe-container" node_ref=player_ref>
                <iframe
                    id="gameIframe"
                    src=move || player_url.get()
                    title=text(|d| format!("{} Game", d.name))
                    allowfullscreen=true
                ></iframe>
            </div>
            <div class="game-controls">
                <button
                    id="fullscreenBtn"
                    class:active=move || fullscreen.get()
                    on:click=on_fullscreen
                >
                    {move || fullscreen_label(fullscreen.get())}
                </button>
                <button
                    id="favoriteBtn"
                    class:active=move || detail.with(|d| d.as_ref().is_some_and(|d| d.is_favorite))
                    on:click=on_favorite
                >
                    {move || detail.with(|d| d.as_ref().map(|d| d.favorite_label()).unwrap_or_default())}
                </button>
                <div id="userRating" class="rating user-rating">
                    {(0..STAR_COUNT).map(|index| {
                        let value = (index + 1) as u8;
                        view! {
                            <span
                                class="star"
                                class:filled=move || user_star_filled(index)
                                data-value=value
                                on:click=move |_| rate(value)
                                on:mouseover=move |_| set_hovered.set(Some(value))
                                on:mouseout=move |_| set_hovered.set(None)
                            >
                                "★"
                            </span>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
