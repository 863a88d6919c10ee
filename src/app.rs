use arcade_core::catalog::CatalogLoader;
use arcade_core::detail::GameDetail;
use arcade_core::listing::{render_load_failure, render_page_error, LOAD_FAILED};
use arcade_core::surface::{Region, Surface};
use arcade_core::{CatalogSession, PageContext, PageHints, SiteConfig};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, HttpCatalogSource};
use crate::components::{GameGrid, GamePage, GameStatus, Navbar, SearchBar};
use crate::regions::PageRegions;
use crate::storage::preferences;

const BUILD_HASH: &str = env!("ARCADE_BUILD_HASH");
const BUILD_DATE: &str = env!("ARCADE_BUILD_DATE");

#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::from_json_or_default(api::element_text("site-config").as_deref());

    let (path, search) = api::location();
    let hints = PageHints {
        category: api::body_data("category"),
        game_id: api::body_data("game-id"),
    };
    let page = PageContext::detect(&path, &search, &hints);
    tracing::info!(?page, "page context");

    api::register_service_worker(&config.service_worker_path);

    let regions = PageRegions::new();
    let session = StoredValue::new(None::<CatalogSession>);
    let game_status = RwSignal::new(GameStatus::Loading);
    let game_detail = RwSignal::new(None::<GameDetail>);

    if page.game_id().is_some() {
        let preload_path = config.preload_path.clone();
        spawn_local(async move {
            api::preload_game_urls(&preload_path).await;
        });
    }

    // Single fetch per page view; everything after works on the loaded copy
    {
        let config = config.clone();
        let page = page.clone();
        let mut surface = regions;
        surface.toggle(Region::Loading, true);

        spawn_local(async move {
            let mut loader = CatalogLoader::new(HttpCatalogSource, config.catalog_path.clone());
            let catalog = match loader.load().await {
                Ok(catalog) => catalog,
                Err(_) => {
                    // Logged by the loader
                    if page.game_id().is_some() {
                        surface.toggle(Region::Loading, false);
                        game_status.set(GameStatus::Failed);
                    } else {
                        render_load_failure(&mut surface, LOAD_FAILED);
                    }
                    return;
                }
            };
            surface.toggle(Region::Loading, false);

            let prefs = preferences();
            if let Some(id) = page.game_id() {
                match catalog.iter().find(|g| g.id == id) {
                    Some(game) => {
                        let detail = GameDetail::build(game, &prefs, &config);
                        api::set_document_title(&detail.page_title);
                        game_detail.set(Some(detail));
                        game_status.set(GameStatus::Ready);
                    }
                    None => game_status.set(GameStatus::NotFound),
                }
            }

            match page.view_mode() {
                Ok(mode) => {
                    let next = CatalogSession::new(catalog, mode, &config);
                    next.render_list(&prefs, &mut surface);
                    session.set_value(Some(next));
                }
                Err(e) => {
                    tracing::warn!("{}", e);
                    render_page_error(&mut surface, &e);
                }
            }
        });
    }

    let is_game_page = page.game_id().is_some();

    view! {
        <div class="app-container">
            <Navbar site_name=config.site_name.clone() links=config.nav_links.clone() />
            <main class="main-content">
                <SearchBar regions=regions session=session />
                {is_game_page.then(|| view! {
                    <GamePage status=game_status detail=game_detail />
                })}
                <GameGrid
                    regions=regions
                    session=session
                    mobile_breakpoint=config.mobile_breakpoint
                />
            </main>
            <footer class="site-footer">
                <span class="build-info">{format!("{} · {} · {}", config.site_name, BUILD_HASH, BUILD_DATE)}</span>
            </footer>
        </div>
    }
}
