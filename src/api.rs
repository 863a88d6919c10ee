//! Network and document bindings for the page
//!
//! Catalog fetches, preload hints and background worker registration. All
//! requests are relative to the site origin.

use arcade_core::catalog::{fetch_catalog, preload_targets, CatalogSource};
use arcade_core::LoadError;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

// ============ HTTP Fetch ============

/// `window.fetch` transport for catalog payloads
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpCatalogSource;

impl CatalogSource for HttpCatalogSource {
    async fn fetch_text(&self, path: &str) -> Result<String, LoadError> {
        http_get_text(path).await
    }
}

fn transport(e: JsValue) -> LoadError {
    LoadError::Transport(format!("{:?}", e))
}

async fn http_get_text(path: &str) -> Result<String, LoadError> {
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    // Fetch priority is not exposed by web-sys; set the dictionary member directly
    js_sys::Reflect::set(&opts, &JsValue::from_str("priority"), &JsValue::from_str("high"))
        .map_err(transport)?;

    let request = Request::new_with_str_and_init(path, &opts).map_err(transport)?;

    let window = web_sys::window().ok_or_else(|| LoadError::Transport("No window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;

    let resp: Response = resp_value.dyn_into().map_err(transport)?;
    tracing::debug!(path, status = resp.status(), "fetch");

    if !resp.ok() {
        return Err(LoadError::Status(resp.status()));
    }

    let body = JsFuture::from(resp.text().map_err(transport)?)
        .await
        .map_err(transport)?;

    body.as_string()
        .ok_or_else(|| LoadError::Parse("response body is not text".to_string()))
}

// ============ Preload Hints ============

/// Fetch the preload copy of the catalog and register a
/// `<link rel="preload" as="document">` for every embeddable game URL.
/// Failures are logged only.
pub async fn preload_game_urls(path: &str) {
    match fetch_catalog(&HttpCatalogSource, path).await {
        Ok(games) => {
            let count = append_preload_links(preload_targets(&games));
            tracing::debug!(count, "registered preload hints");
        }
        Err(e) => tracing::error!("Error preloading game URLs: {}", e),
    }
}

fn append_preload_links<'a>(urls: impl Iterator<Item = &'a str>) -> usize {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return 0;
    };
    let Some(head) = document.head() else {
        return 0;
    };

    let mut count = 0;
    for url in urls {
        let Ok(link) = document.create_element("link") else {
            continue;
        };
        let attributes = [
            ("rel", "preload"),
            ("href", url),
            ("as", "document"),
            ("crossorigin", "anonymous"),
        ];
        if attributes.iter().all(|(name, value)| link.set_attribute(name, value).is_ok())
            && head.append_child(&link).is_ok()
        {
            count += 1;
        }
    }
    count
}

// ============ Background Worker ============

/// Register the offline caching worker. The outcome is logged and has no
/// other effect on the page.
pub fn register_service_worker(script: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();

    // `serviceWorker` is missing on insecure origins
    let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false);
    if !supported {
        tracing::debug!("service workers unsupported, skipping registration");
        return;
    }

    let promise = navigator.service_worker().register(script);
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => tracing::info!("Service Worker registered"),
            Err(e) => tracing::error!("Service Worker registration failed: {:?}", e),
        }
    });
}

// ============ Document ============

/// Text of an inline `<script type="application/json">` or similar element
pub fn element_text(id: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .text_content()
}

/// `data-*` attribute on `<body>`
pub fn body_data(name: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .body()?
        .get_attribute(&format!("data-{}", name))
}

/// `(pathname, search)` of the current location
pub fn location() -> (String, String) {
    let location = web_sys::window().map(|w| w.location());
    let path = location.as_ref().and_then(|l| l.pathname().ok()).unwrap_or_default();
    let search = location.as_ref().and_then(|l| l.search().ok()).unwrap_or_default();
    (path, search)
}

pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}
