//! Marks cards `visible` while at least half on screen (narrow viewports only)

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const VISIBLE_RATIO: f64 = 0.5;

struct ActiveObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

thread_local! {
    static ACTIVE: RefCell<Option<ActiveObserver>> = const { RefCell::new(None) };
}

/// Observe every `.game-card` currently in the document, replacing any
/// previous observer. Does nothing above `breakpoint` CSS pixels.
pub fn observe_cards(breakpoint: u32) {
    ACTIVE.with(|active| {
        if let Some(previous) = active.borrow_mut().take() {
            previous.observer.disconnect();
        }
        match attach(breakpoint) {
            Ok(next) => *active.borrow_mut() = next,
            Err(e) => tracing::warn!("card observer unavailable: {:?}", e),
        }
    });
}

fn attach(breakpoint: u32) -> Result<Option<ActiveObserver>, JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    if width > f64::from(breakpoint) {
        return Ok(None);
    }

    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(|entries: js_sys::Array| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let classes = entry.target().class_list();
            let result = if entry.intersection_ratio() >= VISIBLE_RATIO {
                classes.add_1("visible")
            } else {
                classes.remove_1("visible")
            };
            if let Err(e) = result {
                tracing::debug!("class toggle failed: {:?}", e);
            }
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(VISIBLE_RATIO));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

    if let Some(document) = window.document() {
        let cards = document.query_selector_all(".game-card")?;
        for i in 0..cards.length() {
            if let Some(card) = cards.item(i) {
                observer.observe(card.unchecked_ref());
            }
        }
    }

    Ok(Some(ActiveObserver {
        observer,
        _callback: callback,
    }))
}
