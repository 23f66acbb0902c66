//! Scroll Reveal Component
//!
//! Fades `.fade-in` sections in the first time they scroll into view.

use hopescope::chrome::{RevealOptions, HIDDEN_STYLES, REVEAL_SELECTOR, SHOWN_STYLES};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;

/// Hide every reveal target and observe it
pub fn init() {
    let Some(document) = dom::document() else {
        return;
    };
    let Ok(list) = document.query_selector_all(REVEAL_SELECTOR) else {
        return;
    };
    let targets: Vec<HtmlElement> = dom::elements(list)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();
    if targets.is_empty() {
        return;
    }

    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }

                let target = entry.target();
                if let Some(element) = target.dyn_ref::<HtmlElement>() {
                    dom::set_styles(element, &SHOWN_STYLES);
                }
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = RevealOptions::default();
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    let observer = match IntersectionObserver::new_with_options(
        on_intersect.as_ref().unchecked_ref(),
        &init,
    ) {
        Ok(observer) => observer,
        Err(e) => {
            dom::log_error(&format!("Failed to create IntersectionObserver: {:?}", e));
            return;
        }
    };
    on_intersect.forget();

    for target in targets {
        dom::set_styles(&target, &HIDDEN_STYLES);
        observer.observe(&target);
    }
}
