//! Flash Notice Component
//!
//! Server-rendered notices slide out on close or after a delay.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use hopescope::chrome::{
    Dismissal, AUTO_DISMISS_MS, EXIT_ANIMATION, EXIT_DURATION_MS, FLASH_CLOSE_SELECTOR,
    FLASH_SELECTOR, SLIDE_OUT_KEYFRAMES,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::dom;

/// Add the `slideOut` keyframes to the document head
pub fn inject_keyframes() {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(head) = document.head() else {
        return;
    };

    match document.create_element("style") {
        Ok(style) => {
            style.set_text_content(Some(SLIDE_OUT_KEYFRAMES));
            if let Err(e) = head.append_child(&style) {
                dom::log_error(&format!("Failed to inject keyframes: {:?}", e));
            }
        }
        Err(e) => dom::log_error(&format!("Failed to create style element: {:?}", e)),
    }
}

/// Arm every notice on the page
pub fn init() {
    let Some(document) = dom::document() else {
        return;
    };
    let Ok(list) = document.query_selector_all(FLASH_SELECTOR) else {
        return;
    };

    for element in dom::elements(list) {
        if let Ok(element) = element.dyn_into::<HtmlElement>() {
            FlashNotice::arm(element);
        }
    }
}

struct FlashNotice {
    element: HtmlElement,
    dismissal: Dismissal,
}

impl FlashNotice {
    fn arm(element: HtmlElement) {
        let notice = Rc::new(Self {
            element,
            dismissal: Dismissal::new(),
        });

        if let Ok(Some(close)) = notice.element.query_selector(FLASH_CLOSE_SELECTOR) {
            let target = Rc::clone(&notice);
            let on_close = Closure::wrap(Box::new(move || {
                target.dismiss();
            }) as Box<dyn FnMut()>);
            if let Err(e) =
                close.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())
            {
                dom::log_error(&format!("Failed to bind flash close: {:?}", e));
            }
            on_close.forget();
        }

        Timeout::new(AUTO_DISMISS_MS, move || notice.dismiss()).forget();
    }

    /// Play the exit animation, then remove the element
    fn dismiss(&self) {
        if !self.dismissal.begin() {
            return;
        }

        let _ = self.element.style().set_property("animation", EXIT_ANIMATION);
        let element = self.element.clone();
        Timeout::new(EXIT_DURATION_MS, move || element.remove()).forget();
    }
}
