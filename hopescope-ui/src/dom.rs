//! DOM helpers shared by the components

use hopescope::chrome::StyleDecl;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Element with `id`, cast to the expected interface
pub fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<T>()
        .ok()
}

/// Elements of a `querySelectorAll` result
pub fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Apply inline styles; an empty value clears the property
pub fn set_styles(element: &HtmlElement, decls: &[StyleDecl]) {
    let style = element.style();
    for decl in decls {
        let _ = style.set_property(decl.property, decl.value);
    }
}

pub fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

/// Run `f` once the document has been parsed
pub fn on_ready(f: impl FnOnce() + 'static) {
    let Some(document) = document() else {
        return;
    };

    if document.ready_state() != "loading" {
        f();
        return;
    }

    let callback = Closure::once_into_js(f);
    if let Err(e) =
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
    {
        log_error(&format!("Failed to wait for DOMContentLoaded: {:?}", e));
    }
}
