//! Navigation Component
//!
//! Theme toggle and mobile hamburger menu in the page header.

use std::rc::Rc;

use hopescope::chrome::{
    hamburger_styles, Theme, ThemeSwitch, HAMBURGER_ID, MENU_ACTIVE_CLASS, NAV_MENU_ID,
    THEME_ATTRIBUTE, THEME_ICON_ID, THEME_TOGGLE_ID,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom;
use crate::state::LocalStore;

/// Apply the saved theme and wire the toggle button
pub fn init_theme() {
    let switch = ThemeSwitch::load(LocalStore::open());
    apply_theme(switch.current());

    let Some(toggle) = dom::element_by_id::<Element>(THEME_TOGGLE_ID) else {
        return;
    };

    let switch = Rc::new(switch);
    let on_click = Closure::wrap(Box::new(move || {
        let theme = match switch.toggle() {
            Ok(theme) => theme,
            Err(e) => {
                dom::log_error(&format!("Failed to save theme: {}", e));
                switch.current()
            }
        };
        apply_theme(theme);
    }) as Box<dyn FnMut()>);

    if let Err(e) = toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
    {
        dom::log_error(&format!("Failed to bind theme toggle: {:?}", e));
    }
    on_click.forget();
}

/// Set `data-theme` on the root element and swap the toggle icon
pub fn apply_theme(theme: Theme) {
    let Some(root) = dom::document().and_then(|d| d.document_element()) else {
        return;
    };
    let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());

    if let Some(icon) = dom::element_by_id::<Element>(THEME_ICON_ID) {
        icon.set_text_content(Some(theme.icon()));
    }
}

/// Wire the hamburger to open and close the navigation menu
pub fn init_menu() {
    let (Some(hamburger), Some(menu)) = (
        dom::element_by_id::<Element>(HAMBURGER_ID),
        dom::element_by_id::<Element>(NAV_MENU_ID),
    ) else {
        return;
    };

    let bars = hamburger.clone();
    let on_click = Closure::wrap(Box::new(move || {
        let open = match menu.class_list().toggle(MENU_ACTIVE_CLASS) {
            Ok(open) => open,
            Err(e) => {
                dom::log_error(&format!("Failed to toggle menu: {:?}", e));
                return;
            }
        };
        set_bars(&bars, open);
    }) as Box<dyn FnMut()>);

    if let Err(e) =
        hamburger.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
    {
        dom::log_error(&format!("Failed to bind menu toggle: {:?}", e));
    }
    on_click.forget();
}

fn set_bars(hamburger: &Element, open: bool) {
    let Ok(spans) = hamburger.query_selector_all("span") else {
        return;
    };

    let bars = dom::elements(spans)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok());

    for (bar, decl) in bars.zip(hamburger_styles(open)) {
        dom::set_styles(&bar, std::slice::from_ref(decl));
    }
}
