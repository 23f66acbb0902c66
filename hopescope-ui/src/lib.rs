//! HopeScope Page Behaviors
//!
//! WebAssembly module loaded by every HopeScope page. It binds to the
//! server-rendered markup by element id and class:
//!
//! - Chat widgets (`chatbot-container`, `chatbot-rectangle`)
//! - Sentiment doughnut chart (`sentimentChart`, fed by `sentimentData`)
//! - Theme toggle, mobile menu, flash notices, scroll fade-ins
//!
//! # Architecture
//!
//! The behaviors are independent. Each one looks for its elements at
//! startup and quietly does nothing when the page does not carry them. All
//! decisions (fetch cycle, reply handling, chart math, theme state) come
//! from the `hopescope` crate; this crate only touches the DOM.

use wasm_bindgen::prelude::*;

pub mod api;
pub mod components;
pub mod dom;
pub mod state;

use hopescope::chat::WIDGETS;

/// Module entry point
#[wasm_bindgen(start)]
pub fn start() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Keyframes go in as soon as the module runs, before the DOM is ready
    components::flash::inject_keyframes();

    dom::on_ready(boot);
}

/// Attach every behavior once the document is parsed
fn boot() {
    components::nav::init_theme();
    components::nav::init_menu();
    components::flash::init();
    components::reveal::init();

    for widget in WIDGETS {
        components::chat::init(widget.container);
    }

    components::chart::init();
}
