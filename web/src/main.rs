//! Cyber Clan Landing - Leptos Frontend
//!
//! Browser entry point for the NACOS student association web app: sets up
//! logging, hides the static loading screen and mounts the Leptos app.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Cyber Clan web app starting...");

    hide_loading_screen();

    // Mount the Leptos app
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading screen once the WASM bundle is running.
fn hide_loading_screen() {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let document = match window.document() {
        Some(d) => d,
        None => {
            log::warn!("no document available, cannot hide loading screen");
            return;
        }
    };

    if let Some(loading_element) = document.get_element_by_id("loading-screen") {
        if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
            html_element.class_list().add_1("hidden").ok();
        }
        // Also set display:none as backup
        loading_element
            .set_attribute("style", "display: none;")
            .ok();
    } else {
        log::warn!("loading screen element not found");
    }
}
