//! Bai Production landing page
//!
//! Client-side rendered Leptos app. Shell logic lives in `lib-core`; this crate wires it
//! into the DOM.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

mod app;
mod components;
mod sections;
mod services;
mod state;
pub mod utils;

use app::App;

/// Id of the static splash in `index.html`, shown until the bundle has loaded.
const LOADING_SCREEN_ID: &str = "leptos-loading";

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Bai Production landing starting");

    if let Err(err) = lib_core::config::init_config() {
        log::error!("[{}] {}, falling back to defaults", err.code(), err);
    }

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
    log::info!("App mounted");
}

/// Hide the loading screen element
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available, cannot hide loading screen");
        return;
    };

    let Some(loading_element) = document.get_element_by_id(LOADING_SCREEN_ID) else {
        log::warn!("Loading element '{}' not found", LOADING_SCREEN_ID);
        return;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("Failed to add 'hidden' class: {:?}", e);
        }
    }

    // Also set display:none as backup
    if let Err(e) = loading_element.set_attribute("style", "display: none !important;") {
        log::warn!("Failed to set loading screen style: {:?}", e);
    }

    log::debug!("Loading screen hidden");
}
