/// News Dashboard - client-side filtering and search for a static news page
/// Built with Rust + WASM + Yew

pub mod article;
pub mod browser;
pub mod config;
pub mod debounce;
pub mod error;
pub mod extract;
pub mod highlight;
pub mod search;
pub mod shortcuts;
pub mod ui;
pub mod url_state;
pub mod view;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Wire up the page: category navigation, search box, shortcuts and URL state
#[wasm_bindgen]
pub fn start_dashboard(config: JsValue) -> Result<(), JsValue> {
    browser::start(config).map_err(JsValue::from)
}

// Re-export the highlighter for page scripts
#[wasm_bindgen]
pub fn highlight(text: &str, query: &str) -> String {
    highlight::highlight_html(text, query)
}
