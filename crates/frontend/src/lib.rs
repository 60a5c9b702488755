pub mod filters;
pub mod shared;
pub mod sorting;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn init() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    shared::dom::on_dom_ready(|| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        filters::init(&document);
        sorting::init(&document);
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    init();
}
