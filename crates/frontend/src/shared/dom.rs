//! Window, document and location helpers shared by the page controllers.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Current query string as the browser reports it (leading `?` included),
/// empty when window is not available.
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Assign a new query string to the location. The browser turns this into a
/// full navigation, so nothing after the call is expected to run.
pub fn navigate_to_search(query: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_search(query);
    }
}

/// Run `f` once the DOM is parseable: immediately if the document is past
/// `loading`, otherwise from a one-shot DOMContentLoaded listener.
pub fn on_dom_ready(f: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        let closure = Closure::once(f);
        let _ = document.add_event_listener_with_callback(
            "DOMContentLoaded",
            closure.as_ref().unchecked_ref(),
        );
        closure.forget();
    } else {
        f();
    }
}
