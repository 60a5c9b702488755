//! Sort button controller.
//!
//! On load the button matching the current `product_sort` value gets the
//! active styling; clicking any sort button rewrites that one parameter and
//! reloads the page.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use urlstate::{apply_sort, sorting::is_active, QueryParams};

use crate::shared::dom;

const BUTTON_SELECTOR: &str = ".sort-button";
const SORT_KEY_ATTR: &str = "data-sort";

const ACTIVE_CLASS: &str = "active";
const OUTLINE_CLASS: &str = "btn-outline-secondary";
const SOLID_CLASS: &str = "btn-secondary";

/// Wire up every sort button on the page. Buttons without a `data-sort`
/// attribute are skipped; zero matching buttons means zero work.
pub fn init(document: &Document) {
    let Ok(buttons) = document.query_selector_all(BUTTON_SELECTOR) else {
        return;
    };

    let params = QueryParams::parse(&dom::current_search());

    for index in 0..buttons.length() {
        let Some(button) = buttons
            .get(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let Some(sort_key) = button.get_attribute(SORT_KEY_ATTR) else {
            continue;
        };

        if is_active(&params, &sort_key) {
            mark_active(&button);
        }

        let on_click = Closure::wrap(Box::new(move |_: Event| {
            let params = QueryParams::parse(&dom::current_search());
            let next = apply_sort(&params, &sort_key);

            log::debug!("sort -> {}", sort_key);
            dom::navigate_to_search(&next.to_query_string());
        }) as Box<dyn FnMut(Event)>);

        let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        // Listener lives for the rest of the page lifetime.
        on_click.forget();
    }
}

/// Swap the outline styling for the solid "selected" styling.
fn mark_active(button: &Element) {
    let class_list = button.class_list();
    let _ = class_list.add_1(ACTIVE_CLASS);
    let _ = class_list.remove_1(OUTLINE_CLASS);
    let _ = class_list.add_1(SOLID_CLASS);
}
