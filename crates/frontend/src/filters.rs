//! Filter form submit handling.
//!
//! Intercepts the `#filters-form` submit, rebuilds the query string from the
//! current field values via [`urlstate::apply_filters`] and navigates to the
//! result instead of letting the browser post the form.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement};

use urlstate::{apply_filters, FormField, QueryParams};

use crate::shared::dom;

const FORM_ID: &str = "filters-form";
const FIELD_SELECTOR: &str =
    r#"input[type="number"], input[type="text"], input[type="checkbox"]"#;

/// Attach the submit handler to the filter form. A page without the form is
/// a valid page; nothing gets wired up.
pub fn init(document: &Document) {
    let Some(form) = document.get_element_by_id(FORM_ID) else {
        return;
    };

    let form_for_handler = form.clone();
    let on_submit = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();

        let fields = snapshot_fields(&form_for_handler);
        let params = QueryParams::parse(&dom::current_search());
        let next = apply_filters(&params, &fields);

        log::debug!("filters submit -> ?{}", next.to_query_string());
        dom::navigate_to_search(&next.to_query_string());
    }) as Box<dyn FnMut(Event)>);

    let _ = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref());
    // Listener lives for the rest of the page lifetime.
    on_submit.forget();
}

/// Snapshot the form's filter inputs in DOM order.
fn snapshot_fields(form: &Element) -> Vec<FormField> {
    let Ok(inputs) = form.query_selector_all(FIELD_SELECTOR) else {
        return Vec::new();
    };

    let mut fields = Vec::with_capacity(inputs.length() as usize);
    for index in 0..inputs.length() {
        let Some(input) = inputs
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
        else {
            continue;
        };

        if input.type_() == "checkbox" {
            fields.push(FormField::checkbox(
                input.name(),
                input.value(),
                input.checked(),
            ));
        } else {
            fields.push(FormField::value(input.name(), input.value()));
        }
    }
    fields
}
