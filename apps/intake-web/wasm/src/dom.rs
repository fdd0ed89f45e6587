//! Small DOM helpers shared by the page components

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window object available"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document object available"))
}

/// First match for `selector`; an invalid selector counts as no match
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// First match for `selector` below `root`
pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// Every match for `selector`, in document order
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Element by id, cast to the expected element type
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Attach a listener for the lifetime of the page
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Page-lifetime listener, never removed
    closure.forget();
    Ok(())
}

// WASM-specific tests that run in a browser environment
#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_query_invalid_selector_is_none() {
        let doc = document().unwrap();
        assert!(query(&doc, "#").is_none());
        assert!(query_all(&doc, "[[[").is_empty());
    }

    #[wasm_bindgen_test]
    fn test_listen_dispatches() {
        let doc = document().unwrap();
        let el = doc.create_element("div").unwrap();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        listen(&el, "ping", move |_| counter.set(counter.get() + 1)).unwrap();

        el.dispatch_event(&Event::new("ping").unwrap()).unwrap();
        el.dispatch_event(&Event::new("ping").unwrap()).unwrap();
        assert_eq!(hits.get(), 2);
    }
}
