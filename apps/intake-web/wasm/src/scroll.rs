//! Smooth scrolling for `href="#..."` anchors

use crate::dom::{listen, query, query_all};
use intake_core::{ScrollView, SiteConfig, SmoothScroll};
use wasm_bindgen::prelude::*;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

pub struct DocumentScroll {
    document: Document,
}

impl DocumentScroll {
    pub fn new(document: &Document) -> Self {
        Self {
            document: document.clone(),
        }
    }
}

impl ScrollView for DocumentScroll {
    fn scroll_to(&mut self, selector: &str) -> bool {
        let Some(target) = query(&self.document, selector) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Wire every in-page anchor; returns how many were bound
pub fn mount(document: &Document, config: &SiteConfig) -> Result<usize, JsValue> {
    let anchors = query_all(document, &config.anchor_selector);
    for anchor in &anchors {
        let mut view = DocumentScroll::new(document);
        let link = anchor.clone();
        listen(anchor, "click", move |event| {
            // Read at click time so rewritten hrefs are honoured
            let href = link.get_attribute("href").unwrap_or_default();
            if SmoothScroll::handle_click(&mut view, &href).prevents_default() {
                event.prevent_default();
            }
        })?;
    }
    Ok(anchors.len())
}
