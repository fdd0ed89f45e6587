//! Application form binding
//!
//! Reads the thirteen controls by id, renders inline errors into the
//! `.err[data-for]` slots and persists accepted applications to
//! `localStorage`.

use crate::dom::{listen, query};
use crate::storage::LocalStore;
use chrono::Utc;
use intake_core::{ApplicationForm, Field, FormView, SiteConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

/// Live form markup
pub struct FormElements {
    document: Document,
    form: HtmlFormElement,
    status: Option<HtmlElement>,
    config: SiteConfig,
}

impl FormElements {
    pub fn find(document: &Document, config: &SiteConfig) -> Option<Self> {
        let form = document
            .get_element_by_id(&config.form_id)?
            .dyn_into::<HtmlFormElement>()
            .ok()?;
        let status = document
            .get_element_by_id(&config.status_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        Some(Self {
            document: document.clone(),
            form,
            status,
            config: config.clone(),
        })
    }

    fn control(&self, field: Field) -> Option<Element> {
        self.document.get_element_by_id(field.as_str())
    }
}

/// Value of an input, textarea or select
fn control_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        Some(area.value())
    } else {
        element
            .dyn_ref::<HtmlSelectElement>()
            .map(HtmlSelectElement::value)
    }
}

impl FormView for FormElements {
    fn read_text(&self, field: Field) -> Option<String> {
        self.control(field).and_then(|el| control_value(&el))
    }

    fn read_checked(&self, field: Field) -> Option<bool> {
        self.control(field)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.checked())
    }

    fn set_field_error(&mut self, field: Field, message: &str) {
        if let Some(slot) = query(&self.document, &self.config.error_slot_selector(field)) {
            slot.set_text_content(Some(message));
        }
    }

    fn set_status(&mut self, text: &str, color: &str) {
        if let Some(status) = &self.status {
            status.set_text_content(Some(text));
            let _ = status.style().set_property("color", color);
        }
    }

    fn reset(&mut self) {
        self.form.reset();
    }
}

pub type SharedForm = Rc<RefCell<ApplicationForm<LocalStore>>>;

/// Wire the submit handler; `None` if the form is not on the page
pub fn mount(document: &Document, config: &SiteConfig) -> Result<Option<SharedForm>, JsValue> {
    let Some(mut view) = FormElements::find(document, config) else {
        return Ok(None);
    };
    let app: SharedForm = Rc::new(RefCell::new(ApplicationForm::new(LocalStore, config)));
    let form = view.form.clone();

    let handler_app = app.clone();
    listen(&form, "submit", move |event| {
        event.prevent_default();
        let result = handler_app.borrow_mut().submit(&mut view, Utc::now());
        if let Err(e) = result {
            web_sys::console::error_1(&format!("Application not saved: {}", e).into());
        }
    })?;

    Ok(Some(app))
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use crate::dom::{by_id, document};
    use intake_core::form::{ACCEPTED_MESSAGE, REJECTED_MESSAGE};
    use intake_core::{KeyValueStore, INVALID_FIELD_MESSAGE};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const MARKUP: &str = r#"
        <form id="t-applyForm">
          <input id="name"><span class="t-err" data-for="name"></span>
          <input id="email"><span class="t-err" data-for="email"></span>
          <input id="affiliation"><span class="t-err" data-for="affiliation"></span>
          <select id="cohort"><option value="">-</option><option value="2026">2026</option></select>
          <input id="stage"><input id="trl">
          <textarea id="problem"></textarea><textarea id="solution"></textarea>
          <textarea id="ip"></textarea><textarea id="reg"></textarea>
          <input id="fundingLane"><input id="ask">
          <input id="consent" type="checkbox"><span class="t-err" data-for="consent"></span>
        </form>
        <p id="t-formStatus"></p>
    "#;

    fn fixture(key: &str) -> (Document, Element, SiteConfig) {
        let doc = document().unwrap();
        let root = doc.create_element("div").unwrap();
        root.set_inner_html(MARKUP);
        doc.body().unwrap().append_child(&root).unwrap();
        let config = SiteConfig {
            form_id: "t-applyForm".to_string(),
            status_id: "t-formStatus".to_string(),
            error_slot_class: "t-err".to_string(),
            storage_key: key.to_string(),
            ..Default::default()
        };
        let _ = LocalStore.remove(key);
        (doc, root, config)
    }

    fn set(doc: &Document, id: &str, value: &str) {
        let el = doc.get_element_by_id(id).unwrap();
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        }
    }

    fn fill_valid(doc: &Document) {
        set(doc, "name", "Mae Jemison");
        set(doc, "email", "mae@space.org");
        set(doc, "affiliation", "NASA");
        set(doc, "cohort", "2026");
        set(doc, "stage", "growth");
        set(doc, "trl", "7");
        set(doc, "fundingLane", "venture");
        by_id::<HtmlInputElement>(doc, "consent").unwrap().set_checked(true);
    }

    fn submit(doc: &Document, config: &SiteConfig) {
        let form: HtmlFormElement = by_id(doc, &config.form_id).unwrap();
        let event = web_sys::Event::new_with_event_init_dict("submit", &{
            let init = web_sys::EventInit::new();
            init.set_cancelable(true);
            init
        })
        .unwrap();
        form.dispatch_event(&event).unwrap();
        assert!(event.default_prevented());
    }

    #[wasm_bindgen_test]
    fn test_rejected_submit() {
        let (doc, root, config) = fixture("intake_test_rejected");
        let app = mount(&doc, &config).unwrap().unwrap();
        fill_valid(&doc);
        by_id::<HtmlInputElement>(&doc, "consent").unwrap().set_checked(false);

        submit(&doc, &config);

        let status: HtmlElement = by_id(&doc, "t-formStatus").unwrap();
        assert_eq!(status.text_content().as_deref(), Some(REJECTED_MESSAGE));
        let consent_err = query(&doc, ".t-err[data-for=\"consent\"]").unwrap();
        assert_eq!(consent_err.text_content().as_deref(), Some(INVALID_FIELD_MESSAGE));
        assert_eq!(
            by_id::<HtmlInputElement>(&doc, "name").unwrap().value(),
            "Mae Jemison"
        );
        assert!(app.borrow().submissions().unwrap().is_empty());
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_accepted_submit_resets_form() {
        let (doc, root, config) = fixture("intake_test_accepted");
        let app = mount(&doc, &config).unwrap().unwrap();
        fill_valid(&doc);

        submit(&doc, &config);

        let status: HtmlElement = by_id(&doc, "t-formStatus").unwrap();
        assert_eq!(status.text_content().as_deref(), Some(ACCEPTED_MESSAGE));
        assert_eq!(by_id::<HtmlInputElement>(&doc, "name").unwrap().value(), "");
        assert!(!by_id::<HtmlInputElement>(&doc, "consent").unwrap().checked());

        let records = app.borrow().submissions().unwrap().records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].payload.cohort, "2026");
        assert!(records[0].accepted_at().is_some());

        let _ = LocalStore.remove(&config.storage_key);
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_missing_form_is_not_mounted() {
        let doc = document().unwrap();
        let config = SiteConfig {
            form_id: "no-such-form".to_string(),
            ..Default::default()
        };
        assert!(mount(&doc, &config).unwrap().is_none());
    }
}
