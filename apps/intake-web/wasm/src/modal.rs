//! Patent details modal binding
//!
//! Card metadata comes from `data-*` attributes on the enclosing
//! `.patent-card`. All listeners share one controller; if the modal root is
//! missing none of them are attached.

use crate::dom::{by_id, listen, query_all, query_in};
use intake_core::{CardData, CloseTrigger, ModalContent, ModalView, PatentModal, SiteConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, KeyboardEvent};

/// Modal root, display slots and close control
pub struct ModalElements {
    root: HtmlElement,
    image: Option<HtmlImageElement>,
    title: Option<Element>,
    abstract_text: Option<Element>,
    number: Option<Element>,
    inventor: Option<Element>,
    filing: Option<Element>,
    status: Option<Element>,
    close: Option<HtmlElement>,
    body: Option<HtmlElement>,
    open_class: String,
}

impl ModalElements {
    pub fn find(document: &Document, config: &SiteConfig) -> Option<Self> {
        let root: HtmlElement = by_id(document, &config.modal_id)?;
        let close = query_in(&root, &config.close_selector).and_then(|el| el.dyn_into().ok());
        Some(Self {
            image: by_id(document, &config.modal_image_id),
            title: by_id(document, &config.modal_title_id),
            abstract_text: by_id(document, &config.modal_abstract_id),
            number: by_id(document, &config.modal_number_id),
            inventor: by_id(document, &config.modal_inventor_id),
            filing: by_id(document, &config.modal_filing_id),
            status: by_id(document, &config.modal_status_id),
            close,
            body: document.body(),
            open_class: config.open_class.clone(),
            root,
        })
    }
}

fn set_text(slot: &Option<Element>, text: &str) {
    if let Some(el) = slot {
        el.set_text_content(Some(text));
    }
}

impl ModalView for ModalElements {
    fn render(&mut self, content: &ModalContent) {
        set_text(&self.title, &content.title);
        set_text(&self.abstract_text, &content.abstract_text);
        if let Some(image) = &self.image {
            image.set_src(&content.image_src);
            image.set_alt(&content.image_alt);
        }
        set_text(&self.number, &content.number);
        set_text(&self.inventor, &content.inventor);
        set_text(&self.filing, &content.filing);
        set_text(&self.status, &content.status);
    }

    fn set_open(&mut self, open: bool) {
        let classes = self.root.class_list();
        let _ = if open {
            classes.add_1(&self.open_class)
        } else {
            classes.remove_1(&self.open_class)
        };
        let _ = self
            .root
            .set_attribute("aria-hidden", if open { "false" } else { "true" });
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let Some(body) = &self.body else {
            return;
        };
        let style = body.style();
        let _ = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
    }

    fn focus_close(&mut self) {
        if let Some(close) = &self.close {
            let _ = close.focus();
        }
    }
}

/// Read a card's attributes and DOM fallbacks
pub fn read_card(card: &Element, config: &SiteConfig) -> CardData {
    let data = |name: &str| card.get_attribute(&format!("data-{}", name));
    CardData {
        image: data("image"),
        number: data("number"),
        inventor: data("inventor"),
        filing: data("filing"),
        status: data("status"),
        abstract_text: data("abstract"),
        description: query_in(card, &config.card_description_selector)
            .and_then(|p| p.text_content()),
        logo_src: query_in(card, &config.card_logo_selector)
            .and_then(|img| img.get_attribute("src")),
    }
}

/// Modal state plus the elements it drives
pub struct ModalController {
    pub modal: PatentModal,
    pub view: ModalElements,
}

pub type SharedModal = Rc<RefCell<ModalController>>;

/// Wire details buttons, close control, backdrop and Escape
///
/// Returns `None` when the modal root is not on the page.
pub fn mount(document: &Document, config: &SiteConfig) -> Result<Option<SharedModal>, JsValue> {
    let Some(view) = ModalElements::find(document, config) else {
        return Ok(None);
    };
    let root = view.root.clone();
    let close = view.close.clone();
    let controller = Rc::new(RefCell::new(ModalController {
        modal: PatentModal::new(&config.placeholder_image),
        view,
    }));

    for button in query_all(document, &config.details_selector) {
        let shared = controller.clone();
        let config = config.clone();
        let trigger = button.clone();
        listen(&button, "click", move |event| {
            event.prevent_default();
            let card = trigger
                .closest(&config.card_selector)
                .ok()
                .flatten()
                .map(|card| read_card(&card, &config));
            let mut guard = shared.borrow_mut();
            let ModalController { modal, view } = &mut *guard;
            modal.open_card(view, card.as_ref());
        })?;
    }

    let shared = controller.clone();
    let backdrop: JsValue = root.clone().into();
    listen(&root, "click", move |event| {
        let on_backdrop = event
            .target()
            .is_some_and(|target| JsValue::from(target) == backdrop);
        let mut guard = shared.borrow_mut();
        let ModalController { modal, view } = &mut *guard;
        modal.handle_backdrop_click(view, on_backdrop);
    })?;

    if let Some(close) = close {
        let shared = controller.clone();
        listen(&close, "click", move |_| {
            let mut guard = shared.borrow_mut();
            let ModalController { modal, view } = &mut *guard;
            modal.close(view, CloseTrigger::CloseButton);
        })?;
    }

    let shared = controller.clone();
    listen(document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        let mut guard = shared.borrow_mut();
        let ModalController { modal, view } = &mut *guard;
        modal.handle_key(view, &key);
    })?;

    Ok(Some(controller))
}
