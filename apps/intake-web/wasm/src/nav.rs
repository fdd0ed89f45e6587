//! Hamburger menu binding

use crate::dom::{listen, query};
use intake_core::{NavToggle, NavView, SiteConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// Trigger and panel elements of the mobile nav
pub struct NavElements {
    trigger: HtmlElement,
    panel: HtmlElement,
}

impl NavElements {
    pub fn find(document: &Document, config: &SiteConfig) -> Option<Self> {
        let trigger = query(document, &config.hamburger_selector)?.dyn_into().ok()?;
        let panel = query(document, &config.nav_selector)?.dyn_into().ok()?;
        Some(Self { trigger, panel })
    }
}

impl NavView for NavElements {
    fn display(&self) -> String {
        self.panel
            .style()
            .get_property_value("display")
            .unwrap_or_default()
    }

    fn set_display(&mut self, display: &str) {
        let _ = self.panel.style().set_property("display", display);
    }

    fn set_expanded(&mut self, expanded: &str) {
        let _ = self.trigger.set_attribute("aria-expanded", expanded);
    }
}

/// Wire the hamburger click; returns false if the markup is not on the page
pub fn mount(document: &Document, config: &SiteConfig) -> Result<bool, JsValue> {
    let Some(mut nav) = NavElements::find(document, config) else {
        return Ok(false);
    };
    let trigger = nav.trigger.clone();
    listen(&trigger, "click", move |_| {
        NavToggle::toggle(&mut nav);
    })?;
    Ok(true)
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use crate::dom::document;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fixture(document: &Document) -> (web_sys::Element, SiteConfig) {
        let root = document.create_element("div").unwrap();
        root.set_inner_html(
            r#"<button class="t-hamburger" aria-expanded="false"></button>
               <nav class="t-nav"></nav>"#,
        );
        document.body().unwrap().append_child(&root).unwrap();
        let config = SiteConfig {
            hamburger_selector: ".t-hamburger".to_string(),
            nav_selector: ".t-nav".to_string(),
            ..Default::default()
        };
        (root, config)
    }

    #[wasm_bindgen_test]
    fn test_click_toggles_twice_back() {
        let doc = document().unwrap();
        let (root, config) = fixture(&doc);
        assert!(mount(&doc, &config).unwrap());

        let trigger: HtmlElement = query(&doc, ".t-hamburger").unwrap().dyn_into().unwrap();
        let panel: HtmlElement = query(&doc, ".t-nav").unwrap().dyn_into().unwrap();

        trigger.click();
        assert_eq!(panel.style().get_property_value("display").unwrap(), "flex");
        assert_eq!(trigger.get_attribute("aria-expanded").as_deref(), Some("true"));

        trigger.click();
        assert_eq!(panel.style().get_property_value("display").unwrap(), "none");
        assert_eq!(trigger.get_attribute("aria-expanded").as_deref(), Some("false"));

        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_missing_trigger_is_not_mounted() {
        let doc = document().unwrap();
        let config = SiteConfig {
            hamburger_selector: ".not-on-page".to_string(),
            ..Default::default()
        };
        assert!(!mount(&doc, &config).unwrap());
    }
}
