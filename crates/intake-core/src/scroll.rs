//! Smooth scrolling for in-page anchors

/// Document access needed to resolve and scroll to a fragment target
pub trait ScrollView {
    /// Scroll the first element matching `selector` into view, smoothly and
    /// aligned to its start edge. Returns false if nothing matched or the
    /// selector is not valid.
    fn scroll_to(&mut self, selector: &str) -> bool;
}

/// What the click handler should do with the browser default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// Target found and scrolled; suppress the jump
    Scrolled,
    /// Let the browser navigate as usual
    Default,
}

impl ScrollOutcome {
    pub fn prevents_default(&self) -> bool {
        matches!(self, ScrollOutcome::Scrolled)
    }
}

/// The selector to resolve for an anchor `href`, if it is an in-page link
pub fn fragment_selector(href: &str) -> Option<&str> {
    href.starts_with('#').then_some(href)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothScroll;

impl SmoothScroll {
    pub fn handle_click<V: ScrollView + ?Sized>(view: &mut V, href: &str) -> ScrollOutcome {
        match fragment_selector(href) {
            Some(selector) if view.scroll_to(selector) => ScrollOutcome::Scrolled,
            _ => ScrollOutcome::Default,
        }
    }
}
