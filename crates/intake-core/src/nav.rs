//! Mobile navigation toggle

/// Inline display value of an open nav panel
pub const OPEN_DISPLAY: &str = "flex";
/// Inline display value of a closed nav panel
pub const CLOSED_DISPLAY: &str = "none";

/// Handles for the hamburger trigger and the panel it controls
pub trait NavView {
    /// Current inline display value of the panel
    fn display(&self) -> String;

    fn set_display(&mut self, display: &str);

    /// Write `aria-expanded` on the trigger
    fn set_expanded(&mut self, expanded: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NavToggle;

impl NavToggle {
    /// The panel counts as open only when shown in flex mode
    pub fn is_open<V: NavView + ?Sized>(view: &V) -> bool {
        view.display() == OPEN_DISPLAY
    }

    /// Flip the panel and return the new open state
    pub fn toggle<V: NavView + ?Sized>(view: &mut V) -> bool {
        let open = !Self::is_open(view);
        view.set_display(if open { OPEN_DISPLAY } else { CLOSED_DISPLAY });
        view.set_expanded(if open { "true" } else { "false" });
        open
    }
}
