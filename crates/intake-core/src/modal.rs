//! Patent details modal
//!
//! The modal is either closed or open. Page scrolling is locked exactly
//! while it is open; every transition updates both together.

use crate::patent::{CardData, ModalContent, PatentInfo};

/// Key value that closes an open modal
pub const ESCAPE_KEY: &str = "Escape";

/// Element handles the modal drives
pub trait ModalView {
    /// Fill every display slot
    fn render(&mut self, content: &ModalContent);

    /// Toggle the open class and `aria-hidden`
    fn set_open(&mut self, open: bool);

    /// Lock or release page scrolling
    fn set_scroll_locked(&mut self, locked: bool);

    /// Move focus to the close control if there is one
    fn focus_close(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalVisibility {
    #[default]
    Closed,
    Open,
}

/// The user actions that close the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Backdrop,
    Escape,
}

#[derive(Debug, Clone)]
pub struct PatentModal {
    visibility: ModalVisibility,
    placeholder_image: String,
}

impl PatentModal {
    pub fn new(placeholder_image: &str) -> Self {
        Self {
            visibility: ModalVisibility::Closed,
            placeholder_image: placeholder_image.to_string(),
        }
    }

    pub fn visibility(&self) -> ModalVisibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == ModalVisibility::Open
    }

    /// Scroll lock mirrors visibility
    pub fn is_scroll_locked(&self) -> bool {
        self.is_open()
    }

    /// Open from a details control; `None` means no enclosing card was found
    pub fn open_card<V: ModalView + ?Sized>(&mut self, view: &mut V, card: Option<&CardData>) -> bool {
        match card {
            Some(card) => {
                let info = PatentInfo::from_card(card, &self.placeholder_image);
                self.open(view, &info);
                true
            }
            None => {
                tracing::debug!("Details control outside a patent card, ignoring");
                false
            }
        }
    }

    /// Populate every slot from `info` and show the modal
    pub fn open<V: ModalView + ?Sized>(&mut self, view: &mut V, info: &PatentInfo) {
        let content = ModalContent::from_info(info, &self.placeholder_image);
        view.render(&content);
        view.set_open(true);
        view.set_scroll_locked(true);
        view.focus_close();
        self.visibility = ModalVisibility::Open;
        tracing::debug!(title = %content.title, "Patent modal opened");
    }

    /// Close the modal; returns whether it was open
    ///
    /// Button and backdrop always reapply the closed state. Escape only acts
    /// on an open modal.
    pub fn close<V: ModalView + ?Sized>(&mut self, view: &mut V, trigger: CloseTrigger) -> bool {
        let was_open = self.is_open();
        if trigger == CloseTrigger::Escape && !was_open {
            return false;
        }
        view.set_open(false);
        view.set_scroll_locked(false);
        self.visibility = ModalVisibility::Closed;
        if was_open {
            tracing::debug!(?trigger, "Patent modal closed");
        }
        was_open
    }

    /// Keydown anywhere on the page
    pub fn handle_key<V: ModalView + ?Sized>(&mut self, view: &mut V, key: &str) -> bool {
        key == ESCAPE_KEY && self.close(view, CloseTrigger::Escape)
    }

    /// Click on the modal root; only a click on the backdrop itself closes
    pub fn handle_backdrop_click<V: ModalView + ?Sized>(
        &mut self,
        view: &mut V,
        target_is_backdrop: bool,
    ) -> bool {
        target_is_backdrop && self.close(view, CloseTrigger::Backdrop)
    }
}
