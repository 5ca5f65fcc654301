//! Booking modal with a lazily embedded ticketing widget.

use tracing::{debug, info};

/// Where a click on the open modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    /// The dimmed area around the content.
    Backdrop,
    /// The content panel itself.
    Content,
    /// The close button.
    CloseButton,
}

/// Open/closed state of the booking modal.
///
/// The widget is embedded the first time the modal opens and kept for
/// every later open.
#[derive(Debug, Clone)]
pub struct BookingModal {
    widget_url: String,
    open: bool,
    embedded: Option<String>,
    embed_count: u32,
}

impl BookingModal {
    /// Create a closed modal that will embed `widget_url` on first open.
    pub fn new(widget_url: impl Into<String>) -> Self {
        Self {
            widget_url: widget_url.into(),
            open: false,
            embedded: None,
            embed_count: 0,
        }
    }

    /// Open from any booking trigger.
    pub fn open(&mut self) {
        if self.embedded.is_none() {
            info!(url = %self.widget_url, "embedding booking widget");
            self.embedded = Some(self.widget_url.clone());
            self.embed_count += 1;
        }
        self.open = true;
    }

    /// Close the modal. The embedded widget stays loaded.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Route a click while open. Returns `true` if it closed the modal.
    pub fn click(&mut self, target: ModalClick) -> bool {
        if !self.open {
            return false;
        }
        match target {
            ModalClick::Backdrop | ModalClick::CloseButton => {
                debug!(?target, "closing booking modal");
                self.close();
                true
            }
            ModalClick::Content => false,
        }
    }

    /// Whether the modal is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// URL of the embedded widget, once embedded.
    pub fn embedded_url(&self) -> Option<&str> {
        self.embedded.as_deref()
    }

    /// How many times the widget has been embedded (0 or 1).
    pub fn embed_count(&self) -> u32 {
        self.embed_count
    }

    /// Configured widget URL.
    pub fn widget_url(&self) -> &str {
        &self.widget_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.test/widget";

    #[test]
    fn starts_closed_without_embed() {
        let modal = BookingModal::new(URL);
        assert!(!modal.is_open());
        assert_eq!(modal.embedded_url(), None);
        assert_eq!(modal.embed_count(), 0);
    }

    #[test]
    fn embeds_once_across_reopens() {
        let mut modal = BookingModal::new(URL);
        modal.open();
        modal.close();
        modal.open();
        modal.open();
        assert!(modal.is_open());
        assert_eq!(modal.embed_count(), 1);
        assert_eq!(modal.embedded_url(), Some(URL));
    }

    #[test]
    fn backdrop_closes_content_does_not() {
        let mut modal = BookingModal::new(URL);
        modal.open();
        assert!(!modal.click(ModalClick::Content));
        assert!(modal.is_open());
        assert!(modal.click(ModalClick::Backdrop));
        assert!(!modal.is_open());
    }

    #[test]
    fn close_button_closes() {
        let mut modal = BookingModal::new(URL);
        modal.open();
        assert!(modal.click(ModalClick::CloseButton));
        assert!(!modal.click(ModalClick::CloseButton));
    }
}
