#![warn(missing_docs)]
//! Page glue for the landing page: countdown, booking modal, preloader,
//! intro reveal, mobile call-to-action, and the debug overlay.
//!
//! State types are plain and time-driven so they can be tested without a
//! window; the egui drawing lives in [`widgets`] and [`overlay`].

pub mod countdown;
pub mod cta;
pub mod modal;
pub mod overlay;
pub mod preloader;
pub mod reveal;
pub mod widgets;

pub use countdown::{Countdown, CountdownError, CountdownParts, CountdownState, STARTED_LABEL};
pub use cta::{MobileCta, CTA_VISIBILITY_THRESHOLD};
pub use modal::{BookingModal, ModalClick};
pub use overlay::{DebugOverlay, SceneStats};
pub use preloader::{Preloader, PreloaderPhase, PRELOADER_FADE};
pub use reveal::{IntroReveal, PanelReveal, REVEAL_DURATION, REVEAL_OFFSET, REVEAL_STAGGER};
pub use widgets::{booking_modal_ui, countdown_ui, preloader_ui, ACCENT};
