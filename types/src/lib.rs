//! Core domain types for Terra - no IO, no async.
//!
//! Everything in this crate is pure data and pure state transitions:
//! navigation targets, carousel indexing, the contact form and its
//! submission state machine, and animation timing. IO (the mail relay,
//! the terminal) lives in the crates above.

mod animation;
mod carousel;
mod contact;
mod nav;
mod ui;

pub use animation::{EffectTimer, ease_out_cubic, normalized_progress};
pub use carousel::CarouselState;
pub use contact::{
    ContactField, ContactForm, MailPayload, SubmissionStatus, SubmitDecision, status_msg,
};
pub use nav::{NavAction, PageId, SectionId};
pub use ui::UiOptions;
