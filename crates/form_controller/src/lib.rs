//! Framework-neutral controller for the cardiovascular risk prediction form.
//!
//! Adapters (browser DOM, terminal) implement [`FormSurface`] and feed [`FormEvent`]s in;
//! the controller owns BMI derivation, payload construction, the submission round-trip,
//! result rendering, and the modal.

pub mod bmi;
pub mod config;
pub mod controller;
pub mod decimal;
pub mod form_state;
pub mod memory;
pub mod modal;
pub mod render;
pub mod surface;
pub mod view_state;

pub use config::ControllerSettings;
pub use controller::{
    events::{EventEffect, FormEvent, SubmissionOutcome},
    submission::PendingSubmission,
    FormController,
};
pub use memory::MemoryForm;
pub use modal::ClickTarget;
pub use render::ResultView;
pub use surface::FormSurface;
pub use view_state::{SubmitControl, ViewState};

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
