//! Page events delivered to the controller and what handling them produced.

use shared::domain::RiskLevel;

use crate::{controller::submission::PendingSubmission, modal::ClickTarget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// An input's value changed.
    Input { field: String },
    /// The form was submitted; default navigation is already suppressed by the adapter.
    Submit,
    Click(ClickTarget),
}

impl FormEvent {
    pub fn input(field: impl Into<String>) -> Self {
        FormEvent::Input {
            field: field.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FormEvent::Input { .. } => "input",
            FormEvent::Submit => "submit",
            FormEvent::Click(_) => "click",
        }
    }
}

#[derive(Debug)]
pub enum EventEffect {
    None,
    BmiUpdated(String),
    ModalClosed,
    /// The caller owns the single network round-trip and reports back through
    /// [`FormController::finish_submission`](crate::FormController::finish_submission).
    SubmissionStarted(PendingSubmission),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Rendered(RiskLevel),
    /// The request failed; the user saw the generic alert.
    Alerted { reason: String },
    /// A submission was already in flight.
    Ignored,
}
