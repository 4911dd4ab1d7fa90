//! Controller layer: page events, view-state transitions, and the submission round-trip.

pub mod events;
pub mod submission;

use shared::domain::{BMI, HEIGHT, WEIGHT};
use tracing::debug;

use crate::{
    bmi::bmi_field_text,
    config::ControllerSettings,
    modal::{ClickTarget, ModalState},
    render::ResultView,
    surface::FormSurface,
    view_state::ViewState,
};

use events::{EventEffect, FormEvent};

/// All state the page used to keep in DOM element values.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    settings: ControllerSettings,
    view: ViewState,
    modal: ModalState,
    last_view: Option<ResultView>,
}

impl FormController {
    pub fn new(settings: ControllerSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    pub fn view_state(&self) -> ViewState {
        self.view
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    /// The most recently rendered result. Survives closing the modal.
    pub fn last_result_view(&self) -> Option<&ResultView> {
        self.last_view.as_ref()
    }

    pub fn handle_event<S: FormSurface>(&mut self, surface: &mut S, event: FormEvent) -> EventEffect {
        debug!(event = event.name(), "form event");
        match event {
            FormEvent::Input { field } => self.handle_input(surface, &field),
            FormEvent::Click(target) => self.handle_click(surface, target),
            FormEvent::Submit => match self.begin_submission(surface) {
                Some(pending) => EventEffect::SubmissionStarted(pending),
                None => EventEffect::None,
            },
        }
    }

    /// Recomputes BMI when height or weight changed. Other fields are ignored.
    pub fn handle_input<S: FormSurface>(&mut self, surface: &mut S, field: &str) -> EventEffect {
        if field != HEIGHT && field != WEIGHT {
            return EventEffect::None;
        }

        let bmi = bmi_field_text(&surface.field_value(HEIGHT), &surface.field_value(WEIGHT));
        surface.set_field_value(BMI, &bmi);
        EventEffect::BmiUpdated(bmi)
    }

    pub fn handle_click<S: FormSurface>(
        &mut self,
        surface: &mut S,
        target: ClickTarget,
    ) -> EventEffect {
        if !self.modal.handle_click(target) {
            return EventEffect::None;
        }

        surface.set_modal_visible(false);
        if !self.view.is_loading() {
            self.view = ViewState::Idle;
        }
        EventEffect::ModalClosed
    }
}
