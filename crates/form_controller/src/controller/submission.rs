use client_core::{ClientError, PredictionBackend};
use shared::protocol::{FormPayload, PredictionResult};
use tracing::{debug, error, info};

use crate::{
    controller::{events::SubmissionOutcome, FormController},
    form_state::build_payload,
    render::ResultView,
    surface::FormSurface,
    view_state::{SubmitControl, ViewState},
};

/// A submission that has disabled the control and is waiting on the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub payload: FormPayload,
    /// Label to restore once the request settles.
    pub original_label: String,
}

impl FormController {
    /// Disables the submit control, shows the loading label, and collects the payload.
    /// Returns `None` while another submission is still in flight.
    pub fn begin_submission<S: FormSurface>(&mut self, surface: &mut S) -> Option<PendingSubmission> {
        if self.view.is_loading() {
            debug!("submission already in flight; ignoring submit");
            return None;
        }

        let original_label = surface.submit_control().label;
        surface.set_submit_control(&SubmitControl::loading(self.settings.loading_label.clone()));
        self.view = ViewState::Loading;

        let payload = build_payload(&surface.form_entries(), &surface.checkbox_names());
        debug!(
            payload = %serde_json::to_string(&payload).unwrap_or_default(),
            "sending prediction payload"
        );

        Some(PendingSubmission {
            payload,
            original_label,
        })
    }

    /// Applies the network outcome, then always restores the submit control.
    pub fn finish_submission<S: FormSurface>(
        &mut self,
        surface: &mut S,
        pending: PendingSubmission,
        result: Result<PredictionResult, ClientError>,
    ) -> SubmissionOutcome {
        let outcome = match result {
            Ok(result) => {
                let view = ResultView::from_result(&result, self.settings.risk_threshold);
                info!(
                    probability = result.probability,
                    risk = ?view.risk,
                    "rendering prediction"
                );
                surface.render_result(&view);
                surface.set_modal_visible(true);
                self.modal.open();
                self.view = ViewState::for_risk(view.risk);
                let risk = view.risk;
                self.last_view = Some(view);
                SubmissionOutcome::Rendered(risk)
            }
            Err(err) => {
                error!(error = %err, "prediction request failed");
                surface.alert(&self.settings.alert_message);
                self.view = ViewState::Idle;
                SubmissionOutcome::Alerted {
                    reason: err.to_string(),
                }
            }
        };

        surface.set_submit_control(&SubmitControl::enabled(pending.original_label));
        outcome
    }

    /// Runs one full submission: begin, a single await on the backend, finish.
    pub async fn submit<S, B>(&mut self, surface: &mut S, backend: &B) -> SubmissionOutcome
    where
        S: FormSurface,
        B: PredictionBackend + ?Sized,
    {
        let Some(pending) = self.begin_submission(surface) else {
            return SubmissionOutcome::Ignored;
        };
        let result = backend.predict(&pending.payload).await;
        self.finish_submission(surface, pending, result)
    }
}
