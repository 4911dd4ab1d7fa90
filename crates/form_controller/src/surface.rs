//! The seam between the controller and whatever displays the form.
//!
//! The browser adapter implements this over DOM elements; the terminal adapter over an
//! in-memory form. The controller never touches either directly.

use crate::{form_state::FormEntry, render::ResultView, view_state::SubmitControl};

pub trait FormSurface {
    /// Current text of a named input; empty when the input has no value.
    fn field_value(&self, name: &str) -> String;

    fn set_field_value(&mut self, name: &str, value: &str);

    /// Successful controls in document order. Unchecked checkboxes are absent.
    fn form_entries(&self) -> Vec<FormEntry>;

    /// Names of every checkbox the form declares, checked or not.
    fn checkbox_names(&self) -> Vec<String>;

    fn submit_control(&self) -> SubmitControl;

    fn set_submit_control(&mut self, control: &SubmitControl);

    fn render_result(&mut self, view: &ResultView);

    fn set_modal_visible(&mut self, visible: bool);

    /// Blocking, user-facing notice.
    fn alert(&mut self, message: &str);
}
