//! In-memory [`FormSurface`] driven by a [`FormSchema`]; backs the terminal adapter.

use std::collections::{BTreeMap, BTreeSet};

use shared::domain::{FieldKind, FormSchema};

use crate::{
    form_state::FormEntry, render::ResultView, surface::FormSurface, view_state::SubmitControl,
};

pub const DEFAULT_SUBMIT_LABEL: &str = "Predict Risk";

/// Value a checked checkbox reports, as a browser does for inputs without a `value`.
const CHECKED_VALUE: &str = "on";

#[derive(Debug, Clone)]
pub struct MemoryForm {
    schema: FormSchema,
    values: BTreeMap<String, String>,
    checked: BTreeSet<String>,
    submit: SubmitControl,
    submit_history: Vec<SubmitControl>,
    modal_visible: bool,
    rendered: Option<ResultView>,
    alerts: Vec<String>,
}

impl MemoryForm {
    pub fn new(schema: FormSchema) -> Self {
        Self {
            schema,
            values: BTreeMap::new(),
            checked: BTreeSet::new(),
            submit: SubmitControl::enabled(DEFAULT_SUBMIT_LABEL),
            submit_history: Vec::new(),
            modal_visible: false,
            rendered: None,
            alerts: Vec::new(),
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn set_checked(&mut self, name: &str, checked: bool) {
        if checked {
            self.checked.insert(name.to_string());
        } else {
            self.checked.remove(name);
        }
    }

    pub fn is_checked(&self, name: &str) -> bool {
        self.checked.contains(name)
    }

    pub fn submit_label(&self) -> &str {
        &self.submit.label
    }

    pub fn submit_disabled(&self) -> bool {
        self.submit.disabled
    }

    /// Every state the submit control has been put into, oldest first.
    pub fn submit_history(&self) -> &[SubmitControl] {
        &self.submit_history
    }

    pub fn modal_visible(&self) -> bool {
        self.modal_visible
    }

    pub fn rendered(&self) -> Option<&ResultView> {
        self.rendered.as_ref()
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl FormSurface for MemoryForm {
    fn field_value(&self, name: &str) -> String {
        self.values.get(name).cloned().unwrap_or_default()
    }

    fn set_field_value(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }

    fn form_entries(&self) -> Vec<FormEntry> {
        let mut entries = Vec::new();
        for field in &self.schema.fields {
            match field.kind {
                FieldKind::Checkbox => {
                    if self.checked.contains(&field.name) {
                        entries.push(FormEntry::new(field.name.clone(), CHECKED_VALUE));
                    }
                }
                _ => entries.push(FormEntry::new(
                    field.name.clone(),
                    self.field_value(&field.name),
                )),
            }
        }

        for (name, value) in &self.values {
            if self.schema.kind_of(name).is_none() {
                entries.push(FormEntry::new(name.clone(), value.clone()));
            }
        }
        entries
    }

    fn checkbox_names(&self) -> Vec<String> {
        self.schema.checkbox_names().map(str::to_string).collect()
    }

    fn submit_control(&self) -> SubmitControl {
        self.submit.clone()
    }

    fn set_submit_control(&mut self, control: &SubmitControl) {
        self.submit = control.clone();
        self.submit_history.push(control.clone());
    }

    fn render_result(&mut self, view: &ResultView) {
        self.rendered = Some(view.clone());
    }

    fn set_modal_visible(&mut self, visible: bool) {
        self.modal_visible = visible;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
