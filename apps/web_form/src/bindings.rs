//! Element identifiers the page markup must supply.

use shared::domain::{BMI, HEIGHT, WEIGHT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomBindings {
    pub form_id: &'static str,
    pub height_id: &'static str,
    pub weight_id: &'static str,
    pub bmi_id: &'static str,
    pub modal_id: &'static str,
    pub close_selector: &'static str,
    pub submit_selector: &'static str,
    pub checkbox_selector: &'static str,
    pub risk_level_id: &'static str,
    pub risk_icon_id: &'static str,
    pub prob_fill_id: &'static str,
    /// The probability text is reached by selector; there is no id on that span.
    pub prob_text_selector: &'static str,
    /// Class toggled on the modal to show it.
    pub visible_class: &'static str,
}

impl Default for DomBindings {
    fn default() -> Self {
        Self {
            form_id: "predictionForm",
            height_id: HEIGHT,
            weight_id: WEIGHT,
            bmi_id: BMI,
            modal_id: "resultModal",
            close_selector: ".close-modal",
            submit_selector: r#"button[type="submit"]"#,
            checkbox_selector: r#"input[type="checkbox"]"#,
            risk_level_id: "riskLevel",
            risk_icon_id: "riskIcon",
            prob_fill_id: "probFill",
            prob_text_selector: ".probability-meter span",
            visible_class: "visible",
        }
    }
}
