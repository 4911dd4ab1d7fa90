use shared::domain::RiskLevel;

/// What the submit control and result modal currently reflect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    ResultHigh,
    ResultLow,
}

impl ViewState {
    pub fn for_risk(risk: RiskLevel) -> Self {
        match risk {
            RiskLevel::High => ViewState::ResultHigh,
            RiskLevel::Low => ViewState::ResultLow,
        }
    }

    pub fn is_loading(self) -> bool {
        self == ViewState::Loading
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: String,
    pub disabled: bool,
}

impl SubmitControl {
    pub fn enabled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }

    pub fn loading(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: true,
        }
    }
}
