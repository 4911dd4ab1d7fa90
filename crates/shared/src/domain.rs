use serde::{Deserialize, Serialize};

macro_rules! field_names {
    ($($konst:ident => $name:literal),* $(,)?) => {
        $(pub const $konst: &str = $name;)*
    };
}

field_names!(
    HEIGHT => "Height",
    WEIGHT => "Weight",
    BMI => "BMI",
    AGE => "Age",
    FRUIT => "Fruit",
    GREEN_VEGETABLES => "Green_Vegetables",
    FRIED_POTATO => "Fried_Potato",
    ALCOHOL => "Alcohol",
    GENERAL_HEALTH => "General_Health",
    EXERCISE => "Exercise",
    SMOKING_HISTORY => "Smoking_History",
    DIABETES => "Diabetes",
    ARTHRITIS => "Arthritis",
    DEPRESSION => "Depression",
);

pub const GENERAL_HEALTH_OPTIONS: [&str; 5] = ["Poor", "Fair", "Good", "Very_Good", "Excellent"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Numeric,
    Categorical,
    Checkbox,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Declared inputs of the prediction form, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormSchema {
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// The form served by the cardiovascular-risk page.
    pub fn cardiovascular() -> Self {
        let numeric = [
            HEIGHT,
            WEIGHT,
            BMI,
            AGE,
            FRUIT,
            GREEN_VEGETABLES,
            FRIED_POTATO,
            ALCOHOL,
        ];
        let checkboxes = [EXERCISE, SMOKING_HISTORY, DIABETES, ARTHRITIS, DEPRESSION];

        let mut fields: Vec<FieldSpec> = numeric
            .into_iter()
            .map(|name| FieldSpec::new(name, FieldKind::Numeric))
            .collect();
        fields.push(FieldSpec::new(GENERAL_HEALTH, FieldKind::Categorical));
        fields.extend(
            checkboxes
                .into_iter()
                .map(|name| FieldSpec::new(name, FieldKind::Checkbox)),
        );
        Self { fields }
    }

    pub fn kind_of(&self, name: &str) -> Option<FieldKind> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.kind)
    }

    pub fn is_checkbox(&self, name: &str) -> bool {
        self.kind_of(name) == Some(FieldKind::Checkbox)
    }

    pub fn checkbox_names(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|field| field.kind == FieldKind::Checkbox)
            .map(|field| field.name.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Low,
}

impl RiskLevel {
    /// Strictly greater than the threshold is high risk; the threshold itself is low.
    pub fn classify(probability: f64, threshold: f64) -> Self {
        if probability > threshold {
            RiskLevel::High
        } else {
            RiskLevel::Low
        }
    }
}
