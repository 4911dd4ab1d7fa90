use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("no global window available")]
    NoWindow,
    #[error("required element '{0}' not found in page")]
    MissingElement(&'static str),
    #[error("element '{0}' is not the expected element type")]
    WrongElementType(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<DomError> for wasm_bindgen::JsValue {
    fn from(value: DomError) -> Self {
        js_sys::Error::new(&value.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_the_lookup() {
        assert_eq!(
            DomError::MissingElement("resultModal").to_string(),
            "required element 'resultModal' not found in page"
        );
    }
}
