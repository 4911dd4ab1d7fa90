use super::*;

use form_controller::form_state::build_payload;
use shared::protocol::FieldValue;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::EventTarget;

wasm_bindgen_test_configure!(run_in_browser);

const FORM_MARKUP: &str = r#"
<form id="predictionForm">
  <input id="Height" name="Height" value="180">
  <input id="Weight" name="Weight" value="81">
  <input id="BMI" name="BMI" value="25.00" readonly>
  <select name="General_Health">
    <option value="Poor">Poor</option>
    <option value="Good" selected>Good</option>
  </select>
  <input type="checkbox" name="Exercise" checked>
  <input type="checkbox" name="Diabetes">
  <input type="checkbox" name="Depression">
  <button type="submit">Predict Risk</button>
</form>
"#;

const MODAL_MARKUP: &str = r#"
<div id="resultModal" class="modal">
  <div class="modal-content">
    <span class="close-modal">&times;</span>
    <h2 id="riskLevel"></h2>
    <div id="riskIcon"></div>
    <div class="probability-meter">
      <div id="probFill"></div>
      <span></span>
    </div>
  </div>
</div>
"#;

fn page(markup: &str) -> (Window, Document) {
    let window = web_sys::window().expect("window");
    let document = window.document().expect("document");
    document.body().expect("body").set_inner_html(markup);
    (window, document)
}

fn mounted_surface() -> (DomSurface, Document) {
    let (window, document) = page(&format!("{FORM_MARKUP}{MODAL_MARKUP}"));
    let surface =
        DomSurface::lookup(window, &document, DomBindings::default()).expect("complete page");
    (surface, document)
}

fn element(document: &Document, selector: &str) -> Element {
    document
        .query_selector(selector)
        .expect("valid selector")
        .expect("element present")
}

#[wasm_bindgen_test]
fn lookup_fails_when_modal_is_missing() {
    let (window, document) = page(FORM_MARKUP);
    let err = DomSurface::lookup(window, &document, DomBindings::default())
        .err()
        .expect("modal is required");
    assert_eq!(err, DomError::MissingElement("resultModal"));
}

#[wasm_bindgen_test]
fn lookup_fails_when_probability_text_is_missing() {
    let markup = MODAL_MARKUP.replace("<span></span>", "");
    let (window, document) = page(&format!("{FORM_MARKUP}{markup}"));
    let err = DomSurface::lookup(window, &document, DomBindings::default())
        .err()
        .expect("probability text is required");
    assert_eq!(err, DomError::MissingElement(".probability-meter span"));
}

#[wasm_bindgen_test]
fn clicks_are_classified_against_the_modal() {
    let (surface, document) = mounted_surface();

    let backdrop = EventTarget::from(element(&document, "#resultModal"));
    assert_eq!(surface.classify_click(Some(backdrop)), ClickTarget::Backdrop);

    for inner in [".modal-content", "#riskLevel", ".probability-meter span"] {
        let target = EventTarget::from(element(&document, inner));
        assert_eq!(
            surface.classify_click(Some(target)),
            ClickTarget::Content,
            "{inner}"
        );
    }

    let outside = EventTarget::from(element(&document, "#Height"));
    assert_eq!(surface.classify_click(Some(outside)), ClickTarget::Elsewhere);
    assert_eq!(surface.classify_click(None), ClickTarget::Elsewhere);
}

#[wasm_bindgen_test]
fn form_data_becomes_payload_with_every_checkbox() {
    let (surface, _document) = mounted_surface();

    let mut names = surface.checkbox_names();
    names.sort();
    assert_eq!(names, ["Depression", "Diabetes", "Exercise"]);

    let payload = build_payload(&surface.form_entries(), &names);
    assert_eq!(payload.get("Exercise"), Some(&FieldValue::checked(true)));
    assert_eq!(payload.get("Diabetes"), Some(&FieldValue::checked(false)));
    assert_eq!(payload.get("Depression"), Some(&FieldValue::checked(false)));
    assert_eq!(payload.get("Height"), Some(&FieldValue::from("180")));
    assert_eq!(payload.get("BMI"), Some(&FieldValue::from("25.00")));
    assert_eq!(payload.get("General_Health"), Some(&FieldValue::from("Good")));
    assert_eq!(payload.len(), 7);
}

#[wasm_bindgen_test]
fn bmi_inputs_round_trip_through_named_fields() {
    let (mut surface, _document) = mounted_surface();
    surface.set_field_value("Weight", "100.5");
    surface.set_field_value("Height", "200");
    assert_eq!(surface.field_value("Weight"), "100.5");
    assert_eq!(surface.field_value("General_Health"), "");

    let mut controller = FormController::default();
    let effect = controller.handle_event(&mut surface, FormEvent::input("Weight"));
    assert!(matches!(effect, EventEffect::BmiUpdated(ref bmi) if bmi == "25.13"));
    assert_eq!(surface.bmi.value(), "25.13");
}

#[wasm_bindgen_test]
fn render_writes_result_and_toggles_modal() {
    let (mut surface, document) = mounted_surface();

    surface.render_result(&ResultView::from_probability(0.73, 0.5));
    surface.set_modal_visible(true);

    let risk_level = element(&document, "#riskLevel");
    assert_eq!(risk_level.text_content().as_deref(), Some("High Risk"));
    assert_eq!(risk_level.class_name(), "risk-high");
    assert_eq!(
        element(&document, ".probability-meter span")
            .text_content()
            .as_deref(),
        Some("73.0%")
    );
    assert!(element(&document, "#riskIcon")
        .inner_html()
        .contains("fa-heart-crack"));
    assert!(surface.modal.class_list().contains("visible"));

    surface.set_modal_visible(false);
    assert!(!surface.modal.class_list().contains("visible"));
    assert_eq!(risk_level.text_content().as_deref(), Some("High Risk"));
}
