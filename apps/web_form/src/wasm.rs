//! `wasm-bindgen` entry point: binds the controller to the page DOM.
//!
//! Only compiled on `wasm32` targets.

use std::{cell::RefCell, rc::Rc};

use client_core::{PredictClient, PredictionBackend};
use form_controller::{
    form_state::FormEntry, ClickTarget, ControllerSettings, EventEffect, FormController,
    FormEvent, FormSurface, ResultView, SubmissionOutcome, SubmitControl,
};
use tracing::{debug, info};
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    console, Document, Element, Event, FormData, HtmlButtonElement, HtmlElement,
    HtmlFormElement, HtmlInputElement, Node, Window,
};

use crate::{bindings::DomBindings, error::DomError};

thread_local! {
    static MOUNTED: RefCell<Option<Rc<RefCell<App>>>> = const { RefCell::new(None) };
}

struct App {
    controller: FormController,
    surface: DomSurface,
}

impl App {
    fn dispatch(&mut self, event: FormEvent) -> EventEffect {
        let App {
            controller,
            surface,
        } = self;
        controller.handle_event(surface, event)
    }
}

struct DomSurface {
    window: Window,
    bindings: DomBindings,
    form: HtmlFormElement,
    height: HtmlInputElement,
    weight: HtmlInputElement,
    bmi: HtmlInputElement,
    submit: HtmlButtonElement,
    modal: Element,
    risk_level: Element,
    risk_icon: Element,
    prob_fill: HtmlElement,
    prob_text: Element,
}

fn by_id<T: JsCast>(document: &Document, id: &'static str) -> Result<T, DomError> {
    document
        .get_element_by_id(id)
        .ok_or(DomError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongElementType(id))
}

fn by_selector<T: JsCast>(
    found: Result<Option<Element>, JsValue>,
    selector: &'static str,
) -> Result<T, DomError> {
    found?
        .ok_or(DomError::MissingElement(selector))?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongElementType(selector))
}

fn console_error(msg: &str) {
    console::error_1(&JsValue::from_str(msg));
}

impl DomSurface {
    fn lookup(window: Window, document: &Document, bindings: DomBindings) -> Result<Self, DomError> {
        let form: HtmlFormElement = by_id(document, bindings.form_id)?;
        let submit = by_selector(form.query_selector(bindings.submit_selector), bindings.submit_selector)?;
        let prob_text = by_selector(
            document.query_selector(bindings.prob_text_selector),
            bindings.prob_text_selector,
        )?;

        Ok(Self {
            height: by_id(document, bindings.height_id)?,
            weight: by_id(document, bindings.weight_id)?,
            bmi: by_id(document, bindings.bmi_id)?,
            modal: by_id(document, bindings.modal_id)?,
            risk_level: by_id(document, bindings.risk_level_id)?,
            risk_icon: by_id(document, bindings.risk_icon_id)?,
            prob_fill: by_id(document, bindings.prob_fill_id)?,
            form,
            submit,
            prob_text,
            window,
            bindings,
        })
    }

    fn named_input(&self, name: &str) -> Option<HtmlInputElement> {
        if name == self.bindings.height_id {
            return Some(self.height.clone());
        }
        if name == self.bindings.weight_id {
            return Some(self.weight.clone());
        }
        if name == self.bindings.bmi_id {
            return Some(self.bmi.clone());
        }
        self.form
            .query_selector(&format!(r#"[name="{name}"]"#))
            .ok()
            .flatten()?
            .dyn_into::<HtmlInputElement>()
            .ok()
    }

    fn classify_click(&self, target: Option<web_sys::EventTarget>) -> ClickTarget {
        let Some(target) = target else {
            return ClickTarget::Elsewhere;
        };
        if JsValue::from(target.clone()) == JsValue::from(self.modal.clone()) {
            return ClickTarget::Backdrop;
        }
        match target.dyn_ref::<Node>() {
            Some(node) if self.modal.contains(Some(node)) => ClickTarget::Content,
            _ => ClickTarget::Elsewhere,
        }
    }
}

impl FormSurface for DomSurface {
    fn field_value(&self, name: &str) -> String {
        self.named_input(name)
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn set_field_value(&mut self, name: &str, value: &str) {
        if let Some(input) = self.named_input(name) {
            input.set_value(value);
        }
    }

    fn form_entries(&self) -> Vec<FormEntry> {
        let Ok(data) = FormData::new_with_form(&self.form) else {
            return Vec::new();
        };
        let Ok(Some(iter)) = js_sys::try_iter(data.as_ref()) else {
            return Vec::new();
        };

        iter.filter_map(Result::ok)
            .filter_map(|entry| {
                let pair = js_sys::Array::from(&entry);
                let name = pair.get(0).as_string()?;
                // File inputs have no string value; the page has none.
                let value = pair.get(1).as_string()?;
                Some(FormEntry::new(name, value))
            })
            .collect()
    }

    fn checkbox_names(&self) -> Vec<String> {
        let Ok(nodes) = self.form.query_selector_all(self.bindings.checkbox_selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|idx| nodes.item(idx))
            .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.name())
            .filter(|name| !name.is_empty())
            .collect()
    }

    fn submit_control(&self) -> SubmitControl {
        SubmitControl {
            label: self.submit.inner_html(),
            disabled: self.submit.disabled(),
        }
    }

    fn set_submit_control(&mut self, control: &SubmitControl) {
        self.submit.set_inner_html(&control.label);
        self.submit.set_disabled(control.disabled);
    }

    fn render_result(&mut self, view: &ResultView) {
        self.risk_level.set_text_content(Some(view.label));
        self.risk_level.set_class_name(view.label_class);
        self.risk_icon.set_inner_html(view.icon_html);

        let style = self.prob_fill.style();
        if let Err(err) = style.set_property("background", view.fill_gradient) {
            debug!(?err, "failed to set meter gradient");
        }
        if let Err(err) = style.set_property("width", &view.fill_width) {
            debug!(?err, "failed to set meter width");
        }
        self.prob_text.set_text_content(Some(&view.percentage));
    }

    fn set_modal_visible(&mut self, visible: bool) {
        let classes = self.modal.class_list();
        let result = if visible {
            classes.add_1(self.bindings.visible_class)
        } else {
            classes.remove_1(self.bindings.visible_class)
        };
        if let Err(err) = result {
            debug!(?err, visible, "failed to toggle modal visibility");
        }
    }

    fn alert(&mut self, message: &str) {
        if self.window.alert_with_message(message).is_err() {
            console_error(message);
        }
    }
}

fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn run_submission(app: Rc<RefCell<App>>, client: Rc<PredictClient>, event: Event) {
    event.prevent_default();
    let effect = app.borrow_mut().dispatch(FormEvent::Submit);
    let EventEffect::SubmissionStarted(pending) = effect else {
        return;
    };

    spawn_local(async move {
        let result = client.predict(&pending.payload).await;
        let mut guard = app.borrow_mut();
        let App {
            controller,
            surface,
        } = &mut *guard;
        if let SubmissionOutcome::Alerted { reason } =
            controller.finish_submission(surface, pending, result)
        {
            console_error(&format!("Error: {reason}"));
        }
    });
}

fn mount() -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoWindow)?;
    let origin = window.location().origin()?;

    let settings = ControllerSettings::default();
    let client = PredictClient::new(&origin, &settings.endpoint_path)
        .map_err(|err| DomError::Js(err.to_string()))?;
    let surface = DomSurface::lookup(window.clone(), &document, DomBindings::default())?;
    let close_control: Element = by_selector(
        document.query_selector(surface.bindings.close_selector),
        surface.bindings.close_selector,
    )?;

    let height = surface.height.clone();
    let weight = surface.weight.clone();
    let form = surface.form.clone();
    let app = Rc::new(RefCell::new(App {
        controller: FormController::new(settings),
        surface,
    }));
    let client = Rc::new(client);

    for input in [height, weight] {
        let app = app.clone();
        let field = input.id();
        listen(&input, "input", move |_| {
            app.borrow_mut().dispatch(FormEvent::input(field.clone()));
        })?;
    }

    {
        let app = app.clone();
        let client = client.clone();
        listen(&form, "submit", move |event| {
            run_submission(app.clone(), client.clone(), event);
        })?;
    }

    {
        let app = app.clone();
        listen(&close_control, "click", move |_| {
            app.borrow_mut()
                .dispatch(FormEvent::Click(ClickTarget::CloseControl));
        })?;
    }

    {
        let app = app.clone();
        listen(&window, "click", move |event| {
            let mut app = app.borrow_mut();
            let target = app.surface.classify_click(event.target());
            if target == ClickTarget::Backdrop {
                app.dispatch(FormEvent::Click(target));
            }
        })?;
    }

    MOUNTED.with(|mounted| *mounted.borrow_mut() = Some(app));
    info!(endpoint = %client.endpoint(), "prediction form mounted");
    Ok(())
}

/// Closes the result modal; exported for inline `onclick` handlers in the markup.
#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal() {
    MOUNTED.with(|mounted| {
        if let Some(app) = mounted.borrow().as_ref() {
            app.borrow_mut()
                .dispatch(FormEvent::Click(ClickTarget::CloseControl));
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(DomError::NoWindow)?;
    if document.ready_state() != "loading" {
        return mount().map_err(JsValue::from);
    }

    let on_ready = Closure::once(move || {
        if let Err(err) = mount() {
            wasm_bindgen::throw_val(err.into());
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}

#[cfg(test)]
#[path = "tests/wasm_tests.rs"]
mod tests;
