use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement,
};

use super::dom::{self, TimeoutScheduler};
use super::toast::Toaster;
use crate::config::FormConfig;
use crate::hooks::{Announcer, SubmitSink, Submission};
use crate::schedule::Scheduler;
use crate::toast::{ToastKind, ToastNotification};
use crate::validation::{
    self, decide_submit, FieldKind, FieldSnapshot, FieldValidationState, InvalidReason,
    SubmitDecision,
};

struct FieldBinding {
    element: Element,
    error: RefCell<Option<Element>>,
    state: RefCell<FieldValidationState>,
}

fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

fn snapshot(element: &Element) -> FieldSnapshot {
    let kind = element
        .dyn_ref::<HtmlInputElement>()
        .map(|input| FieldKind::from_type_attr(&input.type_()))
        .unwrap_or(FieldKind::Other);
    FieldSnapshot {
        kind,
        required: element.has_attribute("required"),
        value: field_value(element),
    }
}

/// Name/value pair the way a browser would serialise it, if at all.
fn entry(element: &Element) -> Option<(String, String)> {
    let name = element.get_attribute("name").filter(|name| !name.is_empty())?;
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        let kind = input.type_();
        if (kind == "checkbox" || kind == "radio") && !input.checked() {
            return None;
        }
        if kind == "submit" || kind == "button" || kind == "reset" {
            return None;
        }
    }
    Some((name, field_value(element)))
}

pub struct FormController {
    document: Document,
    form: HtmlFormElement,
    fields: Vec<FieldBinding>,
    config: FormConfig,
    toaster: Rc<Toaster>,
    announcer: Rc<dyn Announcer>,
    sink: Rc<dyn SubmitSink>,
}

impl FormController {
    pub fn mount_all(
        document: &Document,
        config: &FormConfig,
        toaster: &Rc<Toaster>,
        announcer: Rc<dyn Announcer>,
        sink: Rc<dyn SubmitSink>,
    ) -> Result<Vec<Rc<Self>>, JsValue> {
        dom::query_all(document, &config.form_selector)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlFormElement>().ok())
            .map(|form| {
                Self::mount(
                    document,
                    form,
                    config,
                    Rc::clone(toaster),
                    Rc::clone(&announcer),
                    Rc::clone(&sink),
                )
            })
            .collect()
    }

    pub fn mount(
        document: &Document,
        form: HtmlFormElement,
        config: &FormConfig,
        toaster: Rc<Toaster>,
        announcer: Rc<dyn Announcer>,
        sink: Rc<dyn SubmitSink>,
    ) -> Result<Rc<Self>, JsValue> {
        form.set_attribute("novalidate", "true")?;

        let fields = dom::query_all_in(&form, &config.field_selector)
            .into_iter()
            .map(|element| FieldBinding {
                element,
                error: RefCell::new(None),
                state: RefCell::new(FieldValidationState::Untouched),
            })
            .collect::<Vec<_>>();
        for field in &fields {
            if field.element.has_attribute("required") {
                field.element.set_attribute("aria-required", "true")?;
            }
        }

        let controller = Rc::new(Self {
            document: document.clone(),
            form,
            fields,
            config: config.clone(),
            toaster,
            announcer,
            sink,
        });

        for (index, field) in controller.fields.iter().enumerate() {
            let ctrl = Rc::clone(&controller);
            dom::on(&field.element, "blur", move |_event| {
                if let Err(err) = ctrl.validate_field(index) {
                    log::warn!("field validation failed: {err:?}");
                }
            })?;
            let ctrl = Rc::clone(&controller);
            dom::on(&field.element, "input", move |_event| {
                if let Some(field) = ctrl.fields.get(index) {
                    if let Err(err) = ctrl.clear_error(field) {
                        log::warn!("clearing field error failed: {err:?}");
                    }
                }
            })?;
        }

        let ctrl = Rc::clone(&controller);
        dom::on(&controller.form, "submit", move |event| {
            event.prevent_default();
            if let Err(err) = ctrl.submit() {
                log::warn!("form submit failed: {err:?}");
            }
        })?;

        log::info!("form mounted with {} fields", controller.fields.len());
        Ok(controller)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn field_state(&self, index: usize) -> Option<FieldValidationState> {
        self.fields.get(index).map(|field| *field.state.borrow())
    }

    /// Validates field `index` and decorates it accordingly.
    pub fn validate_field(&self, index: usize) -> Result<FieldValidationState, JsValue> {
        let Some(field) = self.fields.get(index) else {
            return Ok(FieldValidationState::Untouched);
        };
        let result = validation::validate(&snapshot(&field.element));
        match result {
            Ok(()) => {
                field.element.set_attribute("aria-invalid", "false")?;
                field.element.remove_attribute("aria-describedby")?;
                self.clear_error(field)?;
            }
            Err(reason) => self.show_error(field, reason)?,
        }
        let state = FieldValidationState::from(result);
        *field.state.borrow_mut() = state;
        Ok(state)
    }

    fn show_error(&self, field: &FieldBinding, reason: InvalidReason) -> Result<(), JsValue> {
        self.clear_error(field)?;
        let message = reason.message(&self.config.messages);

        field.element.set_attribute("aria-invalid", "true")?;
        field.element.class_list().add_1("is-invalid")?;

        let error = self.document.create_element("div")?;
        error.set_class_name("invalid-feedback d-block");
        error.set_attribute("role", "alert")?;
        error.set_text_content(Some(message));
        let id = field.element.id();
        if !id.is_empty() {
            let error_id = format!("{id}-error");
            error.set_id(&error_id);
            field.element.set_attribute("aria-describedby", &error_id)?;
        }
        field.element.after_with_node_1(&error)?;
        *field.error.borrow_mut() = Some(error);

        self.announcer
            .announce(&format!("{}{}", self.config.messages.error_prefix, message));
        Ok(())
    }

    fn clear_error(&self, field: &FieldBinding) -> Result<(), JsValue> {
        field.element.class_list().remove_1("is-invalid")?;
        if let Some(error) = field.error.borrow_mut().take() {
            error.remove();
        }
        Ok(())
    }

    /// Validates every field in document order and acts on the outcome.
    pub fn submit(self: &Rc<Self>) -> Result<SubmitDecision, JsValue> {
        let mut states = Vec::with_capacity(self.fields.len());
        for index in 0..self.fields.len() {
            states.push(self.validate_field(index)?);
        }

        let decision = decide_submit(&states);
        let messages = &self.config.messages;
        match decision {
            SubmitDecision::Accept => {
                let submission = Submission {
                    entries: self.fields.iter().filter_map(|f| entry(&f.element)).collect(),
                };
                self.sink.submit(&submission);
                self.announcer.announce(&messages.form_sent_announcement);
                self.show_sent()?;
            }
            SubmitDecision::Reject { first_invalid } => {
                self.toaster.show(&ToastNotification::new(
                    ToastKind::Error,
                    messages.form_has_errors.as_str(),
                ))?;
                if let Some(field) = self.fields[first_invalid].element.dyn_ref::<HtmlElement>() {
                    field.focus()?;
                }
            }
        }
        Ok(decision)
    }

    /// Swaps the submit control for the "sent" label, then resets the form.
    fn show_sent(self: &Rc<Self>) -> Result<(), JsValue> {
        let button = self
            .form
            .query_selector(&self.config.submit_selector)?
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        let original = button.as_ref().map(|b| b.inner_html()).unwrap_or_default();

        if let Some(button) = &button {
            button.set_inner_html("");
            let icon = self.document.create_element("i")?;
            icon.set_class_name("bi bi-check-circle me-2");
            icon.set_attribute("aria-hidden", "true")?;
            button.append_child(&icon)?;
            button.append_child(
                &self
                    .document
                    .create_text_node(&self.config.messages.sent_label),
            )?;
            button.set_disabled(true);
            button.set_attribute("aria-label", &self.config.messages.sent_aria_label)?;
        }

        let this = Rc::clone(self);
        TimeoutScheduler.defer(
            self.config.sent_reset_ms,
            Box::new(move || {
                if let Some(button) = &button {
                    button.set_inner_html(&original);
                    button.set_disabled(false);
                    if let Err(err) = button.remove_attribute("aria-label") {
                        log::warn!("sent label removal failed: {err:?}");
                    }
                }
                this.form.reset();
                for field in &this.fields {
                    *field.state.borrow_mut() = FieldValidationState::Untouched;
                }
                let done =
                    ToastNotification::new(ToastKind::Success, this.config.messages.form_sent.as_str());
                if let Err(err) = this.toaster.show(&done) {
                    log::warn!("success toast failed: {err:?}");
                }
            }),
        );
        Ok(())
    }
}
