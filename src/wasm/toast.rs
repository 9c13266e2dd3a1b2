use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use super::bootstrap::Toast;
use super::dom::{self, TimeoutScheduler};
use crate::config::FormConfig;
use crate::registry::{Widget, WidgetRegistry};
use crate::schedule::Scheduler;
use crate::toast::{self, ToastNotification};

/// Renders toasts into a lazily created fixed-position container.
pub struct Toaster {
    document: Document,
    container_id: String,
    dismiss_label: String,
    fallback_ms: u32,
    registry: RefCell<WidgetRegistry<Toast>>,
    next_id: Cell<u32>,
}

impl Toaster {
    pub fn new(document: &Document, config: &FormConfig) -> Rc<Self> {
        Rc::new(Self {
            document: document.clone(),
            container_id: config.toast_container_id.clone(),
            dismiss_label: config.messages.dismiss_label.clone(),
            fallback_ms: config.toast_fallback_ms,
            registry: RefCell::new(WidgetRegistry::new()),
            next_id: Cell::new(0),
        })
    }

    fn container(&self) -> Result<Element, JsValue> {
        if let Some(existing) = self.document.get_element_by_id(&self.container_id) {
            return Ok(existing);
        }
        let container: HtmlElement = self.document.create_element("div")?.dyn_into()?;
        container.set_id(&self.container_id);
        container.set_class_name(toast::CONTAINER_CLASS);
        container.style().set_property("z-index", toast::CONTAINER_Z_INDEX)?;
        self.document
            .body()
            .ok_or("no body")?
            .append_child(&container)?;
        Ok(container.into())
    }

    fn render(&self, notification: &ToastNotification) -> Result<(Element, Element), JsValue> {
        let panel = self.document.create_element("div")?;
        panel.set_class_name(&notification.class_name());
        panel.set_attribute("role", "alert")?;
        panel.set_attribute("aria-live", "assertive")?;
        panel.set_attribute("aria-atomic", "true")?;

        let row = self.document.create_element("div")?;
        row.set_class_name("d-flex");
        let body = self.document.create_element("div")?;
        body.set_class_name("toast-body");
        body.set_text_content(Some(&notification.message));
        let dismiss = self.document.create_element("button")?;
        dismiss.set_attribute("type", "button")?;
        dismiss.set_class_name(toast::DISMISS_CLASS);
        dismiss.set_attribute("data-bs-dismiss", "toast")?;
        dismiss.set_attribute("aria-label", &self.dismiss_label)?;

        row.append_child(&body)?;
        row.append_child(&dismiss)?;
        panel.append_child(&row)?;
        Ok((panel, dismiss))
    }

    /// Shows `notification` and returns its panel. The panel removes itself once dismissed.
    pub fn show(self: &Rc<Self>, notification: &ToastNotification) -> Result<Element, JsValue> {
        let (panel, dismiss) = self.render(notification)?;
        self.container()?.append_child(&panel)?;

        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        let key = format!("toast-{id}");

        let shown = self
            .registry
            .borrow_mut()
            .get_or_try_insert_with(&key, || Toast::new(&panel))
            .map(Widget::show);

        match shown {
            Ok(()) => {
                let this = Rc::clone(self);
                let target = panel.clone();
                dom::on_once(&panel, "hidden.bs.toast", move |_event| {
                    this.registry.borrow_mut().dispose(&key);
                    target.remove();
                })?;
            }
            Err(err) => {
                log::warn!("toast widget unavailable, showing plain panel: {err:?}");
                panel.class_list().add_1("show")?;
                let target = panel.clone();
                dom::on_once(&dismiss, "click", move |_event| target.remove())?;
                let target = panel.clone();
                TimeoutScheduler.defer(self.fallback_ms, Box::new(move || target.remove()));
            }
        }

        log::debug!("toast shown: {:?}", notification.kind);
        Ok(panel)
    }
}
