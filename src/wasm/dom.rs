use gloo_timers::callback::Timeout;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, DomTokenList, Element, Event, EventTarget, HtmlElement,
    NodeList, Window,
};

use crate::filter::StyleStep;
use crate::schedule::Scheduler;

/// `setTimeout`-backed scheduler. Dropping a pending `Timeout` clears it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Pending = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn detach(&self, pending: Timeout) {
        let _ = pending.forget();
    }
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements matching `selector`, in document order. A bad selector yields none.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(list),
        Err(err) => {
            log::warn!("bad selector {selector:?}: {err:?}");
            Vec::new()
        }
    }
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => elements(list),
        Err(err) => {
            log::warn!("bad selector {selector:?}: {err:?}");
            Vec::new()
        }
    }
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// Registers `handler` for the page's lifetime.
pub fn on(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Registers `handler` for the first `event` only.
pub fn on_once(
    target: &EventTarget,
    event: &str,
    handler: impl FnOnce(Event) + 'static,
) -> Result<(), JsValue> {
    let callback = Closure::once_into_js(handler);
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.unchecked_ref(),
        &options,
    )
}

pub fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

pub fn apply_style(element: &HtmlElement, step: &StyleStep) -> Result<(), JsValue> {
    let style = element.style();
    if let Some(display) = step.display {
        style.set_property("display", display)?;
    }
    if let Some(opacity) = step.opacity {
        style.set_property("opacity", opacity)?;
    }
    if let Some(transform) = step.transform {
        style.set_property("transform", transform)?;
    }
    Ok(())
}

pub fn set_classes(list: &DomTokenList, classes: &[String], present: bool) -> Result<(), JsValue> {
    for class in classes {
        if present {
            list.add_1(class)?;
        } else {
            list.remove_1(class)?;
        }
    }
    Ok(())
}
