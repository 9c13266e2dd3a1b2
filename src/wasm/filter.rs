use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use super::dom::{self, TimeoutScheduler};
use crate::config::FilterConfig;
use crate::filter::{FilterBoard, FilterValue, TagSet};
use crate::schedule::Scheduler;

pub struct FilterController {
    board: RefCell<FilterBoard>,
    buttons: Vec<Element>,
    items: Vec<HtmlElement>,
    // deferred step per item; a new activation replaces (and cancels) the old one
    pending: RefCell<Vec<Option<Timeout>>>,
    config: FilterConfig,
}

impl FilterController {
    pub fn mount(document: &Document, config: &FilterConfig) -> Result<Rc<Self>, JsValue> {
        let buttons = dom::query_all(document, &config.button_selector);
        let items: Vec<HtmlElement> = dom::query_all(document, &config.item_selector)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();

        let values = buttons
            .iter()
            .map(|button| FilterValue::parse(button.get_attribute("data-filter").as_deref()))
            .collect();
        let tags = items
            .iter()
            .map(|item| TagSet::parse(&item.get_attribute("data-categories").unwrap_or_default()))
            .collect();
        let active = buttons
            .iter()
            .position(|button| button.class_list().contains("active"))
            .unwrap_or(0);

        let controller = Rc::new(Self {
            board: RefCell::new(FilterBoard::new(values, tags, config).with_active(active)),
            pending: RefCell::new(items.iter().map(|_| None).collect()),
            buttons,
            items,
            config: config.clone(),
        });

        for (index, button) in controller.buttons.iter().enumerate() {
            let ctrl = Rc::clone(&controller);
            dom::on(button, "click", move |_event| {
                if let Err(err) = ctrl.activate(index) {
                    log::warn!("filter activation failed: {err:?}");
                }
            })?;
        }

        log::info!(
            "filter mounted: {} buttons, {} items",
            controller.buttons.len(),
            controller.items.len()
        );
        Ok(controller)
    }

    /// Selects button `index` and moves every item toward its new visibility.
    pub fn activate(&self, index: usize) -> Result<(), JsValue> {
        let Some(plan) = self.board.borrow_mut().activate(index) else {
            return Ok(());
        };

        for (i, button) in self.buttons.iter().enumerate() {
            let classes = button.class_list();
            let selected = i == index;
            dom::set_classes(&classes, &self.config.active_classes, selected)?;
            dom::set_classes(&classes, &self.config.inactive_classes, !selected)?;
        }

        let mut pending = self.pending.borrow_mut();
        for ((item, transition), slot) in self.items.iter().zip(plan).zip(pending.iter_mut()) {
            dom::apply_style(item, &transition.immediate)?;
            let item = item.clone();
            let deferred = transition.deferred;
            let task = Box::new(move || {
                if let Err(err) = dom::apply_style(&item, &deferred) {
                    log::warn!("filter transition failed: {err:?}");
                }
            });
            *slot = Some(TimeoutScheduler.schedule(transition.delay_ms, task));
        }
        Ok(())
    }

    pub fn active_value(&self) -> FilterValue {
        self.board.borrow().active_value()
    }
}
