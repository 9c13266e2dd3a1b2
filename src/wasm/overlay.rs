use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, KeyboardEvent};

use super::bootstrap::Modal;
use super::dom;
use crate::config::OverlayConfig;
use crate::overlay::{is_cancel_key, overlay_for_click};
use crate::registry::{Widget, WidgetRegistry};

pub struct OverlayController {
    document: Document,
    config: OverlayConfig,
    modals: RefCell<WidgetRegistry<Modal>>,
}

/// Registry key for an overlay: its id, else the selector that found it.
fn overlay_key(overlay: &Element, selector: &str) -> String {
    let id = overlay.id();
    if id.is_empty() {
        selector.to_string()
    } else {
        id
    }
}

impl OverlayController {
    pub fn mount(document: &Document, config: &OverlayConfig) -> Result<Rc<Self>, JsValue> {
        let controller = Rc::new(Self {
            document: document.clone(),
            config: config.clone(),
            modals: RefCell::new(WidgetRegistry::new()),
        });

        // register the page's overlays up front so toolkit-opened ones are closable too
        {
            let mut modals = controller.modals.borrow_mut();
            for overlay in dom::query_all(document, &config.overlay_selector) {
                let id = overlay.id();
                if id.is_empty() {
                    continue;
                }
                if let Err(err) = modals.get_or_try_insert_with(&id, || Modal::new(&overlay)) {
                    log::warn!("overlay widget unavailable: {err:?}");
                    break;
                }
            }
        }

        for card in dom::query_all(document, &config.card_selector) {
            let ctrl = Rc::clone(&controller);
            let target = card.clone();
            dom::on(&card, "click", move |event| {
                if let Err(err) = ctrl.handle_card_click(&target, &event) {
                    log::warn!("overlay open failed: {err:?}");
                }
            })?;
        }

        let ctrl = Rc::clone(&controller);
        dom::on(document, "keydown", move |event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if is_cancel_key(&key_event.key(), &ctrl.config) {
                ctrl.close_all();
            }
        })?;

        log::info!("overlays mounted: {} registered", controller.modals.borrow().len());
        Ok(controller)
    }

    /// Opens the card's overlay unless the click belongs to a nested control.
    /// Returns whether an overlay was shown.
    pub fn handle_card_click(&self, card: &Element, event: &Event) -> Result<bool, JsValue> {
        let inside_passthrough = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|target| target.closest(&self.config.passthrough_selector).ok().flatten())
            .is_some();
        // only the card's first button names the overlay
        let target_attr = card
            .query_selector("button")?
            .and_then(|control| control.get_attribute(&self.config.target_attribute));

        let Some(selector) = overlay_for_click(inside_passthrough, target_attr.as_deref()) else {
            return Ok(false);
        };
        self.open(selector)
    }

    pub fn open(&self, selector: &str) -> Result<bool, JsValue> {
        let Some(overlay) = dom::query(&self.document, selector) else {
            return Ok(false);
        };
        let key = overlay_key(&overlay, selector);
        let mut modals = self.modals.borrow_mut();
        modals
            .get_or_try_insert_with(&key, || Modal::new(&overlay))?
            .show();
        log::debug!("overlay opened: {key}");
        Ok(true)
    }

    /// Hides every registered overlay. Returns how many were asked to close.
    pub fn close_all(&self) -> usize {
        self.modals.borrow().hide_all()
    }
}
