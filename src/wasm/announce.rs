use wasm_bindgen::{JsCast, JsValue};

use crate::hooks::Announcer;

const HOOK_NAME: &str = "announceToScreenReader";

/// Forwards to `window.announceToScreenReader` when the page defines it.
///
/// Looked up on every call so a hook registered after startup is still used.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowAnnouncer;

impl Announcer for WindowAnnouncer {
    fn announce(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(hook) = js_sys::Reflect::get(&window, &JsValue::from_str(HOOK_NAME)) else {
            return;
        };
        if let Some(hook) = hook.dyn_ref::<js_sys::Function>() {
            if let Err(err) = hook.call1(&JsValue::NULL, &JsValue::from_str(message)) {
                log::warn!("{HOOK_NAME} threw: {err:?}");
            }
        }
    }
}
