//! Bindings to the page's global `bootstrap` namespace.
//!
//! Constructors are `catch` so a page without the toolkit loaded surfaces an
//! `Err` instead of trapping.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::registry::Widget;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Modal;
    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    pub fn new(element: &Element) -> Result<Modal, JsValue>;
    #[wasm_bindgen(method, js_name = show)]
    fn show_panel(this: &Modal);
    #[wasm_bindgen(method, js_name = hide)]
    fn hide_panel(this: &Modal);
    #[wasm_bindgen(method, js_name = dispose)]
    fn dispose_panel(this: &Modal);

    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Toast;
    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    pub fn new(element: &Element) -> Result<Toast, JsValue>;
    #[wasm_bindgen(method, js_name = show)]
    fn show_panel(this: &Toast);
    #[wasm_bindgen(method, js_name = hide)]
    fn hide_panel(this: &Toast);
    #[wasm_bindgen(method, js_name = dispose)]
    fn dispose_panel(this: &Toast);

    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Collapse;
    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    pub fn new(element: &Element, options: &JsValue) -> Result<Collapse, JsValue>;
    #[wasm_bindgen(method, js_name = show)]
    fn show_panel(this: &Collapse);
    #[wasm_bindgen(method, js_name = hide)]
    fn hide_panel(this: &Collapse);
    #[wasm_bindgen(method, js_name = dispose)]
    fn dispose_panel(this: &Collapse);

    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Tooltip;
    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    pub fn new(element: &Element) -> Result<Tooltip, JsValue>;
    #[wasm_bindgen(method, js_name = show)]
    fn show_panel(this: &Tooltip);
    #[wasm_bindgen(method, js_name = hide)]
    fn hide_panel(this: &Tooltip);
    #[wasm_bindgen(method, js_name = dispose)]
    fn dispose_panel(this: &Tooltip);
}

macro_rules! impl_widget {
    ($($ty:ty),+) => {
        $(
            impl Widget for $ty {
                fn show(&self) {
                    self.show_panel();
                }

                fn hide(&self) {
                    self.hide_panel();
                }

                fn dispose(&self) {
                    self.dispose_panel();
                }
            }
        )+
    };
}

impl_widget!(Modal, Toast, Collapse, Tooltip);

impl Collapse {
    /// A collapse handle that does not toggle the panel on construction.
    pub fn quiet(element: &Element) -> Result<Collapse, JsValue> {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &JsValue::from_str("toggle"), &JsValue::FALSE)?;
        Collapse::new(element, &options)
    }
}
