//! Interactive behaviour for the portfolio page.
//!
//! The top-level modules are plain Rust and run anywhere; the `wasm` module
//! binds them to the browser document.

pub mod config;
pub mod error;
pub mod filter;
pub mod hooks;
pub mod overlay;
pub mod registry;
pub mod schedule;
pub mod toast;
pub mod validation;
pub mod viewport;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Window};

    use crate::config::{Config, CONFIG_ELEMENT_ID};
    use crate::error::PortfolioError;
    use crate::hooks::LogSink;

    mod announce;
    mod bootstrap;
    pub mod dom;
    pub mod filter;
    pub mod form;
    pub mod overlay;
    pub mod toast;
    pub mod viewport;

    pub use announce::WindowAnnouncer;

    /// Controllers mounted on one document.
    pub struct Page {
        pub filter: Rc<filter::FilterController>,
        pub forms: Vec<Rc<form::FormController>>,
        pub viewport: Rc<viewport::ViewportEffectsController>,
        pub overlay: Rc<overlay::OverlayController>,
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let (window, document) = globals()?;

        if document.ready_state() == "loading" {
            let target = document.clone();
            dom::on_once(&target, "DOMContentLoaded", move |_event| {
                if let Err(err) = mount(&window, &document) {
                    log::error!("portfolio init failed: {err:?}");
                }
            })?;
            return Ok(());
        }
        mount(&window, &document)?;
        Ok(())
    }

    fn globals() -> Result<(Window, Document), PortfolioError> {
        let window = web_sys::window().ok_or(PortfolioError::MissingGlobal { name: "window" })?;
        let document = window
            .document()
            .ok_or(PortfolioError::MissingGlobal { name: "document" })?;
        Ok((window, document))
    }

    /// Reads the page's configuration block, falling back to defaults.
    pub fn load_config(document: &Document) -> Config {
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        match raw {
            None => Config::default(),
            Some(raw) => Config::from_json(&raw).unwrap_or_else(|err| {
                log::warn!("{err}; using defaults");
                Config::default()
            }),
        }
    }

    pub fn mount(window: &Window, document: &Document) -> Result<Page, JsValue> {
        let config = load_config(document);
        log::set_max_level(config.log_level);
        mount_with(window, document, &config)
    }

    pub fn mount_with(window: &Window, document: &Document, config: &Config) -> Result<Page, JsValue> {
        let toaster = toast::Toaster::new(document, &config.form);
        let page = Page {
            filter: filter::FilterController::mount(document, &config.filter)?,
            forms: form::FormController::mount_all(
                document,
                &config.form,
                &toaster,
                Rc::new(WindowAnnouncer),
                Rc::new(LogSink),
            )?,
            viewport: viewport::ViewportEffectsController::mount(window, document, &config.viewport)?,
            overlay: overlay::OverlayController::mount(document, &config.overlay)?,
        };
        log::info!("Portfolio page initialized");
        Ok(page)
    }

    /// Decorates the hero section with floating particles.
    #[wasm_bindgen]
    pub fn create_particles() -> Result<(), JsValue> {
        let (window, document) = globals()?;
        let config = load_config(&document);
        viewport::populate_particles(&window, &document, &config.viewport)?;
        Ok(())
    }
}
