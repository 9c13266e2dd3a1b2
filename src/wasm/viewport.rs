use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use super::bootstrap::{Collapse, Tooltip};
use super::dom::{self, TimeoutScheduler};
use crate::config::ViewportConfig;
use crate::registry::{Widget, WidgetRegistry};
use crate::schedule::{Scheduler, TrailingDebounce};
use crate::viewport::{
    is_mobile, is_touch_device, nav_should_collapse, particle_count, stagger_delay_ms,
    ParticleStyle,
};

const NAV_KEY: &str = "navbar";

pub struct ViewportEffectsController {
    window: Window,
    document: Document,
    config: ViewportConfig,
    collapses: RefCell<WidgetRegistry<Collapse>>,
    tooltips: RefCell<WidgetRegistry<Tooltip>>,
    resize: RefCell<TrailingDebounce<TimeoutScheduler>>,
}

impl ViewportEffectsController {
    pub fn mount(
        window: &Window,
        document: &Document,
        config: &ViewportConfig,
    ) -> Result<Rc<Self>, JsValue> {
        let controller = Rc::new(Self {
            window: window.clone(),
            document: document.clone(),
            config: config.clone(),
            collapses: RefCell::new(WidgetRegistry::new()),
            tooltips: RefCell::new(WidgetRegistry::new()),
            resize: RefCell::new(TrailingDebounce::new(
                TimeoutScheduler,
                config.resize_settle_ms,
            )),
        });

        controller.init_tooltips();
        if js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver"))? {
            controller.observe_reveals()?;
            controller.observe_lazy_images()?;
        } else {
            log::warn!("IntersectionObserver unavailable; scroll effects disabled");
        }
        controller.apply_touch_mode()?;
        controller.wire_navigation()?;
        controller.wire_resize()?;

        log::info!("viewport effects mounted");
        Ok(controller)
    }

    fn init_tooltips(&self) {
        let mut tooltips = self.tooltips.borrow_mut();
        for (i, el) in dom::query_all(&self.document, &self.config.tooltip_selector)
            .iter()
            .enumerate()
        {
            let key = format!("tooltip-{i}");
            if let Err(err) = tooltips.get_or_try_insert_with(&key, || Tooltip::new(el)) {
                log::warn!("tooltip init skipped: {err:?}");
                return;
            }
        }
    }

    fn observe_reveals(self: &Rc<Self>) -> Result<(), JsValue> {
        let this = Rc::clone(self);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let width = dom::viewport_width(&this.window);
                for (order, entry) in entries.iter().enumerate() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    let ctrl = Rc::clone(&this);
                    TimeoutScheduler.defer(
                        stagger_delay_ms(order, width, &this.config),
                        Box::new(move || {
                            if let Err(err) = ctrl.reveal(&target) {
                                log::warn!("reveal failed: {err:?}");
                            }
                        }),
                    );
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(self.config.threshold));
        options.set_root_margin(&self.config.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        callback.forget();

        // the browser keeps an observer alive while it has targets
        for el in dom::query_all(&self.document, &self.config.reveal_selector) {
            observer.observe(&el);
        }
        Ok(())
    }

    /// Adds the reveal class; progress bars also replay their width.
    pub fn reveal(&self, target: &Element) -> Result<(), JsValue> {
        let classes = target.class_list();
        classes.add_1(&self.config.reveal_class)?;
        if classes.contains(&self.config.progress_class) {
            if let Some(bar) = target.dyn_ref::<HtmlElement>() {
                self.animate_progress(bar)?;
            }
        }
        Ok(())
    }

    fn animate_progress(&self, bar: &HtmlElement) -> Result<(), JsValue> {
        let style = bar.style();
        let target_width = style.get_property_value("width")?;
        style.set_property("width", "0")?;
        let bar = bar.clone();
        TimeoutScheduler.defer(
            self.config.progress_restore_ms,
            Box::new(move || {
                if let Err(err) = bar.style().set_property("width", &target_width) {
                    log::warn!("progress width restore failed: {err:?}");
                }
            }),
        );
        Ok(())
    }

    fn observe_lazy_images(&self) -> Result<(), JsValue> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    let Some(img) = target.dyn_ref::<HtmlImageElement>() else {
                        continue;
                    };
                    if let Err(err) = load_lazy_image(img) {
                        log::warn!("lazy image load failed: {err:?}");
                    }
                }
            },
        );

        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
        callback.forget();

        for img in dom::query_all(&self.document, &self.config.lazy_image_selector) {
            observer.observe(&img);
        }
        Ok(())
    }

    fn apply_touch_mode(&self) -> Result<(), JsValue> {
        let has_touch_start =
            js_sys::Reflect::has(&self.window, &JsValue::from_str("ontouchstart"))?;
        let max_touch_points = self.window.navigator().max_touch_points();
        if !is_touch_device(has_touch_start, max_touch_points) {
            return Ok(());
        }
        self.mark_touch_mode()
    }

    /// Flags the body as touch-driven and opts hoverable elements out of hover styling.
    pub fn mark_touch_mode(&self) -> Result<(), JsValue> {
        if let Some(body) = self.document.body() {
            body.class_list().add_1(&self.config.touch_body_class)?;
        }
        for el in dom::query_all(&self.document, &self.config.hover_selector) {
            el.class_list().add_1(&self.config.no_hover_class)?;
        }
        log::debug!("touch mode enabled");
        Ok(())
    }

    fn wire_navigation(self: &Rc<Self>) -> Result<(), JsValue> {
        let toggler = dom::query(&self.document, &self.config.nav_toggler_selector);
        let panel = dom::query(&self.document, &self.config.nav_collapse_selector);
        let (Some(toggler), Some(panel)) = (toggler, panel) else {
            return Ok(());
        };

        let target = toggler.clone();
        dom::on(&toggler, "click", move |_event| {
            let expanded = target.get_attribute("aria-expanded").as_deref() == Some("true");
            let flipped = if expanded { "false" } else { "true" };
            if let Err(err) = target.set_attribute("aria-expanded", flipped) {
                log::warn!("aria-expanded update failed: {err:?}");
            }
        })?;

        for link in dom::query_all(&self.document, &self.config.nav_link_selector) {
            let this = Rc::clone(self);
            let panel = panel.clone();
            dom::on(&link, "click", move |_event| {
                if nav_should_collapse(dom::viewport_width(&this.window), &this.config) {
                    this.collapse_nav(&panel);
                }
            })?;
        }
        Ok(())
    }

    fn collapse_nav(&self, panel: &Element) {
        let mut collapses = self.collapses.borrow_mut();
        match collapses.get_or_try_insert_with(NAV_KEY, || Collapse::quiet(panel)) {
            Ok(collapse) => collapse.hide(),
            Err(err) => log::warn!("navigation collapse unavailable: {err:?}"),
        }
    }

    fn wire_resize(self: &Rc<Self>) -> Result<(), JsValue> {
        let this = Rc::clone(self);
        dom::on(&self.window, "resize", move |_event| {
            let Some(body) = this.document.body() else {
                return;
            };
            let marker = this.config.resize_marker_class.clone();
            if let Err(err) = body.class_list().add_1(&marker) {
                log::warn!("resize marker failed: {err:?}");
                return;
            }
            this.resize.borrow_mut().trigger(move || {
                if let Err(err) = body.class_list().remove_1(&marker) {
                    log::warn!("resize marker removal failed: {err:?}");
                }
            });
        })
    }
}

/// Swaps `data-src` into `src` and drops the `lazy` class. Images without
/// `data-src` are left alone; returns whether anything was loaded.
pub fn load_lazy_image(img: &HtmlImageElement) -> Result<bool, JsValue> {
    let Some(src) = img.get_attribute("data-src") else {
        log::debug!("lazy image without data-src left as is");
        return Ok(false);
    };
    img.set_src(&src);
    img.class_list().remove_1("lazy")?;
    Ok(true)
}

/// Fills the hero region with decorative particles. Returns how many were added.
pub fn populate_particles(
    window: &Window,
    document: &Document,
    config: &ViewportConfig,
) -> Result<usize, JsValue> {
    let Some(hero) = dom::query(document, &config.hero_selector) else {
        return Ok(0);
    };
    let width = dom::viewport_width(window);
    let count = particle_count(width, config);
    let mobile = is_mobile(width, config);
    let mut random = js_sys::Math::random;

    for _ in 0..count {
        let particle: HtmlElement = document.create_element("div")?.dyn_into()?;
        let style = particle.style();
        for (property, value) in ParticleStyle::generate(mobile, &mut random).declarations() {
            style.set_property(property, &value)?;
        }
        hero.append_child(&particle)?;
    }
    log::debug!("{count} particles added");
    Ok(count)
}
