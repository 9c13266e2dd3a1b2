//! Page configuration.
//!
//! Every selector, delay, breakpoint and user-facing string the controllers
//! use lives here. A page may override any subset of it with a JSON block:
//!
//! ```html
//! <script type="application/json" id="portfolio-config">
//!   { "logLevel": "debug", "form": { "messages": { "required": "Pflichtfeld" } } }
//! </script>
//! ```

use log::LevelFilter;
use serde::Deserialize;

use crate::error::PortfolioError;

/// Id of the optional `<script type="application/json">` block.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub log_level: LevelFilter,
    pub filter: FilterConfig,
    pub form: FormConfig,
    pub viewport: ViewportConfig,
    pub overlay: OverlayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            filter: FilterConfig::default(),
            form: FormConfig::default(),
            viewport: ViewportConfig::default(),
            overlay: OverlayConfig::default(),
        }
    }
}

impl Config {
    pub fn from_json(raw: &str) -> Result<Self, PortfolioError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterConfig {
    pub button_selector: String,
    pub item_selector: String,
    pub active_classes: Vec<String>,
    pub inactive_classes: Vec<String>,
    pub show_settle_ms: u32,
    pub hide_delay_ms: u32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            button_selector: ".project-filter".into(),
            item_selector: "[data-categories]".into(),
            active_classes: vec!["active".into(), "btn-primary".into()],
            inactive_classes: vec!["btn-outline-primary".into()],
            show_settle_ms: 50,
            hide_delay_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormConfig {
    pub form_selector: String,
    pub field_selector: String,
    pub submit_selector: String,
    pub sent_reset_ms: u32,
    pub toast_container_id: String,
    /// How long a toast stays up when the widget toolkit is not loaded.
    pub toast_fallback_ms: u32,
    pub messages: Messages,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_selector: "form".into(),
            field_selector: "input, textarea, select".into(),
            submit_selector: "button[type=\"submit\"]".into(),
            sent_reset_ms: 2000,
            toast_container_id: "toastContainer".into(),
            toast_fallback_ms: 5000,
            messages: Messages::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    pub required: String,
    pub invalid_email: String,
    pub invalid_phone: String,
    pub error_prefix: String,
    pub form_has_errors: String,
    pub form_sent: String,
    pub form_sent_announcement: String,
    pub sent_label: String,
    pub sent_aria_label: String,
    pub dismiss_label: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            required: "This field is required".into(),
            invalid_email: "Enter a valid email address".into(),
            invalid_phone: "Enter a valid phone number".into(),
            error_prefix: "Error: ".into(),
            form_has_errors: "Please fix the errors in the form".into(),
            form_sent: "Message sent successfully!".into(),
            form_sent_announcement: "Form submitted successfully".into(),
            sent_label: "Sent!".into(),
            sent_aria_label: "Message sent".into(),
            dismiss_label: "Close notification".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewportConfig {
    pub reveal_selector: String,
    pub reveal_class: String,
    pub progress_class: String,
    pub threshold: f64,
    pub root_margin: String,
    pub mobile_breakpoint: f64,
    pub nav_breakpoint: f64,
    pub stagger_mobile_ms: u32,
    pub stagger_desktop_ms: u32,
    pub progress_restore_ms: u32,
    pub lazy_image_selector: String,
    pub touch_body_class: String,
    pub hover_selector: String,
    pub no_hover_class: String,
    pub nav_toggler_selector: String,
    pub nav_collapse_selector: String,
    pub nav_link_selector: String,
    pub resize_marker_class: String,
    pub resize_settle_ms: u32,
    pub hero_selector: String,
    pub particles_mobile: usize,
    pub particles_desktop: usize,
    pub tooltip_selector: String,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            reveal_selector:
                ".skill-item, .project-card, .diary-entry, .contact-item, .stat-item, .progress-bar"
                    .into(),
            reveal_class: "fade-in".into(),
            progress_class: "progress-bar".into(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".into(),
            mobile_breakpoint: 768.0,
            nav_breakpoint: 992.0,
            stagger_mobile_ms: 100,
            stagger_desktop_ms: 150,
            progress_restore_ms: 300,
            lazy_image_selector: "img[loading=\"lazy\"]".into(),
            touch_body_class: "touch-device".into(),
            hover_selector: ".project-card, .nav-link, .button".into(),
            no_hover_class: "no-hover".into(),
            nav_toggler_selector: ".navbar-toggler".into(),
            nav_collapse_selector: ".navbar-collapse".into(),
            nav_link_selector: ".nav-link".into(),
            resize_marker_class: "resize-animation-stopper".into(),
            resize_settle_ms: 400,
            hero_selector: ".hero-section".into(),
            particles_mobile: 25,
            particles_desktop: 50,
            tooltip_selector: "[data-bs-toggle=\"tooltip\"]".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OverlayConfig {
    pub card_selector: String,
    pub overlay_selector: String,
    /// Elements inside a card that handle their own clicks.
    pub passthrough_selector: String,
    pub target_attribute: String,
    pub cancel_key: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            card_selector: ".project-card".into(),
            overlay_selector: ".project-modal".into(),
            passthrough_selector: "a, button".into(),
            target_attribute: "data-bs-target".into(),
            cancel_key: "Escape".into(),
        }
    }
}
