use log::LevelFilter;
use portfolio_wasm::config::Config;
use portfolio_wasm::error::PortfolioError;

#[test]
fn defaults_match_page_markup() {
    let config = Config::default();
    assert_eq!(config.log_level, LevelFilter::Info);
    assert_eq!(config.filter.button_selector, ".project-filter");
    assert_eq!(config.filter.show_settle_ms, 50);
    assert_eq!(config.filter.hide_delay_ms, 300);
    assert_eq!(config.form.sent_reset_ms, 2000);
    assert_eq!(config.form.toast_container_id, "toastContainer");
    assert_eq!(config.viewport.resize_settle_ms, 400);
    assert_eq!(config.viewport.root_margin, "0px 0px -50px 0px");
    assert_eq!(config.viewport.mobile_breakpoint, 768.0);
    assert_eq!(config.viewport.nav_breakpoint, 992.0);
    assert_eq!(config.overlay.cancel_key, "Escape");
}

#[test]
fn partial_block_overrides_only_named_fields() {
    let raw = r#"{
        "logLevel": "debug",
        "filter": { "hideDelayMs": 500 },
        "form": { "messages": { "required": "Pflichtfeld" } }
    }"#;
    let config = Config::from_json(raw).unwrap();

    assert_eq!(config.log_level, LevelFilter::Debug);
    assert_eq!(config.filter.hide_delay_ms, 500);
    assert_eq!(config.filter.show_settle_ms, 50);
    assert_eq!(config.form.messages.required, "Pflichtfeld");
    assert_eq!(config.form.messages.invalid_email, "Enter a valid email address");
    assert_eq!(config.viewport.particles_desktop, 50);
}

#[test]
fn blank_block_is_default() {
    let config = Config::from_json("  \n ").unwrap();
    assert_eq!(config.overlay.card_selector, ".project-card");
}

#[test]
fn malformed_block_is_a_config_error() {
    let err = Config::from_json("{ \"filter\": ").unwrap_err();
    assert!(matches!(err, PortfolioError::Config { .. }));
    assert!(err.to_string().starts_with("Invalid configuration block"));
}

#[test]
fn wrong_type_is_rejected() {
    assert!(Config::from_json(r#"{ "filter": { "hideDelayMs": "slow" } }"#).is_err());
}
