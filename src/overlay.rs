use crate::config::OverlayConfig;

/// Which overlay a card click should open.
///
/// Clicks that land inside a nested link or button belong to that control,
/// not to the card. Blank targets are treated as absent.
pub fn overlay_for_click(inside_passthrough: bool, target: Option<&str>) -> Option<&str> {
    if inside_passthrough {
        return None;
    }
    target.map(str::trim).filter(|selector| !selector.is_empty())
}

pub fn is_cancel_key(key: &str, config: &OverlayConfig) -> bool {
    key == config.cancel_key
}
