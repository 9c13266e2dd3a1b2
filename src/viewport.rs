//! Viewport-dependent numbers: stagger delays, breakpoints, touch detection
//! and the decorative particle styles.

use crate::config::ViewportConfig;

pub fn is_mobile(width: f64, config: &ViewportConfig) -> bool {
    width < config.mobile_breakpoint
}

/// Start offset for the `order`-th element revealed in one observer batch.
pub fn stagger_delay_ms(order: usize, width: f64, config: &ViewportConfig) -> u32 {
    let step = if is_mobile(width, config) {
        config.stagger_mobile_ms
    } else {
        config.stagger_desktop_ms
    };
    u32::try_from(order).unwrap_or(u32::MAX).saturating_mul(step)
}

pub fn nav_should_collapse(width: f64, config: &ViewportConfig) -> bool {
    width < config.nav_breakpoint
}

pub fn is_touch_device(has_touch_start: bool, max_touch_points: i32) -> bool {
    has_touch_start || max_touch_points > 0
}

pub fn particle_count(width: f64, config: &ViewportConfig) -> usize {
    if is_mobile(width, config) {
        config.particles_mobile
    } else {
        config.particles_desktop
    }
}

pub const PARTICLE_BACKGROUND: &str = "rgba(99, 102, 241, 0.5)";

/// Randomised look of one hero particle.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleStyle {
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl ParticleStyle {
    /// `random` must yield values in `[0, 1)`.
    pub fn generate(mobile: bool, random: &mut impl FnMut() -> f64) -> Self {
        let size_px = random() * 4.0 + 1.0;
        let left_pct = random() * 100.0;
        let top_pct = random() * 100.0;
        let duration_s = if mobile {
            random() * 8.0 + 8.0
        } else {
            random() * 10.0 + 10.0
        };
        let delay_s = random() * 5.0;
        Self {
            size_px,
            left_pct,
            top_pct,
            duration_s,
            delay_s,
        }
    }

    /// `(property, value)` pairs to set on the particle element.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let size = format!("{}px", self.size_px);
        vec![
            ("position", "absolute".into()),
            ("width", size.clone()),
            ("height", size),
            ("background", PARTICLE_BACKGROUND.into()),
            ("border-radius", "50%".into()),
            ("left", format!("{}%", self.left_pct)),
            ("top", format!("{}%", self.top_pct)),
            ("pointer-events", "none".into()),
            (
                "animation",
                format!("float {}s infinite ease-in-out", self.duration_s),
            ),
            ("animation-delay", format!("{}s", self.delay_s)),
        ]
    }
}
