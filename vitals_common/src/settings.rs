//! Application settings and constants.

use serde::{Deserialize, Serialize};
use crate::Locale;

/// `localStorage` key holding the user's locale code.
pub const LOCALE_STORAGE_KEY: &str = "vitals-lessons.locale";

/// Locale used when neither storage nor the browser yields a supported one.
pub const DEFAULT_LOCALE: Locale = Locale::En;

/// Radius of the gauge's half-circle, in SVG user units.
pub const GAUGE_RADIUS: f64 = 80.0;

/// Duration of the value/rating transition, in seconds.
pub const TRANSITION_SECS: f64 = 0.8;

/// Visual settings for the metric gauges.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GaugeSettings {
    pub radius: f64,
    pub stroke_width: f64,
    pub transition_secs: f64,
}

impl Default for GaugeSettings {
    fn default() -> Self {
        Self {
            radius: GAUGE_RADIUS,
            stroke_width: 14.0,
            transition_secs: TRANSITION_SECS,
        }
    }
}

impl GaugeSettings {
    /// Inline CSS `transition` easing each property over `transition_secs`.
    pub fn transition_css(&self, properties: &[&str]) -> String {
        let parts: Vec<String> = properties
            .iter()
            .map(|property| format!("{} {}s ease-out", property, self.transition_secs))
            .collect();
        format!("transition: {};", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_css_uses_transition_secs() {
        let css = GaugeSettings::default().transition_css(&["color", "border-color"]);
        assert_eq!(css, "transition: color 0.8s ease-out, border-color 0.8s ease-out;");
    }

    #[test]
    fn test_transition_css_follows_custom_duration() {
        let settings = GaugeSettings { transition_secs: 0.25, ..GaugeSettings::default() };
        assert_eq!(settings.transition_css(&["stroke"]), "transition: stroke 0.25s ease-out;");
    }
}
