//! Gauge geometry and animation state.
//!
//! The gauge is a fixed half-circle stroked with a dash pattern: the dash
//! array is the arc length and the dash offset hides the unfilled part.
//! [`GaugeState`] is the headless model behind the rendered widget; the
//! render layer only ticks it and paints its [`GaugeView`].

use std::f64::consts::PI;
use serde::{Deserialize, Serialize};
use crate::metrics::{MetricDefinition, Rating};
use crate::settings::TRANSITION_SECS;

/// Stroke-dash pair encoding a fill percentage on the arc.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ArcParams {
    pub dash_array: f64,
    pub dash_offset: f64,
}

/// Compute dash parameters for `value` on a scale of `0..=max_scale`.
///
/// Out-of-range values are clamped. A non-positive scale yields an empty arc.
pub fn arc_params(value: f64, max_scale: f64, circumference: f64) -> ArcParams {
    let percentage = if max_scale > 0.0 {
        value.clamp(0.0, max_scale) / max_scale
    } else {
        0.0
    };
    // clamp() passes NaN through
    let percentage = if percentage.is_nan() { 0.0 } else { percentage };

    ArcParams {
        dash_array: circumference,
        dash_offset: circumference * (1.0 - percentage),
    }
}

/// Fixed half-circle the gauge is drawn on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    pub radius: f64,
    pub circumference: f64,
}

impl ArcGeometry {
    pub fn new(radius: f64) -> Self {
        Self { radius, circumference: PI * radius }
    }

    pub fn params(&self, value: f64, max_scale: f64) -> ArcParams {
        arc_params(value, max_scale, self.circumference)
    }

    /// SVG `viewBox` fitting the half-circle plus its stroke.
    pub fn view_box(&self, stroke_width: f64) -> String {
        let pad = stroke_width / 2.0;
        format!("0 0 {} {}", 2.0 * (self.radius + pad), self.radius + 2.0 * pad)
    }

    /// Left-to-right half-circle path, opening downwards.
    pub fn semicircle_path(&self, stroke_width: f64) -> String {
        let pad = stroke_width / 2.0;
        let r = self.radius;
        let baseline = r + pad;
        format!("M {} {} A {} {} 0 0 1 {} {}", pad, baseline, r, r, 2.0 * r + pad, baseline)
    }
}

/// Round `value` to `precision` decimal places for display.
pub fn format_value(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Eased interpolation between two values over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: f64,
    pub to: f64,
    pub elapsed: f64,
    pub duration: f64,
}

impl Transition {
    pub fn settled(value: f64, duration: f64) -> Self {
        Self { from: value, to: value, elapsed: duration, duration }
    }

    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    pub fn advance(&mut self, delta_secs: f64) {
        if delta_secs > 0.0 {
            self.elapsed = (self.elapsed + delta_secs).min(self.duration.max(0.0));
        }
    }

    pub fn sample(&self) -> f64 {
        let p = self.progress();
        if p >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_out_cubic(p)
    }
}

/// Everything the render layer paints for one gauge.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeView {
    pub label: &'static str,
    pub unit: &'static str,
    pub formatted_value: String,
    pub rating: Rating,
    pub color: &'static str,
    pub arc: ArcParams,
}

/// Current value, previous value and in-flight transition of one gauge.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeState {
    definition: &'static MetricDefinition,
    value: f64,
    previous_value: f64,
    transition: Transition,
}

impl GaugeState {
    pub fn new(definition: &'static MetricDefinition, value: f64) -> Self {
        Self::with_transition_secs(definition, value, TRANSITION_SECS)
    }

    pub fn with_transition_secs(definition: &'static MetricDefinition, value: f64, secs: f64) -> Self {
        Self {
            definition,
            value,
            previous_value: value,
            transition: Transition::settled(value, secs),
        }
    }

    pub fn definition(&self) -> &'static MetricDefinition {
        self.definition
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn previous_value(&self) -> f64 {
        self.previous_value
    }

    /// Move to a new value. Returns false if nothing changed.
    ///
    /// The transition restarts from whatever is currently displayed, so a
    /// retarget mid-flight does not jump.
    pub fn set_value(&mut self, value: f64) -> bool {
        if value == self.value {
            return false;
        }
        let from = self.displayed_value();
        self.previous_value = self.value;
        self.value = value;
        self.transition = Transition {
            from,
            to: value,
            elapsed: 0.0,
            duration: self.transition.duration,
        };
        true
    }

    pub fn tick(&mut self, delta_secs: f64) {
        self.transition.advance(delta_secs);
    }

    pub fn is_animating(&self) -> bool {
        !self.transition.is_finished()
    }

    pub fn displayed_value(&self) -> f64 {
        self.transition.sample()
    }

    /// Rating of the target value, not the eased one.
    pub fn rating(&self) -> Rating {
        self.definition.classify(self.value)
    }

    pub fn previous_rating(&self) -> Rating {
        self.definition.classify(self.previous_value)
    }

    pub fn arc(&self, geometry: &ArcGeometry) -> ArcParams {
        geometry.params(self.displayed_value(), self.definition.max_scale)
    }

    pub fn view_model(&self, geometry: &ArcGeometry) -> GaugeView {
        let rating = self.rating();
        GaugeView {
            label: self.definition.kind.acronym(),
            unit: self.definition.unit,
            formatted_value: format_value(self.value, self.definition.display_precision),
            rating,
            color: rating.color(),
            arc: self.arc(geometry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{CLS, INP, LCP};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_arc_empty_full_and_clamped() {
        let c = 100.0;
        assert_eq!(arc_params(0.0, 6.0, c).dash_offset, c);
        assert_eq!(arc_params(6.0, 6.0, c).dash_offset, 0.0);
        assert_eq!(arc_params(12.0, 6.0, c).dash_offset, 0.0);
        assert_eq!(arc_params(-3.0, 6.0, c).dash_offset, c);
        assert_eq!(arc_params(3.0, 6.0, c).dash_array, c);
    }

    #[test]
    fn test_arc_half() {
        let p = arc_params(3.0, 6.0, 100.0);
        assert!((p.dash_offset - 50.0).abs() < EPS);
    }

    #[test]
    fn test_arc_degenerate_scale() {
        assert_eq!(arc_params(5.0, 0.0, 10.0).dash_offset, 10.0);
        assert_eq!(arc_params(f64::NAN, 6.0, 10.0).dash_offset, 10.0);
    }

    #[test]
    fn test_geometry_circumference_is_half_circle() {
        let g = ArcGeometry::new(80.0);
        assert!((g.circumference - PI * 80.0).abs() < EPS);
        assert_eq!(g.semicircle_path(10.0), "M 5 85 A 80 80 0 0 1 165 85");
        assert_eq!(g.view_box(10.0), "0 0 170 90");
    }

    #[test]
    fn test_format_value_precision() {
        assert_eq!(format_value(1.84, LCP.display_precision), "1.8");
        assert_eq!(format_value(149.6, INP.display_precision), "150");
        assert_eq!(format_value(0.081, CLS.display_precision), "0.08");
    }

    #[test]
    fn test_new_state_is_settled() {
        let state = GaugeState::new(&LCP, 1.8);
        assert!(!state.is_animating());
        assert_eq!(state.displayed_value(), 1.8);
        assert_eq!(state.previous_value(), 1.8);
    }

    #[test]
    fn test_set_same_value_is_noop() {
        let mut state = GaugeState::new(&LCP, 1.8);
        assert!(!state.set_value(1.8));
        assert!(!state.is_animating());
    }

    #[test]
    fn test_transition_eases_and_settles() {
        let mut state = GaugeState::new(&LCP, 1.0);
        assert!(state.set_value(5.0));
        assert!(state.is_animating());
        assert_eq!(state.previous_value(), 1.0);
        assert_eq!(state.displayed_value(), 1.0);

        let mut last = state.displayed_value();
        for _ in 0..7 {
            state.tick(0.1);
            let now = state.displayed_value();
            assert!(now >= last);
            assert!(now <= 5.0);
            last = now;
        }
        assert!(state.is_animating());

        state.tick(0.2);
        assert!(!state.is_animating());
        assert_eq!(state.displayed_value(), 5.0);
    }

    #[test]
    fn test_rating_uses_target_not_eased_value() {
        let mut state = GaugeState::new(&LCP, 1.8);
        state.set_value(4.5);
        state.tick(0.05);
        assert!(state.displayed_value() < LCP.poor_threshold);
        assert_eq!(state.rating(), Rating::Poor);
        assert_eq!(state.previous_rating(), Rating::Good);
    }

    #[test]
    fn test_retarget_mid_flight_starts_from_displayed() {
        let mut state = GaugeState::new(&INP, 100.0);
        state.set_value(500.0);
        state.tick(0.2);
        let shown = state.displayed_value();
        state.set_value(300.0);
        assert!((state.displayed_value() - shown).abs() < EPS);
        assert_eq!(state.previous_value(), 500.0);
    }

    #[test]
    fn test_view_model() {
        let geometry = ArcGeometry::new(80.0);
        let state = GaugeState::new(&LCP, 6.0);
        let view = state.view_model(&geometry);
        assert_eq!(view.label, "LCP");
        assert_eq!(view.unit, "s");
        assert_eq!(view.formatted_value, "6.0");
        assert_eq!(view.rating, Rating::Poor);
        assert_eq!(view.color, Rating::Poor.color());
        assert_eq!(view.arc.dash_offset, 0.0);
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let mut state = GaugeState::with_transition_secs(&CLS, 0.05, 0.0);
        state.set_value(0.3);
        assert!(!state.is_animating());
        assert_eq!(state.displayed_value(), 0.3);
    }
}
