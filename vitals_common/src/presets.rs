//! Scenario presets and the set of tracked readings they drive.

use serde::{Deserialize, Serialize};
use crate::metrics::{MetricKind, MetricReading, Rating};

/// Named bundle of values applied to all tracked metrics at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioPreset {
    /// Stable identifier, also the suffix of the label's translation key.
    pub id: &'static str,
    /// English label, used when no translation exists.
    pub label: &'static str,
    pub readings: [(MetricKind, f64); 3],
}

impl ScenarioPreset {
    pub fn label_key(&self) -> String {
        format!("preset.{}", self.id)
    }

    pub fn value(&self, kind: MetricKind) -> Option<f64> {
        self.readings.iter().find(|(k, _)| *k == kind).map(|(_, v)| *v)
    }
}

pub static PRESETS: &[ScenarioPreset] = &[
    ScenarioPreset {
        id: "fast_site",
        label: "Fast Site",
        readings: [(MetricKind::Lcp, 1.2), (MetricKind::Inp, 80.0), (MetricKind::Cls, 0.02)],
    },
    ScenarioPreset {
        id: "slow_loading",
        label: "Slow Loading",
        readings: [(MetricKind::Lcp, 4.5), (MetricKind::Inp, 150.0), (MetricKind::Cls, 0.08)],
    },
    ScenarioPreset {
        id: "sluggish_interaction",
        label: "Sluggish Interaction",
        readings: [(MetricKind::Lcp, 2.2), (MetricKind::Inp, 650.0), (MetricKind::Cls, 0.04)],
    },
    ScenarioPreset {
        id: "layout_shift_heavy",
        label: "Layout Shift Heavy",
        readings: [(MetricKind::Lcp, 2.0), (MetricKind::Inp, 180.0), (MetricKind::Cls, 0.35)],
    },
];

pub fn find_preset(id: &str) -> Option<&'static ScenarioPreset> {
    PRESETS.iter().find(|p| p.id == id)
}

/// Current value of every tracked metric.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MetricReadings {
    pub lcp: f64,
    pub inp: f64,
    pub cls: f64,
}

impl Default for MetricReadings {
    fn default() -> Self {
        Self { lcp: 1.8, inp: 150.0, cls: 0.05 }
    }
}

impl MetricReadings {
    pub fn get(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::Lcp => self.lcp,
            MetricKind::Inp => self.inp,
            MetricKind::Cls => self.cls,
        }
    }

    pub fn set(&mut self, kind: MetricKind, value: f64) {
        match kind {
            MetricKind::Lcp => self.lcp = value,
            MetricKind::Inp => self.inp = value,
            MetricKind::Cls => self.cls = value,
        }
    }

    /// Nudge one reading by `steps` increments of its step size, floored at zero.
    pub fn step(&mut self, kind: MetricKind, steps: i32) {
        let definition = kind.definition();
        let next = self.get(kind) + definition.step * steps as f64;
        // Snap to the display precision so repeated steps don't drift.
        let scale = 10f64.powi(definition.display_precision as i32);
        self.set(kind, ((next * scale).round() / scale).max(0.0));
    }

    pub fn readings(&self) -> [MetricReading; 3] {
        MetricKind::all().map(|kind| MetricReading { kind, value: self.get(kind) })
    }

    pub fn rating(&self, kind: MetricKind) -> Rating {
        kind.definition().classify(self.get(kind))
    }

    /// Worst rating across all tracked metrics.
    pub fn overall(&self) -> Rating {
        MetricKind::all()
            .into_iter()
            .map(|kind| self.rating(kind))
            .max()
            .unwrap_or(Rating::Good)
    }

    /// Overwrite every reading from the preset.
    pub fn apply_preset(&mut self, preset: &ScenarioPreset) {
        for (kind, value) in preset.readings {
            self.set(kind, value);
        }
        log::debug!("Applied preset '{}': {:?}", preset.id, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_ids_unique() {
        for (i, a) in PRESETS.iter().enumerate() {
            for b in &PRESETS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_every_preset_covers_every_metric() {
        for preset in PRESETS {
            for kind in MetricKind::all() {
                assert!(preset.value(kind).is_some(), "{} lacks {}", preset.id, kind);
            }
        }
    }

    #[test]
    fn test_find_preset() {
        assert_eq!(find_preset("slow_loading").map(|p| p.label), Some("Slow Loading"));
        assert!(find_preset("nope").is_none());
    }

    #[test]
    fn test_step_snaps_and_floors() {
        let mut r = MetricReadings { lcp: 0.1, inp: 10.0, cls: 0.0 };
        r.step(MetricKind::Lcp, 1);
        assert_eq!(r.lcp, 0.2);
        r.step(MetricKind::Lcp, -5);
        assert_eq!(r.lcp, 0.0);
        r.step(MetricKind::Inp, -1);
        assert_eq!(r.inp, 0.0);
        r.step(MetricKind::Cls, 3);
        assert_eq!(r.cls, 0.03);
    }

    #[test]
    fn test_overall_is_worst() {
        let mut r = MetricReadings::default();
        assert_eq!(r.overall(), Rating::Good);
        r.set(MetricKind::Cls, 0.2);
        assert_eq!(r.overall(), Rating::NeedsImprovement);
        r.set(MetricKind::Inp, 900.0);
        assert_eq!(r.overall(), Rating::Poor);
    }
}
