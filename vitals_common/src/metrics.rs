//! Core Web Vitals definitions and the rating classifier.
//!
//! Each tracked metric has a fixed [`MetricDefinition`] with its "good" and
//! "poor" thresholds. A [`Rating`] is always derived from a value and its
//! definition; it is never stored.

use std::cmp::Ordering;
use serde::{Deserialize, Serialize};
use crate::VitalsError;

/// The three tracked metrics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// Largest Contentful Paint, in seconds.
    Lcp,
    /// Interaction to Next Paint, in milliseconds.
    Inp,
    /// Cumulative Layout Shift, unitless.
    Cls,
}

impl MetricKind {
    pub fn all() -> [MetricKind; 3] {
        [MetricKind::Lcp, MetricKind::Inp, MetricKind::Cls]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Lcp => "lcp",
            MetricKind::Inp => "inp",
            MetricKind::Cls => "cls",
        }
    }

    pub fn acronym(&self) -> &'static str {
        match self {
            MetricKind::Lcp => "LCP",
            MetricKind::Inp => "INP",
            MetricKind::Cls => "CLS",
        }
    }

    pub fn definition(&self) -> &'static MetricDefinition {
        match self {
            MetricKind::Lcp => &LCP,
            MetricKind::Inp => &INP,
            MetricKind::Cls => &CLS,
        }
    }

    /// Translation key for the metric's full name.
    pub fn name_key(&self) -> &'static str {
        match self {
            MetricKind::Lcp => "metric.lcp.name",
            MetricKind::Inp => "metric.inp.name",
            MetricKind::Cls => "metric.cls.name",
        }
    }

    /// Translation key for the one-line explanation shown under the gauge.
    pub fn description_key(&self) -> &'static str {
        match self {
            MetricKind::Lcp => "metric.lcp.description",
            MetricKind::Inp => "metric.inp.description",
            MetricKind::Cls => "metric.cls.description",
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.acronym())
    }
}

impl std::str::FromStr for MetricKind {
    type Err = VitalsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lcp" => Ok(MetricKind::Lcp),
            "inp" => Ok(MetricKind::Inp),
            "cls" => Ok(MetricKind::Cls),
            _ => Err(VitalsError::UnknownMetric(s.to_string())),
        }
    }
}

/// Static thresholds and display configuration for one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricDefinition {
    pub kind: MetricKind,
    /// Unit suffix shown after the value ("" for unitless metrics).
    pub unit: &'static str,
    /// Values at or below this are rated good.
    pub good_threshold: f64,
    /// Values above this are rated poor.
    pub poor_threshold: f64,
    /// Value at which the gauge arc is full.
    pub max_scale: f64,
    /// Decimal places used when formatting the value.
    pub display_precision: usize,
    /// Increment used by the manual -/+ controls.
    pub step: f64,
}

impl MetricDefinition {
    pub fn classify(&self, value: f64) -> Rating {
        classify(self, value)
    }
}

pub static LCP: MetricDefinition = MetricDefinition {
    kind: MetricKind::Lcp,
    unit: "s",
    good_threshold: 2.5,
    poor_threshold: 4.0,
    max_scale: 6.0,
    display_precision: 1,
    step: 0.1,
};

pub static INP: MetricDefinition = MetricDefinition {
    kind: MetricKind::Inp,
    unit: "ms",
    good_threshold: 200.0,
    poor_threshold: 500.0,
    max_scale: 800.0,
    display_precision: 0,
    step: 25.0,
};

pub static CLS: MetricDefinition = MetricDefinition {
    kind: MetricKind::Cls,
    unit: "",
    good_threshold: 0.1,
    poor_threshold: 0.25,
    max_scale: 0.5,
    display_precision: 2,
    step: 0.01,
};

/// Qualitative rating bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rating {
    Good,
    NeedsImprovement,
    Poor,
}

impl Rating {
    /// 0 for good, 2 for poor.
    pub fn severity(&self) -> u8 {
        match self {
            Rating::Good => 0,
            Rating::NeedsImprovement => 1,
            Rating::Poor => 2,
        }
    }

    /// CSS color token for the arc and badge.
    pub fn color(&self) -> &'static str {
        match self {
            Rating::Good => "#0cce6b",
            Rating::NeedsImprovement => "#ffa400",
            Rating::Poor => "#ff4e42",
        }
    }

    pub fn translation_key(&self) -> &'static str {
        match self {
            Rating::Good => "rating.good",
            Rating::NeedsImprovement => "rating.needs_improvement",
            Rating::Poor => "rating.poor",
        }
    }
}

impl PartialOrd for Rating {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rating {
    fn cmp(&self, other: &Self) -> Ordering {
        self.severity().cmp(&other.severity())
    }
}

/// Rate `value` against the definition's thresholds.
///
/// Total over all inputs. Negative values compare below the good threshold
/// and are rated good; NaN fails both comparisons and is rated poor.
pub fn classify(definition: &MetricDefinition, value: f64) -> Rating {
    if value <= definition.good_threshold {
        Rating::Good
    } else if value <= definition.poor_threshold {
        Rating::NeedsImprovement
    } else {
        Rating::Poor
    }
}

/// A metric together with its current value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MetricReading {
    pub kind: MetricKind,
    pub value: f64,
}

impl MetricReading {
    pub fn rating(&self) -> Rating {
        classify(self.kind.definition(), self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcp_ratings() {
        assert_eq!(classify(&LCP, 1.8), Rating::Good);
        assert_eq!(classify(&LCP, 3.0), Rating::NeedsImprovement);
        assert_eq!(classify(&LCP, 4.5), Rating::Poor);
    }

    #[test]
    fn test_threshold_boundaries() {
        let eps = 1e-9;
        for kind in MetricKind::all() {
            let d = kind.definition();
            assert_eq!(d.classify(d.good_threshold), Rating::Good, "{kind} at good");
            assert_eq!(d.classify(d.good_threshold + eps), Rating::NeedsImprovement, "{kind} above good");
            assert_eq!(d.classify(d.poor_threshold), Rating::NeedsImprovement, "{kind} at poor");
            assert_eq!(d.classify(d.poor_threshold + eps), Rating::Poor, "{kind} above poor");
        }
    }

    #[test]
    fn test_negative_value_is_good() {
        assert_eq!(classify(&INP, -10.0), Rating::Good);
    }

    #[test]
    fn test_nan_is_poor() {
        assert_eq!(classify(&CLS, f64::NAN), Rating::Poor);
    }

    #[test]
    fn test_rating_order_follows_severity() {
        assert!(Rating::Good < Rating::NeedsImprovement);
        assert!(Rating::NeedsImprovement < Rating::Poor);
    }

    #[test]
    fn test_metric_kind_parse() {
        assert_eq!("LCP".parse::<MetricKind>(), Ok(MetricKind::Lcp));
        assert_eq!(" cls ".parse::<MetricKind>(), Ok(MetricKind::Cls));
        assert!(matches!("fid".parse::<MetricKind>(), Err(VitalsError::UnknownMetric(name)) if name == "fid"));
    }
}
