/// Classifier and arc geometry properties across every metric definition.
use vitals_common::{arc_params, classify, ArcGeometry, MetricKind, Rating, LCP};

#[test]
fn test_classify_is_monotonic_in_severity() {
    for kind in MetricKind::all() {
        let d = kind.definition();
        let steps = 2000;
        let mut last = Rating::Good;
        for i in 0..=steps {
            let value = d.max_scale * 1.5 * i as f64 / steps as f64;
            let rating = classify(d, value);
            assert!(rating >= last, "{} dropped from {:?} to {:?} at {}", kind, last, rating, value);
            last = rating;
        }
        assert_eq!(last, Rating::Poor);
    }
}

#[test]
fn test_lcp_end_to_end() {
    assert_eq!(classify(&LCP, 1.8), Rating::Good);
    assert_eq!(classify(&LCP, 3.0), Rating::NeedsImprovement);
    assert_eq!(classify(&LCP, 4.5), Rating::Poor);
    assert_eq!(LCP.good_threshold, 2.5);
    assert_eq!(LCP.poor_threshold, 4.0);
    assert_eq!(LCP.max_scale, 6.0);
}

#[test]
fn test_thresholds_are_ordered_within_scale() {
    for kind in MetricKind::all() {
        let d = kind.definition();
        assert_eq!(d.kind, kind);
        assert!(0.0 < d.good_threshold);
        assert!(d.good_threshold < d.poor_threshold);
        assert!(d.poor_threshold < d.max_scale);
    }
}

#[test]
fn test_arc_offset_shrinks_as_value_grows() {
    let geometry = ArcGeometry::new(80.0);
    for kind in MetricKind::all() {
        let d = kind.definition();
        assert_eq!(geometry.params(0.0, d.max_scale).dash_offset, geometry.circumference);
        assert_eq!(geometry.params(d.max_scale, d.max_scale).dash_offset, 0.0);
        assert_eq!(geometry.params(d.max_scale * 2.0, d.max_scale).dash_offset, 0.0);

        let mut last = f64::INFINITY;
        for i in 0..=50 {
            let offset = arc_params(d.max_scale * i as f64 / 50.0, d.max_scale, geometry.circumference).dash_offset;
            assert!(offset <= last);
            last = offset;
        }
    }
}
