/// Preset application against the tracked readings.
use vitals_common::{find_preset, MetricKind, MetricReadings, Rating, PRESETS};

#[test]
fn test_slow_loading_sets_all_three_readings() {
    let preset = find_preset("slow_loading").expect("preset exists");
    let mut readings = MetricReadings::default();
    readings.set(MetricKind::Inp, 900.0);
    assert_eq!(readings.rating(MetricKind::Inp), Rating::Poor);

    readings.apply_preset(preset);

    assert_eq!(readings.get(MetricKind::Lcp), 4.5);
    assert_eq!(readings.get(MetricKind::Inp), 150.0);
    assert_eq!(readings.get(MetricKind::Cls), 0.08);
    assert_eq!(readings.rating(MetricKind::Lcp), Rating::Poor);
    // no stale value from before the preset
    assert_eq!(readings.rating(MetricKind::Inp), Rating::Good);
    assert_eq!(readings.rating(MetricKind::Cls), Rating::Good);
}

#[test]
fn test_applying_preset_is_idempotent() {
    for preset in PRESETS {
        let mut readings = MetricReadings::default();
        readings.apply_preset(preset);
        let once = readings;
        readings.apply_preset(preset);
        assert_eq!(readings, once, "{}", preset.id);
    }
}

#[test]
fn test_readings_follow_metric_order() {
    let readings = MetricReadings { lcp: 1.0, inp: 2.0, cls: 3.0 };
    let kinds: Vec<_> = readings.readings().iter().map(|r| (r.kind, r.value)).collect();
    assert_eq!(kinds, vec![(MetricKind::Lcp, 1.0), (MetricKind::Inp, 2.0), (MetricKind::Cls, 3.0)]);
    assert_eq!(readings.readings()[0].rating(), Rating::Good);
}

#[test]
fn test_presets_span_every_rating() {
    let mut seen = Vec::new();
    for preset in PRESETS {
        let mut readings = MetricReadings::default();
        readings.apply_preset(preset);
        seen.push(readings.overall());
    }
    assert!(seen.contains(&Rating::Good));
    assert!(seen.contains(&Rating::Poor));
}
