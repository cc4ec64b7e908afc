//! Metric Gauge Widget
//!
//! A half-circle gauge for one Core Web Vital. The arc is drawn with a stroke
//! dash pattern and eases toward each new value; the rating badge and arc
//! color follow the target value immediately.

use leptos::prelude::*;
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};
use vitals_common::settings::GaugeSettings;
use vitals_common::{ArcGeometry, GaugeState, MetricKind};
use super::RatingBadge;
use crate::i18n::use_i18n;

/// Longest frame step fed to the animation, in seconds.
const MAX_FRAME_SECS: f64 = 0.1;

/// Gauge component for a single metric.
#[component]
pub fn MetricGauge(
    /// Metric shown by this gauge
    kind: MetricKind,
    /// Current value in the metric's unit
    #[prop(into)] value: Signal<f64>,
    #[prop(optional)] settings: Option<GaugeSettings>,
) -> impl IntoView {
    let i18n = use_i18n();
    let settings = settings.unwrap_or_default();
    let geometry = ArcGeometry::new(settings.radius);
    let stroke_width = settings.stroke_width;

    let state = RwSignal::new(GaugeState::with_transition_secs(
        kind.definition(),
        value.get_untracked(),
        settings.transition_secs,
    ));

    let raf = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        // The first frame after resuming can carry the whole paused interval
        let delta = (args.delta / 1000.0).min(MAX_FRAME_SECS);
        state.update(|s| s.tick(delta));
    });

    let resume = raf.resume.clone();
    Effect::new(move |_| {
        let next = value.get();
        if state.try_update(|s| s.set_value(next)).unwrap_or(false) {
            log::debug!("{} -> {}", kind, next);
            resume();
        }
    });

    let pause = raf.pause.clone();
    Effect::new(move |_| {
        if !state.with(|s| s.is_animating()) {
            pause();
        }
    });

    let view_model = Memo::new(move |_| state.with(|s| s.view_model(&geometry)));
    let rating = Signal::derive(move || view_model.get().rating);

    let track_path = geometry.semicircle_path(stroke_width);
    let value_path = track_path.clone();
    let arc_transition = settings.transition_css(&["stroke"]);
    let label_transition = settings.transition_css(&["color"]);

    view! {
        <div class="flex flex-col items-center gap-2 bg-[#111111] border border-[#ffffff10] rounded-lg p-4">
            <div class="relative w-full max-w-[200px]">
                <svg viewBox=geometry.view_box(stroke_width) class="w-full h-auto">
                    // Background arc
                    <path
                        d=track_path
                        fill="none"
                        stroke="#2a2a2a"
                        stroke-width=stroke_width.to_string()
                        stroke-linecap="round"
                    />
                    // Value arc
                    <path
                        d=value_path
                        fill="none"
                        stroke=move || view_model.get().color
                        stroke-width=stroke_width.to_string()
                        stroke-linecap="round"
                        stroke-dasharray=move || view_model.get().arc.dash_array.to_string()
                        stroke-dashoffset=move || view_model.get().arc.dash_offset.to_string()
                        style=arc_transition
                    />
                </svg>
                // Value display at the base of the arc
                <div class="absolute inset-x-0 bottom-0 flex items-baseline justify-center gap-1">
                    <span
                        class="text-2xl font-mono font-bold"
                        style=move || format!("color: {}; {}", view_model.get().color, label_transition)
                    >
                        {move || view_model.get().formatted_value}
                    </span>
                    {(!kind.definition().unit.is_empty()).then(|| view! {
                        <span class="text-xs text-[#666666]">{kind.definition().unit}</span>
                    })}
                </div>
            </div>

            // Label
            <div class="text-center">
                <div class="text-sm font-semibold text-white">{kind.acronym()}</div>
                <div class="text-[10px] text-[#888888]">{move || i18n.t(kind.name_key())}</div>
            </div>

            <RatingBadge rating=rating/>

            <p class="text-[10px] text-[#666666] text-center">{move || i18n.t(kind.description_key())}</p>
        </div>
    }
}
