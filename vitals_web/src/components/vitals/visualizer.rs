use leptos::prelude::*;
use vitals_common::{format_value, MetricKind, MetricReadings};
use super::{MetricGauge, RatingBadge, ScenarioPresets};
use crate::i18n::use_i18n;

/// Three gauges driven by presets and manual controls.
#[component]
pub fn WebVitalsVisualizer() -> impl IntoView {
    let i18n = use_i18n();
    let readings = RwSignal::new(MetricReadings::default());
    let overall = Signal::derive(move || readings.with(|r| r.overall()));

    view! {
        <div class="bg-[#0d0d0d] border border-[#ffffff10] rounded-lg p-4 space-y-4">
            <div class="flex items-center justify-between">
                <h4 class="text-xs font-semibold text-white">{move || i18n.t("vitals.title")}</h4>
                <div class="flex items-center gap-2">
                    <span class="text-[10px] text-[#888888]">{move || i18n.t("vitals.overall")}</span>
                    <RatingBadge rating=overall/>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-3">
                {MetricKind::all().into_iter().map(|kind| {
                    view! {
                        <MetricGauge
                            kind=kind
                            value=Signal::derive(move || readings.with(|r| r.get(kind)))
                        />
                    }
                }).collect_view()}
            </div>

            <ScenarioPresets readings=readings/>
            <ManualControls readings=readings/>
        </div>
    }
}

/// Per-metric -/+ steppers and a reset to the default readings.
#[component]
fn ManualControls(readings: RwSignal<MetricReadings>) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="space-y-1.5">
            <div class="flex items-center justify-between">
                <div class="text-[9px] text-[#666666] uppercase tracking-wide">{move || i18n.t("vitals.manual")}</div>
                <button
                    class="text-[9px] px-2 py-0.5 bg-[#ff444420] text-[#ff4444] rounded hover:bg-[#ff444430]"
                    on:click=move |_| readings.set(MetricReadings::default())
                >
                    {move || i18n.t("vitals.reset")}
                </button>
            </div>
            {MetricKind::all().into_iter().map(|kind| {
                let definition = kind.definition();
                view! {
                    <div class="flex items-center gap-2">
                        <span class="w-10 text-[10px] text-[#aaaaaa] font-mono">{kind.acronym()}</span>
                        <button
                            class="w-6 h-6 rounded bg-[#1a1a1a] border border-[#ffffff10] text-white text-xs hover:border-[#00d9ff60]"
                            title=move || i18n.t("vitals.decrease")
                            on:click=move |_| readings.update(|r| r.step(kind, -1))
                        >
                            "−"
                        </button>
                        <span class="w-16 text-center text-[11px] text-white font-mono">
                            {move || format!(
                                "{} {}",
                                format_value(readings.with(|r| r.get(kind)), definition.display_precision),
                                definition.unit,
                            )}
                        </span>
                        <button
                            class="w-6 h-6 rounded bg-[#1a1a1a] border border-[#ffffff10] text-white text-xs hover:border-[#00d9ff60]"
                            title=move || i18n.t("vitals.increase")
                            on:click=move |_| readings.update(|r| r.step(kind, 1))
                        >
                            "+"
                        </button>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
