//! Scenario preset buttons.

use leptos::prelude::*;
use vitals_common::{MetricReadings, ScenarioPreset, PRESETS};
use crate::i18n::use_i18n;

/// True when every reading already equals the preset's value.
fn is_active(readings: &MetricReadings, preset: &ScenarioPreset) -> bool {
    preset.readings.iter().all(|(kind, value)| readings.get(*kind) == *value)
}

/// One button per preset; a click overwrites all readings in one update.
#[component]
pub fn ScenarioPresets(readings: RwSignal<MetricReadings>) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="space-y-1.5">
            <div class="text-[9px] text-[#666666] uppercase tracking-wide">{move || i18n.t("preset.heading")}</div>
            <div class="flex flex-wrap gap-1.5">
                {PRESETS.iter().map(|preset| {
                    let active = move || readings.with(|r| is_active(r, preset));
                    view! {
                        <button
                            class=move || if active() {
                                "text-[10px] px-3 py-1 rounded border bg-[#00d9ff20] border-[#00d9ff] text-[#00d9ff]"
                            } else {
                                "text-[10px] px-3 py-1 rounded border bg-[#1a1a1a] border-[#ffffff10] text-[#aaaaaa] hover:border-[#00d9ff60] hover:text-white transition-colors"
                            }
                            on:click=move |_| {
                                readings.update(|r| r.apply_preset(preset));
                                log::info!("Applied scenario '{}'", preset.id);
                            }
                        >
                            {move || i18n.t(&preset.label_key())}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
