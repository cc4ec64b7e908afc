use leptos::prelude::*;
use leptos_router::components::A;
use vitals_common::curriculum::{lesson_path, CURRICULUM};
use crate::i18n::use_i18n;

/// Course overview: one card per week, one row per lesson.
#[component]
pub fn HomePage() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="max-w-3xl mx-auto p-6 space-y-6">
            <div class="space-y-1">
                <h2 class="text-lg font-semibold text-white">{move || i18n.t("home.heading")}</h2>
                <p class="text-[11px] text-[#666666]">{move || i18n.t("app.tagline")}</p>
                <p class="text-sm text-[#aaaaaa]">{move || i18n.t("home.intro")}</p>
            </div>

            {CURRICULUM.iter().map(|week| {
                let number = week.number.to_string();
                view! {
                    <section class="bg-[#111111] border border-[#ffffff10] rounded-lg p-4 space-y-3">
                        <div>
                            <div class="text-[9px] text-[#00d9ff] uppercase tracking-wide">
                                {move || i18n.t_with("nav.week", &[("number", &number)])}
                            </div>
                            <h3 class="text-sm font-semibold text-white">{move || i18n.t(week.title_key)}</h3>
                        </div>
                        {week.lessons.iter().map(|lesson| view! {
                            <div class="flex items-start justify-between gap-4 border-t border-[#ffffff08] pt-2">
                                <div>
                                    <div class="text-[12px] text-white">{move || i18n.t(lesson.title_key)}</div>
                                    <p class="text-[10px] text-[#888888]">{move || i18n.t(lesson.summary_key)}</p>
                                </div>
                                <A
                                    href=lesson_path(week.number, lesson.slug)
                                    attr:class="shrink-0 text-[10px] px-2 py-1 bg-[#00d9ff20] text-[#00d9ff] rounded hover:bg-[#00d9ff30] no-underline"
                                >
                                    {move || i18n.t("home.start")}
                                </A>
                            </div>
                        }).collect_view()}
                    </section>
                }
            }).collect_view()}
        </div>
    }
}
