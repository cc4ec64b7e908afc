//! Lesson page for `/week/:week/:lesson`.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use vitals_common::curriculum::{find_lesson, lesson_path, neighbours, Lesson};
use super::SectionTemplate;
use crate::i18n::use_i18n;

#[component]
pub fn LessonPage() -> impl IntoView {
    let params = use_params_map();

    let lookup = Memo::new(move |_| {
        let params = params.read();
        let week = params
            .get("week")
            .and_then(|w| w.parse::<u8>().ok())
            .unwrap_or_default();
        let slug = params.get("lesson").map(|s| s.to_string()).unwrap_or_default();
        find_lesson(week, &slug).map(|(week, lesson)| (week.number, lesson))
    });

    move || match lookup.get() {
        Ok((week, lesson)) => view! { <LessonView week=week lesson=lesson/> }.into_any(),
        Err(e) => {
            log::warn!("{}", e);
            view! { <LessonNotFound/> }.into_any()
        }
    }
}

#[component]
fn LessonView(week: u8, lesson: &'static Lesson) -> impl IntoView {
    let i18n = use_i18n();
    let week_label = week.to_string();
    let (previous, next) = neighbours(week, lesson.slug);

    view! {
        <article class="max-w-3xl mx-auto p-6 space-y-4">
            <header class="space-y-1">
                <div class="text-[9px] text-[#00d9ff] uppercase tracking-wide">
                    {move || i18n.t_with("nav.week", &[("number", &week_label)])}
                </div>
                <h2 class="text-lg font-semibold text-white">{move || i18n.t(lesson.title_key)}</h2>
                <p class="text-sm text-[#888888]">{move || i18n.t(lesson.summary_key)}</p>
            </header>

            {lesson.sections.iter().map(|section| view! {
                <SectionTemplate section=*section/>
            }).collect_view()}

            <nav class="flex justify-between pt-4 border-t border-[#ffffff08]">
                {previous.map(|(w, l)| view! {
                    <A href=lesson_path(w, l.slug) attr:class="text-[10px] text-[#888888] hover:text-white no-underline">
                        {move || format!("← {}", i18n.t("lesson.previous"))}
                    </A>
                })}
                <div class="flex-1"></div>
                {next.map(|(w, l)| view! {
                    <A href=lesson_path(w, l.slug) attr:class="text-[10px] text-[#00d9ff] hover:text-white no-underline">
                        {move || format!("{} →", i18n.t("lesson.next"))}
                    </A>
                })}
            </nav>
        </article>
    }
}

#[component]
fn LessonNotFound() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="max-w-3xl mx-auto p-6 space-y-2">
            <p class="text-sm text-[#ff4444]">{move || i18n.t("lesson.not_found")}</p>
            <A href="/" attr:class="text-[11px] text-[#00d9ff] no-underline">{move || i18n.t("lesson.back_home")}</A>
        </div>
    }
}
