//! Curriculum navigation sidebar.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use vitals_common::curriculum::{lesson_path, CURRICULUM};
use crate::i18n::use_i18n;

/// Weeks and their lessons, with the current lesson highlighted.
#[component]
pub fn LeftNavbar() -> impl IntoView {
    let i18n = use_i18n();
    let location = use_location();

    view! {
        <nav class="w-56 bg-[#0d0d0d] border-r border-[#ffffff08] flex flex-col overflow-y-auto shrink-0 p-2 space-y-3">
            <A
                href="/"
                attr:class=move || if location.pathname.get() == "/" {
                    "text-[11px] text-[#00d9ff] font-medium no-underline"
                } else {
                    "text-[11px] text-[#888888] hover:text-white no-underline"
                }
            >
                {move || i18n.t("nav.home")}
            </A>

            {CURRICULUM.iter().map(|week| {
                let number = week.number.to_string();
                view! {
                    <div class="space-y-1">
                        <div class="text-[9px] text-[#666666] uppercase tracking-wide">
                            {move || i18n.t_with("nav.week", &[("number", &number)])}
                        </div>
                        <div class="text-[10px] text-[#aaaaaa] font-medium">{move || i18n.t(week.title_key)}</div>
                        {week.lessons.iter().map(|lesson| {
                            let path = lesson_path(week.number, lesson.slug);
                            let active_path = path.clone();
                            view! {
                                <A
                                    href=path
                                    attr:class=move || if location.pathname.get() == active_path {
                                        "block pl-2 border-l border-[#00d9ff] text-[10px] text-[#00d9ff] no-underline"
                                    } else {
                                        "block pl-2 border-l border-[#ffffff10] text-[10px] text-[#777777] hover:text-white no-underline"
                                    }
                                >
                                    {move || i18n.t(lesson.title_key)}
                                </A>
                            }
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
