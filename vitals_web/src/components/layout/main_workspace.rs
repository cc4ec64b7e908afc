//! Routed main content area.

use leptos::prelude::*;
use leptos_router::components::{Route, Routes, A};
use leptos_router::path;
use crate::components::lesson::{HomePage, LessonPage};
use crate::i18n::use_i18n;

/// Main workspace with routed content.
#[component]
pub fn MainWorkspace() -> impl IntoView {
    view! {
        <main class="flex-1 overflow-y-auto bg-[#080808]">
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/week/:week/:lesson") view=LessonPage />
            </Routes>
        </main>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="max-w-3xl mx-auto p-6 space-y-2">
            <h2 class="text-lg font-semibold text-white">{move || i18n.t("not_found.title")}</h2>
            <p class="text-sm text-[#888888]">{move || i18n.t("not_found.body")}</p>
            <A href="/" attr:class="text-[11px] text-[#00d9ff] no-underline">{move || i18n.t("lesson.back_home")}</A>
        </div>
    }
}
