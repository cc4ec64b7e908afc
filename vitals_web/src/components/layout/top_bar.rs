//! Top bar / header component.

use leptos::prelude::*;
use leptos_router::components::A;
use crate::components::LanguageSwitcher;
use crate::i18n::use_i18n;
use super::LayoutContext;

/// Top bar with navbar toggle, site title and language switcher.
#[component]
pub fn TopBar() -> impl IntoView {
    let i18n = use_i18n();
    let layout_ctx = use_context::<LayoutContext>().expect("LayoutContext not found");

    view! {
        <header class="h-9 bg-[#111111] border-b border-[#ffffff10] flex items-center px-3 shrink-0">
            <button
                class="p-1 mr-2 hover:bg-[#ffffff08] rounded transition-colors"
                on:click=move |_| layout_ctx.nav_collapsed.update(|v| *v = !*v)
            >
                <svg class="w-3.5 h-3.5 text-[#888888]" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                </svg>
            </button>

            // Logo and title
            <A href="/" attr:class="flex items-center space-x-2 no-underline">
                <div class="w-6 h-6 bg-[#00d9ff] rounded flex items-center justify-center">
                    <svg class="w-3.5 h-3.5 text-black" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 6.253v13m0-13C10.832 5.477 9.246 5 7.5 5S4.168 5.477 3 6.253v13C4.168 18.477 5.754 18 7.5 18s3.332.477 4.5 1.253m0-13C13.168 5.477 14.754 5 16.5 5c1.747 0 3.332.477 4.5 1.253v13C19.832 18.477 18.247 18 16.5 18c-1.746 0-3.332.477-4.5 1.253"/>
                    </svg>
                </div>
                <h1 class="text-xs font-semibold text-white">{move || i18n.t("app.title")}</h1>
            </A>

            <div class="flex-1"></div>

            <LanguageSwitcher/>
        </header>
    }
}
