//! Live translation demo embedded in the language switching lesson.

use leptos::prelude::*;
use crate::i18n::use_i18n;

#[component]
pub fn I18nDemo() -> impl IntoView {
    let i18n = use_i18n();
    let (name, set_name) = signal(String::new());

    let greeting = move || {
        let entered = name.get();
        let shown = if entered.trim().is_empty() {
            i18n.t("demo.i18n.name_placeholder")
        } else {
            entered.trim().to_string()
        };
        i18n.t_with("demo.i18n.greeting", &[("name", &shown)])
    };

    view! {
        <div class="bg-[#111111] border border-[#ffffff10] rounded-lg p-4 space-y-3">
            <div class="flex items-center justify-between">
                <h4 class="text-xs font-semibold text-white">{move || i18n.t("demo.i18n.heading")}</h4>
                <button
                    class="text-[10px] px-2 py-1 bg-[#00d9ff20] text-[#00d9ff] rounded hover:bg-[#00d9ff30]"
                    on:click=move |_| i18n.toggle()
                >
                    {move || i18n.t_with(
                        "switcher.toggle",
                        &[("language", i18n.locale().toggle().native_name())],
                    )}
                </button>
            </div>

            <div>
                <label class="block text-[#888888] text-[10px] mb-1">{move || i18n.t("demo.i18n.name_label")}</label>
                <input
                    type="text"
                    class="w-full bg-[#1a1a1a] border border-[#ffffff08] rounded px-3 py-1.5 text-white text-sm focus:border-[#00d9ff] focus:outline-none"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    placeholder=move || i18n.t("demo.i18n.name_placeholder")
                />
            </div>

            <p class="text-lg text-[#00d9ff] font-semibold">{greeting}</p>
            <p class="text-[10px] text-[#666666]">
                {move || i18n.t_with("demo.i18n.current", &[("language", i18n.locale().native_name())])}
            </p>
        </div>
    }
}
