//! Locale dropdown shown in the top bar and in the i18n demo.

use leptos::prelude::*;
use vitals_common::Locale;
use crate::i18n::use_i18n;

#[component]
pub fn LanguageSwitcher(
    /// Show the "Language" label before the dropdown
    #[prop(default = true)] show_label: bool,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <label class="flex items-center gap-1.5">
            {show_label.then(|| view! {
                <span class="text-[10px] text-[#888888]">{move || i18n.t("switcher.label")}</span>
            })}
            <select
                class="bg-[#1a1a1a] border border-[#ffffff08] rounded px-2 py-0.5 text-[11px] text-white focus:border-[#00d9ff] focus:outline-none"
                on:change=move |ev| {
                    // Rejected codes are logged and leave the locale as it was
                    let _ = i18n.set_locale(&event_target_value(&ev));
                }
            >
                {Locale::all().into_iter().map(|locale| {
                    view! {
                        <option
                            value=locale.code()
                            selected=move || i18n.locale() == locale
                        >
                            {locale.native_name()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}
