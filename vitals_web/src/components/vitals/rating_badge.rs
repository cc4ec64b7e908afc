use leptos::prelude::*;
use vitals_common::settings::GaugeSettings;
use vitals_common::Rating;
use crate::i18n::use_i18n;

/// CSS glow matching the rating color.
fn rating_glow(rating: Rating) -> &'static str {
    match rating {
        Rating::Good => "0 0 10px rgba(12, 206, 107, 0.3)",
        Rating::NeedsImprovement => "0 0 10px rgba(255, 164, 0, 0.4)",
        Rating::Poor => "0 0 12px rgba(255, 78, 66, 0.5)",
    }
}

/// Colored pill showing a translated rating.
#[component]
pub fn RatingBadge(#[prop(into)] rating: Signal<Rating>) -> impl IntoView {
    let i18n = use_i18n();
    let transition = GaugeSettings::default()
        .transition_css(&["color", "border-color", "background-color", "box-shadow"]);

    view! {
        <span
            class="px-2 py-0.5 rounded-full text-[10px] font-semibold uppercase tracking-wide border"
            style=move || {
                let r = rating.get();
                format!(
                    "color: {0}; border-color: {0}80; background-color: {0}1a; box-shadow: {1}; {2}",
                    r.color(),
                    rating_glow(r),
                    transition,
                )
            }
        >
            {move || i18n.t(rating.get().translation_key())}
        </span>
    }
}
