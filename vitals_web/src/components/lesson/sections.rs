//! Section templates.
//!
//! Every lesson section is rendered by exactly one of these, chosen by its
//! `SectionKind`. They share `SectionShell` for the heading and frame and
//! differ only in how the body is presented.

use leptos::prelude::*;
use vitals_common::curriculum::{DemoKind, Section, SectionKind};
use crate::components::{I18nDemo, WebVitalsVisualizer};
use crate::i18n::use_i18n;

/// Accent color of each section's heading bar.
fn section_accent(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Intro => "#00d9ff",
        SectionKind::Concept => "#a78bfa",
        SectionKind::CodeSample => "#888888",
        SectionKind::Demo => "#0cce6b",
        SectionKind::Exercise => "#ffa400",
        SectionKind::Recap => "#00d9ff",
    }
}

/// Render a section with the template for its kind.
#[component]
pub fn SectionTemplate(section: Section) -> impl IntoView {
    match section.kind {
        SectionKind::Intro => view! { <IntroSection body_key=section.body_key/> }.into_any(),
        SectionKind::Concept => view! { <ConceptSection body_key=section.body_key/> }.into_any(),
        SectionKind::CodeSample => view! {
            <CodeSampleSection body_key=section.body_key code=section.code.unwrap_or_default()/>
        }.into_any(),
        SectionKind::Demo => match section.demo {
            Some(demo) => view! { <DemoSection body_key=section.body_key demo=demo/> }.into_any(),
            None => {
                log::warn!("Demo section '{}' has no demo", section.body_key);
                view! { <ConceptSection body_key=section.body_key/> }.into_any()
            }
        },
        SectionKind::Exercise => view! { <ExerciseSection body_key=section.body_key/> }.into_any(),
        SectionKind::Recap => view! { <RecapSection body_key=section.body_key/> }.into_any(),
    }
}

#[component]
fn SectionShell(kind: SectionKind, children: Children) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section class="space-y-2">
            <h3
                class="text-[10px] uppercase tracking-wide font-semibold pl-2 border-l-2"
                style=format!("color: {0}; border-color: {0};", section_accent(kind))
            >
                {move || i18n.t(kind.heading_key())}
            </h3>
            {children()}
        </section>
    }
}

#[component]
fn IntroSection(body_key: &'static str) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <SectionShell kind=SectionKind::Intro>
            <p class="text-base text-white leading-relaxed">{move || i18n.t(body_key)}</p>
        </SectionShell>
    }
}

#[component]
fn ConceptSection(body_key: &'static str) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <SectionShell kind=SectionKind::Concept>
            <div class="bg-[#111111] border border-[#a78bfa30] rounded-lg p-3">
                <p class="text-sm text-[#cccccc] leading-relaxed">{move || i18n.t(body_key)}</p>
            </div>
        </SectionShell>
    }
}

#[component]
fn CodeSampleSection(body_key: &'static str, code: &'static str) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <SectionShell kind=SectionKind::CodeSample>
            <p class="text-sm text-[#aaaaaa]">{move || i18n.t(body_key)}</p>
            <pre class="bg-[#111111] border border-[#ffffff10] rounded-lg p-3 overflow-x-auto">
                <code class="text-[11px] font-mono text-[#e5e5e5]">{code}</code>
            </pre>
        </SectionShell>
    }
}

#[component]
fn DemoSection(body_key: &'static str, demo: DemoKind) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <SectionShell kind=SectionKind::Demo>
            <p class="text-sm text-[#aaaaaa]">{move || i18n.t(body_key)}</p>
            {match demo {
                DemoKind::LanguageSwitch => view! { <I18nDemo/> }.into_any(),
                DemoKind::WebVitals => view! { <WebVitalsVisualizer/> }.into_any(),
            }}
        </SectionShell>
    }
}

#[component]
fn ExerciseSection(body_key: &'static str) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <SectionShell kind=SectionKind::Exercise>
            <div class="bg-[#ffa40010] border border-[#ffa40040] rounded-lg p-3">
                <p class="text-sm text-white">{move || i18n.t(body_key)}</p>
            </div>
        </SectionShell>
    }
}

#[component]
fn RecapSection(body_key: &'static str) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <SectionShell kind=SectionKind::Recap>
            <p class="text-sm text-[#888888] italic">{move || i18n.t(body_key)}</p>
        </SectionShell>
    }
}
