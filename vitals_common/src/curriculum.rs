//! Curriculum data: weeks, lessons and the section templates they are
//! authored from.
//!
//! Lessons hold translation keys rather than text so the same data renders
//! in every locale. A new lesson is a new [`Lesson`] entry built from the
//! fixed [`SectionKind`]s; no new components are needed.

use crate::VitalsError;

/// The fixed set of section templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Intro,
    Concept,
    CodeSample,
    Demo,
    Exercise,
    Recap,
}

impl SectionKind {
    pub fn all() -> [SectionKind; 6] {
        [
            SectionKind::Intro,
            SectionKind::Concept,
            SectionKind::CodeSample,
            SectionKind::Demo,
            SectionKind::Exercise,
            SectionKind::Recap,
        ]
    }

    pub fn heading_key(&self) -> &'static str {
        match self {
            SectionKind::Intro => "section.intro",
            SectionKind::Concept => "section.concept",
            SectionKind::CodeSample => "section.code_sample",
            SectionKind::Demo => "section.demo",
            SectionKind::Exercise => "section.exercise",
            SectionKind::Recap => "section.recap",
        }
    }
}

/// Interactive widget embedded by a demo section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoKind {
    LanguageSwitch,
    WebVitals,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub body_key: &'static str,
    /// Source shown verbatim by code sample sections.
    pub code: Option<&'static str>,
    pub demo: Option<DemoKind>,
}

impl Section {
    pub const fn text(kind: SectionKind, body_key: &'static str) -> Self {
        Self { kind, body_key, code: None, demo: None }
    }

    pub const fn code(body_key: &'static str, code: &'static str) -> Self {
        Self { kind: SectionKind::CodeSample, body_key, code: Some(code), demo: None }
    }

    pub const fn demo(body_key: &'static str, demo: DemoKind) -> Self {
        Self { kind: SectionKind::Demo, body_key, code: None, demo: Some(demo) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lesson {
    pub slug: &'static str,
    pub title_key: &'static str,
    pub summary_key: &'static str,
    pub sections: &'static [Section],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Week {
    pub number: u8,
    pub title_key: &'static str,
    pub lessons: &'static [Lesson],
}

const SWITCH_SAMPLE: &str = r#"let i18n = use_i18n();

view! {
    <button on:click=move |_| i18n.toggle()>
        {move || i18n.t("switcher.label")}
    </button>
}"#;

const BUNDLE_SAMPLE: &str = r#"{
  "nav": {
    "home": "Home",
    "lessons": "Lessons"
  },
  "greeting": "Hello, {{name}}!"
}"#;

const CLASSIFY_SAMPLE: &str = r#"pub fn classify(definition: &MetricDefinition, value: f64) -> Rating {
    if value <= definition.good_threshold {
        Rating::Good
    } else if value <= definition.poor_threshold {
        Rating::NeedsImprovement
    } else {
        Rating::Poor
    }
}"#;

const TEMPLATE_SAMPLE: &str = r#"Lesson {
    slug: "my-lesson",
    title_key: "lesson.my_lesson.title",
    summary_key: "lesson.my_lesson.summary",
    sections: &[
        Section::text(SectionKind::Intro, "lesson.my_lesson.intro"),
        Section::text(SectionKind::Recap, "lesson.my_lesson.recap"),
    ],
}"#;

pub static CURRICULUM: &[Week] = &[
    Week {
        number: 1,
        title_key: "week.1.title",
        lessons: &[
            Lesson {
                slug: "language-switching",
                title_key: "lesson.language_switching.title",
                summary_key: "lesson.language_switching.summary",
                sections: &[
                    Section::text(SectionKind::Intro, "lesson.language_switching.intro"),
                    Section::text(SectionKind::Concept, "lesson.language_switching.concept"),
                    Section::code("lesson.language_switching.code", SWITCH_SAMPLE),
                    Section::demo("lesson.language_switching.demo", DemoKind::LanguageSwitch),
                    Section::text(SectionKind::Exercise, "lesson.language_switching.exercise"),
                    Section::text(SectionKind::Recap, "lesson.language_switching.recap"),
                ],
            },
            Lesson {
                slug: "translation-resources",
                title_key: "lesson.translation_resources.title",
                summary_key: "lesson.translation_resources.summary",
                sections: &[
                    Section::text(SectionKind::Intro, "lesson.translation_resources.intro"),
                    Section::text(SectionKind::Concept, "lesson.translation_resources.concept"),
                    Section::code("lesson.translation_resources.code", BUNDLE_SAMPLE),
                    Section::text(SectionKind::Exercise, "lesson.translation_resources.exercise"),
                    Section::text(SectionKind::Recap, "lesson.translation_resources.recap"),
                ],
            },
        ],
    },
    Week {
        number: 2,
        title_key: "week.2.title",
        lessons: &[
            Lesson {
                slug: "core-web-vitals",
                title_key: "lesson.core_web_vitals.title",
                summary_key: "lesson.core_web_vitals.summary",
                sections: &[
                    Section::text(SectionKind::Intro, "lesson.core_web_vitals.intro"),
                    Section::text(SectionKind::Concept, "lesson.core_web_vitals.concept"),
                    Section::demo("lesson.core_web_vitals.demo", DemoKind::WebVitals),
                    Section::text(SectionKind::Exercise, "lesson.core_web_vitals.exercise"),
                    Section::text(SectionKind::Recap, "lesson.core_web_vitals.recap"),
                ],
            },
            Lesson {
                slug: "rating-thresholds",
                title_key: "lesson.rating_thresholds.title",
                summary_key: "lesson.rating_thresholds.summary",
                sections: &[
                    Section::text(SectionKind::Intro, "lesson.rating_thresholds.intro"),
                    Section::text(SectionKind::Concept, "lesson.rating_thresholds.concept"),
                    Section::code("lesson.rating_thresholds.code", CLASSIFY_SAMPLE),
                    Section::text(SectionKind::Exercise, "lesson.rating_thresholds.exercise"),
                    Section::text(SectionKind::Recap, "lesson.rating_thresholds.recap"),
                ],
            },
        ],
    },
    Week {
        number: 3,
        title_key: "week.3.title",
        lessons: &[Lesson {
            slug: "section-templates",
            title_key: "lesson.section_templates.title",
            summary_key: "lesson.section_templates.summary",
            sections: &[
                Section::text(SectionKind::Intro, "lesson.section_templates.intro"),
                Section::text(SectionKind::Concept, "lesson.section_templates.concept"),
                Section::code("lesson.section_templates.code", TEMPLATE_SAMPLE),
                Section::text(SectionKind::Exercise, "lesson.section_templates.exercise"),
                Section::text(SectionKind::Recap, "lesson.section_templates.recap"),
            ],
        }],
    },
];

/// Route path of a lesson page.
pub fn lesson_path(week: u8, slug: &str) -> String {
    format!("/week/{}/{}", week, slug)
}

/// Every lesson in curriculum order, paired with its week number.
pub fn all_lessons() -> impl Iterator<Item = (u8, &'static Lesson)> {
    CURRICULUM
        .iter()
        .flat_map(|week| week.lessons.iter().map(move |lesson| (week.number, lesson)))
}

pub fn find_lesson(week: u8, slug: &str) -> Result<(&'static Week, &'static Lesson), VitalsError> {
    CURRICULUM
        .iter()
        .find(|w| w.number == week)
        .and_then(|w| w.lessons.iter().find(|l| l.slug == slug).map(|l| (w, l)))
        .ok_or_else(|| VitalsError::UnknownLesson { week, slug: slug.to_string() })
}

/// Lessons before and after the given one, across week boundaries.
pub fn neighbours(
    week: u8,
    slug: &str,
) -> (Option<(u8, &'static Lesson)>, Option<(u8, &'static Lesson)>) {
    let ordered: Vec<_> = all_lessons().collect();
    match ordered.iter().position(|(w, l)| *w == week && l.slug == slug) {
        Some(i) => (
            i.checked_sub(1).map(|p| ordered[p]),
            ordered.get(i + 1).copied(),
        ),
        None => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_lesson() {
        let (week, lesson) = find_lesson(2, "core-web-vitals").unwrap();
        assert_eq!(week.number, 2);
        assert_eq!(lesson.title_key, "lesson.core_web_vitals.title");
    }

    #[test]
    fn test_find_lesson_wrong_week() {
        let err = find_lesson(1, "core-web-vitals").unwrap_err();
        assert_eq!(err, VitalsError::UnknownLesson { week: 1, slug: "core-web-vitals".to_string() });
    }

    #[test]
    fn test_neighbours_cross_weeks() {
        let (prev, next) = neighbours(1, "translation-resources");
        assert_eq!(prev.map(|(w, l)| (w, l.slug)), Some((1, "language-switching")));
        assert_eq!(next.map(|(w, l)| (w, l.slug)), Some((2, "core-web-vitals")));

        let (prev, _) = neighbours(1, "language-switching");
        assert!(prev.is_none());
        let (_, next) = neighbours(3, "section-templates");
        assert!(next.is_none());
    }

    #[test]
    fn test_lesson_path() {
        assert_eq!(lesson_path(3, "section-templates"), "/week/3/section-templates");
    }

    #[test]
    fn test_sections_are_consistent() {
        for (_, lesson) in all_lessons() {
            for section in lesson.sections {
                assert_eq!(section.code.is_some(), section.kind == SectionKind::CodeSample, "{}", section.body_key);
                assert_eq!(section.demo.is_some(), section.kind == SectionKind::Demo, "{}", section.body_key);
            }
        }
    }
}
