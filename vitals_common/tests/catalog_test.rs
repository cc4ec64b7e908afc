/// Checks on the embedded translation bundles.
use vitals_common::curriculum::{all_lessons, SectionKind, CURRICULUM};
use vitals_common::{Catalog, Locale, MetricKind, Rating, PRESETS};

fn catalog() -> Catalog {
    Catalog::embedded().expect("embedded bundles parse")
}

fn assert_translated(catalog: &Catalog, key: &str) {
    for locale in Locale::all() {
        assert!(catalog.lookup(locale, key).is_some(), "missing '{}' in {}", key, locale);
    }
}

#[test]
fn test_bundles_have_identical_keys() {
    let catalog = catalog();
    assert!(catalog.len(Locale::En) > 0);
    assert_eq!(catalog.len(Locale::En), catalog.len(Locale::Es));
    assert!(catalog.missing_keys(Locale::Es).is_empty(), "{:?}", catalog.missing_keys(Locale::Es));
}

#[test]
fn test_metric_rating_and_preset_keys_exist() {
    let catalog = catalog();
    for kind in MetricKind::all() {
        assert_translated(&catalog, kind.name_key());
        assert_translated(&catalog, kind.description_key());
    }
    for rating in [Rating::Good, Rating::NeedsImprovement, Rating::Poor] {
        assert_translated(&catalog, rating.translation_key());
    }
    for preset in PRESETS {
        assert_translated(&catalog, &preset.label_key());
        assert_eq!(catalog.translate(Locale::En, &preset.label_key()), preset.label);
    }
}

#[test]
fn test_curriculum_keys_exist() {
    let catalog = catalog();
    for kind in SectionKind::all() {
        assert_translated(&catalog, kind.heading_key());
    }
    for week in CURRICULUM {
        assert_translated(&catalog, week.title_key);
    }
    for (_, lesson) in all_lessons() {
        assert_translated(&catalog, lesson.title_key);
        assert_translated(&catalog, lesson.summary_key);
        for section in lesson.sections {
            assert_translated(&catalog, section.body_key);
        }
    }
}

#[test]
fn test_slugs_are_unique() {
    let slugs: Vec<_> = all_lessons().map(|(_, l)| l.slug).collect();
    let mut deduped = slugs.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(slugs.len(), deduped.len());
}

#[test]
fn test_greeting_interpolates_in_both_locales() {
    let catalog = catalog();
    assert_eq!(catalog.translate_with(Locale::En, "demo.i18n.greeting", &[("name", "Ada")]), "Hello, Ada!");
    assert_eq!(catalog.translate_with(Locale::Es, "demo.i18n.greeting", &[("name", "Ada")]), "¡Hola, Ada!");
    assert_eq!(catalog.translate_with(Locale::Es, "nav.week", &[("number", "2")]), "Semana 2");
}
