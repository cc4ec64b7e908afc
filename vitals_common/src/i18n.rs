//! Translation catalog.
//!
//! Bundles are JSON objects, optionally nested; nested keys are joined with
//! dots (`{"rating": {"good": "Good"}}` becomes `rating.good`). Lookups fall
//! back to English and then to the key itself, so a missing string shows up
//! on screen instead of breaking the page.

use std::collections::{BTreeSet, HashMap};
use serde_json::Value;
use crate::{Locale, VitalsError};

const EN_JSON: &str = include_str!("../locales/en.json");
const ES_JSON: &str = include_str!("../locales/es.json");

/// Locale used for fallback lookups.
const FALLBACK: Locale = Locale::En;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    bundles: HashMap<Locale, HashMap<String, String>>,
}

impl Catalog {
    /// Catalog built from the bundles compiled into the crate.
    pub fn embedded() -> Result<Self, VitalsError> {
        Self::from_json(&[(Locale::En, EN_JSON), (Locale::Es, ES_JSON)])
    }

    pub fn from_json(sources: &[(Locale, &str)]) -> Result<Self, VitalsError> {
        let mut bundles = HashMap::new();
        for (locale, source) in sources {
            let value: Value = serde_json::from_str(source).map_err(|e| VitalsError::Catalog {
                locale: locale.code().to_string(),
                message: e.to_string(),
            })?;
            let mut entries = HashMap::new();
            flatten(*locale, "", &value, &mut entries)?;
            bundles.insert(*locale, entries);
        }
        Ok(Self { bundles })
    }

    /// Raw lookup without fallback.
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.bundles.get(&locale)?.get(key).map(String::as_str)
    }

    pub fn translate(&self, locale: Locale, key: &str) -> String {
        if let Some(text) = self.lookup(locale, key) {
            return text.to_string();
        }
        log::debug!("Missing translation '{}' for {}", key, locale);
        self.lookup(FALLBACK, key).unwrap_or(key).to_string()
    }

    /// Translate and substitute `{{name}}` placeholders.
    pub fn translate_with(&self, locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.translate(locale, key);
        for (name, value) in args {
            text = text.replace(&format!("{{{{{}}}}}", name), value);
        }
        text
    }

    /// Keys present in the fallback bundle but absent for `locale`, sorted.
    pub fn missing_keys(&self, locale: Locale) -> Vec<String> {
        let Some(reference) = self.bundles.get(&FALLBACK) else {
            return Vec::new();
        };
        let target = self.bundles.get(&locale);
        reference
            .keys()
            .filter(|k| target.map_or(true, |t| !t.contains_key(*k)))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self, locale: Locale) -> usize {
        self.bundles.get(&locale).map_or(0, HashMap::len)
    }
}

fn flatten(
    locale: Locale,
    prefix: &str,
    value: &Value,
    out: &mut HashMap<String, String>,
) -> Result<(), VitalsError> {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() { k.clone() } else { format!("{}.{}", prefix, k) };
                flatten(locale, &key, v, out)?;
            }
            Ok(())
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
            Ok(())
        }
        other => Err(VitalsError::Catalog {
            locale: locale.code().to_string(),
            message: format!("expected a string at '{}', found {}", prefix, other),
        }),
    }
}
