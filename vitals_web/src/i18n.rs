//! App-wide locale slot and translation accessors.
//!
//! The locale lives in one `RwSignal` provided at the root. Components read
//! it through [`I18nContext::t`], which tracks the signal, so switching the
//! locale re-renders every translated string. The choice is persisted to
//! `localStorage` and restored on the next visit.

use leptos::prelude::*;
use leptos_use::storage::use_local_storage;
use leptos_use::use_locales;
use codee::string::FromToStringCodec;
use vitals_common::settings::LOCALE_STORAGE_KEY;
use vitals_common::{detect_locale, Catalog, Locale, VitalsError};

#[derive(Clone, Copy)]
pub struct I18nContext {
    locale: RwSignal<Locale>,
    catalog: StoredValue<Catalog>,
}

impl I18nContext {
    /// Current locale (tracked).
    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    pub fn set(&self, locale: Locale) {
        if self.locale.get_untracked() != locale {
            log::info!("Switching locale to {}", locale);
            self.locale.set(locale);
        }
    }

    /// Set the locale from a code; unsupported codes leave it unchanged.
    pub fn set_locale(&self, code: &str) -> Result<(), VitalsError> {
        match code.parse::<Locale>() {
            Ok(locale) => {
                self.set(locale);
                Ok(())
            }
            Err(e) => {
                log::warn!("{}", e);
                Err(e)
            }
        }
    }

    pub fn toggle(&self) {
        self.set(self.locale.get_untracked().toggle());
    }

    pub fn t(&self, key: &str) -> String {
        let locale = self.locale.get();
        self.catalog.with_value(|c| c.translate(locale, key))
    }

    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let locale = self.locale.get();
        self.catalog.with_value(|c| c.translate_with(locale, key, args))
    }
}

/// Build the locale slot, restore the saved choice and provide it as context.
pub fn provide_i18n() -> I18nContext {
    let catalog = Catalog::embedded().unwrap_or_else(|e| {
        log::error!("{}", e);
        Catalog::default()
    });
    let missing = catalog.missing_keys(Locale::Es);
    if !missing.is_empty() {
        log::warn!("{} untranslated keys for es: {:?}", missing.len(), missing);
    }

    let (stored, set_stored, _) = use_local_storage::<String, FromToStringCodec>(LOCALE_STORAGE_KEY);
    let preferred = use_locales();
    let initial = stored.with_untracked(|code| {
        preferred.with_untracked(|languages| detect_locale(Some(code.as_str()), languages))
    });
    log::debug!("Initial locale: {}", initial);

    let locale = RwSignal::new(initial);

    // Persist and keep <html lang> in sync
    Effect::new(move |_| {
        let current = locale.get();
        set_stored.set(current.code().to_string());
        if let Some(root) = document().document_element() {
            if let Err(e) = root.set_attribute("lang", current.code()) {
                log::error!("Failed to set html lang: {:?}", e);
            }
        }
    });

    let ctx = I18nContext { locale, catalog: StoredValue::new(catalog) };
    provide_context(ctx);
    ctx
}

pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().expect("I18nContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> I18nContext {
        I18nContext {
            locale: RwSignal::new(Locale::En),
            catalog: StoredValue::new(Catalog::embedded().unwrap()),
        }
    }

    #[test]
    fn test_unsupported_code_leaves_locale_unchanged() {
        let owner = Owner::new();
        owner.with(|| {
            let i18n = context();
            let result = i18n.set_locale("fr");
            assert!(matches!(result, Err(VitalsError::UnknownLocale(ref code)) if code == "fr"));
            assert_eq!(i18n.locale(), Locale::En);
            assert_eq!(i18n.t("nav.home"), "Home");
        });
    }

    #[test]
    fn test_region_tag_switches_locale() {
        let owner = Owner::new();
        owner.with(|| {
            let i18n = context();
            assert!(i18n.set_locale("es-MX").is_ok());
            assert_eq!(i18n.locale(), Locale::Es);
            assert_eq!(i18n.t("nav.home"), "Inicio");
        });
    }

    #[test]
    fn test_toggle_round_trips() {
        let owner = Owner::new();
        owner.with(|| {
            let i18n = context();
            i18n.toggle();
            assert_eq!(i18n.locale(), Locale::Es);
            i18n.toggle();
            assert_eq!(i18n.locale(), Locale::En);
        });
    }
}
