//! Supported locales and locale detection.

use serde::{Deserialize, Serialize};
use crate::settings::DEFAULT_LOCALE;
use crate::VitalsError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn all() -> [Locale; 2] {
        [Locale::En, Locale::Es]
    }

    /// BCP 47 primary language subtag.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Name of the language in that language, for the switcher.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Español",
        }
    }

    /// The other member of the two-locale set.
    pub fn toggle(&self) -> Locale {
        match self {
            Locale::En => Locale::Es,
            Locale::Es => Locale::En,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = VitalsError;

    /// Accepts bare codes and region-tagged tags ("es-MX", "en_GB").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match primary.as_str() {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            _ => Err(VitalsError::UnknownLocale(s.to_string())),
        }
    }
}

/// Pick the locale to start with.
///
/// Order: stored preference, then the first supported browser language, then
/// [`DEFAULT_LOCALE`]. An unsupported stored value is ignored.
pub fn detect_locale(stored: Option<&str>, preferred: &[String]) -> Locale {
    if let Some(code) = stored.filter(|c| !c.is_empty()) {
        match code.parse::<Locale>() {
            Ok(locale) => return locale,
            Err(e) => log::warn!("Ignoring stored locale: {}", e),
        }
    }
    preferred
        .iter()
        .find_map(|tag| tag.parse::<Locale>().ok())
        .unwrap_or(DEFAULT_LOCALE)
}
