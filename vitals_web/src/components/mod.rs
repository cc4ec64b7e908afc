mod language_switcher;
mod i18n_demo;
pub mod layout;
pub mod lesson;
pub mod vitals;

pub use language_switcher::LanguageSwitcher;
pub use i18n_demo::I18nDemo;
pub use layout::SiteLayout;
pub use vitals::WebVitalsVisualizer;
