//! Shared types and logic for the web vitals lessons site.
//!
//! Everything here is plain data and pure functions so it compiles to WASM
//! for `vitals_web` and can be tested natively without a browser.
//!
//! # Modules
//!
//! - `metrics` - metric definitions and the rating classifier
//! - `gauge` - arc geometry and the headless gauge animation state
//! - `presets` - scenario presets and the tracked readings
//! - `locale` / `i18n` - supported locales and the translation catalog
//! - `curriculum` - weeks, lessons and section templates
//!
//! # Usage
//!
//! ```rust
//! use vitals_common::{classify, MetricKind, Rating};
//!
//! let lcp = MetricKind::Lcp.definition();
//! assert_eq!(classify(lcp, 3.0), Rating::NeedsImprovement);
//! ```

mod errors;
mod metrics;
mod gauge;
mod presets;
mod locale;
mod i18n;
pub mod curriculum;
pub mod settings;

pub use errors::*;
pub use metrics::*;
pub use gauge::*;
pub use presets::*;
pub use locale::*;
pub use i18n::*;
