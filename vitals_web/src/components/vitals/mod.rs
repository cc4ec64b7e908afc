//! Web Vitals visualizer widgets.
//!
//! - **MetricGauge**: half-circle gauge for one metric, animated between values
//! - **RatingBadge**: colored good / needs improvement / poor pill
//! - **ScenarioPresets**: buttons that set all three metrics at once
//! - **WebVitalsVisualizer**: the three gauges plus presets and manual controls
//!
//! Readings are held in a single `RwSignal<MetricReadings>` owned by the
//! visualizer. Ratings and arc geometry are derived on every change, never
//! stored.

mod gauge;
mod rating_badge;
mod scenario_presets;
mod visualizer;

pub use gauge::MetricGauge;
pub use rating_badge::RatingBadge;
pub use scenario_presets::ScenarioPresets;
pub use visualizer::WebVitalsVisualizer;
