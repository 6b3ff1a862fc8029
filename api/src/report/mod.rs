//! Report rendering
//!
//! Presentation helpers kept outside the engine: locale-aware currency
//! formatting and the Markdown quote report.

pub mod currency;
pub mod renderer;

pub use currency::Locale;
pub use renderer::render_quote;
