//! arogya-content
//!
//! English display text for engine output, plus plain-text reports
//! rendered from Tera templates.

pub mod catalog;
pub mod error;
pub mod render;

pub use catalog::{ContentCatalog, DetailBlock, DisplayContent, English};
pub use render::{render_report, render_template};
