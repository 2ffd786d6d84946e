//! Renderers for `AnalysisResult`.
//!
//! Presentation only: entries are printed in the order the result holds
//! them, nothing is filtered or reordered.

pub mod json;
pub mod text;

pub use json::render_json;
pub use text::{render_text, TextOptions};
