//! Data types shared by the parser, the aggregator and the renderers.
//!
//! - `attribution`: AttributionRecord, one per blamed line
//! - `summary`: ContributorSummary, NotableCommit, AnalysisResult

pub mod attribution;
pub mod summary;

pub use attribution::*;
pub use summary::*;
