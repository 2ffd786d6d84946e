//! Version-control collaborator: run the blame query and parse its output.

pub mod porcelain;
pub mod query;

pub use porcelain::parse_line_porcelain;
pub use query::{BlameOutput, GitBlameQuery, LineAttributionQuery};
