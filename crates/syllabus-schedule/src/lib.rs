//! Reading the weekly schedule table and rendering lecture issues from it.

pub mod parser;
pub mod render;

pub use parser::parse_schedule;
pub use render::{build_issue_body, build_issue_title, parse_title_key};
