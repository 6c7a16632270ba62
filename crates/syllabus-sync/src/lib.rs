pub mod duplicates;
pub mod engine;
pub mod labels;

pub use engine::{Pipeline, RunEvent, RunOptions, RunSummary};
