pub mod label;
pub mod lecture;
