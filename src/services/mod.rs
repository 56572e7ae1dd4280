// Service exports
pub mod input;

pub use input::{load_request, parse_request};
