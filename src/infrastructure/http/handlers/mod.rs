//! HTTP Handlers

mod segment;
mod story;

pub use segment::*;
pub use story::*;
