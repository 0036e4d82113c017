//! Query Handlers 实现

mod story_handlers;

pub use story_handlers::*;
