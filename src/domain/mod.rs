//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Story Context: 故事与片段

pub mod story;

pub use story::{SegmentText, StoryError, StoryTitle};
