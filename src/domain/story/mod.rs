//! Story Context - 故事限界上下文
//!
//! 职责:
//! - 故事标题、片段文本的值对象
//! - 输入校验（去除首尾空白后不可为空）

mod errors;
mod value_objects;

pub use errors::StoryError;
pub use value_objects::{SegmentText, StoryTitle};
