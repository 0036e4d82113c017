//! Story Queries

/// 列出所有故事查询
#[derive(Debug, Clone)]
pub struct ListStories;

/// 获取故事片段查询
#[derive(Debug, Clone)]
pub struct GetStorySegments {
    pub story_id: i64,
}
