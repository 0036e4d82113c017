//! Story Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{SegmentRecord, StoryRecord, StoryRepositoryPort};
use crate::application::queries::{GetStorySegments, ListStories};

/// ListStories Handler
pub struct ListStoriesHandler {
    story_repo: Arc<dyn StoryRepositoryPort>,
}

impl ListStoriesHandler {
    pub fn new(story_repo: Arc<dyn StoryRepositoryPort>) -> Self {
        Self { story_repo }
    }

    /// 按创建时间倒序（最新在前）
    pub async fn handle(&self, _query: ListStories) -> Result<Vec<StoryRecord>, ApplicationError> {
        Ok(self.story_repo.find_all_stories().await?)
    }
}

/// GetStorySegments Handler
pub struct GetStorySegmentsHandler {
    story_repo: Arc<dyn StoryRepositoryPort>,
}

impl GetStorySegmentsHandler {
    pub fn new(story_repo: Arc<dyn StoryRepositoryPort>) -> Self {
        Self { story_repo }
    }

    pub async fn handle(
        &self,
        query: GetStorySegments,
    ) -> Result<Vec<SegmentRecord>, ApplicationError> {
        // 验证故事存在
        self.story_repo
            .find_story(query.story_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Story", query.story_id))?;

        Ok(self
            .story_repo
            .find_segments_by_story_id(query.story_id)
            .await?)
    }
}
