//! Application State
//!
//! 包含所有 Command/Query Handlers，由入口注入同一个 Repository

use std::sync::Arc;

use crate::application::{
    // Command handlers
    AddSegmentHandler, CreateStoryHandler, DeleteSegmentHandler, DeleteStoryHandler,
    // Query handlers
    GetStorySegmentsHandler, ListStoriesHandler,
    // Ports
    StoryRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_story_handler: CreateStoryHandler,
    pub add_segment_handler: AddSegmentHandler,
    pub delete_story_handler: DeleteStoryHandler,
    pub delete_segment_handler: DeleteSegmentHandler,

    // ========== Query Handlers ==========
    pub list_stories_handler: ListStoriesHandler,
    pub get_story_segments_handler: GetStorySegmentsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(story_repo: Arc<dyn StoryRepositoryPort>) -> Self {
        Self {
            create_story_handler: CreateStoryHandler::new(story_repo.clone()),
            add_segment_handler: AddSegmentHandler::new(story_repo.clone()),
            delete_story_handler: DeleteStoryHandler::new(story_repo.clone()),
            delete_segment_handler: DeleteSegmentHandler::new(story_repo.clone()),

            list_stories_handler: ListStoriesHandler::new(story_repo.clone()),
            get_story_segments_handler: GetStorySegmentsHandler::new(story_repo),
        }
    }
}
