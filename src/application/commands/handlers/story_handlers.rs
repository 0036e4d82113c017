//! Story Command Handlers

use chrono::Utc;
use std::sync::Arc;

use crate::application::commands::{AddSegment, CreateStory, DeleteSegment, DeleteStory};
use crate::application::error::ApplicationError;
use crate::application::ports::{NewSegment, NewStory, StoryRecord, StoryRepositoryPort};
use crate::domain::{SegmentText, StoryTitle};

// ============================================================================
// CreateStory
// ============================================================================

/// CreateStory Handler - 插入后回读完整记录
pub struct CreateStoryHandler {
    story_repo: Arc<dyn StoryRepositoryPort>,
}

impl CreateStoryHandler {
    pub fn new(story_repo: Arc<dyn StoryRepositoryPort>) -> Self {
        Self { story_repo }
    }

    pub async fn handle(&self, command: CreateStory) -> Result<StoryRecord, ApplicationError> {
        let title = StoryTitle::parse(command.title.as_deref())?;

        let story = NewStory {
            title: title.into_inner(),
            created_timestamp: Utc::now(),
        };
        let story_id = self.story_repo.insert_story(&story).await?;

        let created = self
            .story_repo
            .find_story(story_id)
            .await?
            .ok_or_else(|| ApplicationError::internal("Failed to create story after insert"))?;

        tracing::info!(story_id = story_id, title = %created.title, "Story created");

        Ok(created)
    }
}

// ============================================================================
// AddSegment
// ============================================================================

/// AddSegment Handler
pub struct AddSegmentHandler {
    story_repo: Arc<dyn StoryRepositoryPort>,
}

impl AddSegmentHandler {
    pub fn new(story_repo: Arc<dyn StoryRepositoryPort>) -> Self {
        Self { story_repo }
    }

    /// 返回新片段 id
    ///
    /// 先检查故事存在，再校验文本（未知故事总是 404）
    pub async fn handle(&self, command: AddSegment) -> Result<i64, ApplicationError> {
        let story_id = command.story_id;

        self.story_repo
            .find_story(story_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Story", story_id))?;

        let text = SegmentText::parse(command.text.as_deref())?;

        let segment = NewSegment {
            story_id,
            text: text.into_inner(),
            timestamp: Utc::now(),
        };
        let segment_id = self.story_repo.insert_segment(&segment).await?;

        tracing::info!(story_id = story_id, segment_id = segment_id, "Segment added");

        Ok(segment_id)
    }
}

// ============================================================================
// DeleteStory
// ============================================================================

/// DeleteStory Handler
pub struct DeleteStoryHandler {
    story_repo: Arc<dyn StoryRepositoryPort>,
}

impl DeleteStoryHandler {
    pub fn new(story_repo: Arc<dyn StoryRepositoryPort>) -> Self {
        Self { story_repo }
    }

    pub async fn handle(&self, command: DeleteStory) -> Result<(), ApplicationError> {
        let story_id = command.story_id;

        let story = self
            .story_repo
            .find_story(story_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Story", story_id))?;

        self.story_repo.delete_story(story_id).await?;

        tracing::info!(story_id = story_id, title = %story.title, "Story deleted");

        Ok(())
    }
}

// ============================================================================
// DeleteSegment
// ============================================================================

/// DeleteSegment Handler
pub struct DeleteSegmentHandler {
    story_repo: Arc<dyn StoryRepositoryPort>,
}

impl DeleteSegmentHandler {
    pub fn new(story_repo: Arc<dyn StoryRepositoryPort>) -> Self {
        Self { story_repo }
    }

    /// 片段必须属于给定故事，否则视为不存在
    pub async fn handle(&self, command: DeleteSegment) -> Result<(), ApplicationError> {
        self.story_repo
            .find_segment(command.story_id, command.segment_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Segment", command.segment_id))?;

        self.story_repo.delete_segment(command.segment_id).await?;

        tracing::info!(
            story_id = command.story_id,
            segment_id = command.segment_id,
            "Segment deleted"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{RepositoryError, SegmentRecord};
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteStoryRepository,
    };
    use async_trait::async_trait;

    /// 插入成功但回读不到记录的仓储
    struct VanishingStoryRepo;

    #[async_trait]
    impl StoryRepositoryPort for VanishingStoryRepo {
        async fn insert_story(&self, _story: &NewStory) -> Result<i64, RepositoryError> {
            Ok(1)
        }
        async fn find_story(&self, _id: i64) -> Result<Option<StoryRecord>, RepositoryError> {
            Ok(None)
        }
        async fn find_all_stories(&self) -> Result<Vec<StoryRecord>, RepositoryError> {
            Ok(Vec::new())
        }
        async fn delete_story(&self, _id: i64) -> Result<(), RepositoryError> {
            Ok(())
        }
        async fn insert_segment(&self, _segment: &NewSegment) -> Result<i64, RepositoryError> {
            Ok(1)
        }
        async fn find_segments_by_story_id(
            &self,
            _story_id: i64,
        ) -> Result<Vec<SegmentRecord>, RepositoryError> {
            Ok(Vec::new())
        }
        async fn find_segment(
            &self,
            _story_id: i64,
            _segment_id: i64,
        ) -> Result<Option<SegmentRecord>, RepositoryError> {
            Ok(None)
        }
        async fn delete_segment(&self, _segment_id: i64) -> Result<(), RepositoryError> {
            Ok(())
        }
    }

    async fn repo() -> Arc<dyn StoryRepositoryPort> {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        Arc::new(SqliteStoryRepository::new(pool))
    }

    #[tokio::test]
    async fn test_create_story_trims_title() {
        let handler = CreateStoryHandler::new(repo().await);
        let story = handler
            .handle(CreateStory {
                title: Some("  Once Upon A Time  ".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(story.id, 1);
        assert_eq!(story.title, "Once Upon A Time");
    }

    #[tokio::test]
    async fn test_create_story_rejects_blank_title() {
        let handler = CreateStoryHandler::new(repo().await);
        let err = handler
            .handle(CreateStory {
                title: Some("   ".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ValidationError(ref m) if m == "Missing or empty title field"));
    }

    #[tokio::test]
    async fn test_create_story_fails_when_read_back_misses() {
        let handler = CreateStoryHandler::new(Arc::new(VanishingStoryRepo));
        let err = handler
            .handle(CreateStory {
                title: Some("Lost".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::InternalError(ref m) if m == "Failed to create story after insert"
        ));
    }

    #[tokio::test]
    async fn test_add_segment_unknown_story_writes_nothing() {
        let repo = repo().await;
        let handler = AddSegmentHandler::new(repo.clone());

        // 文本为空也应先报告故事不存在
        let err = handler
            .handle(AddSegment {
                story_id: 42,
                text: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { resource_type: "Story", id: 42 }));

        assert!(repo.find_segments_by_story_id(42).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_segment_rejects_blank_text() {
        let repo = repo().await;
        let story = CreateStoryHandler::new(repo.clone())
            .handle(CreateStory {
                title: Some("Title".to_string()),
            })
            .await
            .unwrap();

        let err = AddSegmentHandler::new(repo.clone())
            .handle(AddSegment {
                story_id: story.id,
                text: Some(" \n ".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ValidationError(_)));
        assert!(repo.find_segments_by_story_id(story.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_segment_requires_matching_story() {
        let repo = repo().await;
        let create = CreateStoryHandler::new(repo.clone());
        let first = create
            .handle(CreateStory {
                title: Some("First".to_string()),
            })
            .await
            .unwrap();
        let second = create
            .handle(CreateStory {
                title: Some("Second".to_string()),
            })
            .await
            .unwrap();

        let segment_id = AddSegmentHandler::new(repo.clone())
            .handle(AddSegment {
                story_id: first.id,
                text: Some("Hello".to_string()),
            })
            .await
            .unwrap();

        let delete = DeleteSegmentHandler::new(repo.clone());
        let err = delete
            .handle(DeleteSegment {
                story_id: second.id,
                segment_id,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { resource_type: "Segment", .. }));

        delete
            .handle(DeleteSegment {
                story_id: first.id,
                segment_id,
            })
            .await
            .unwrap();
        assert!(repo.find_segments_by_story_id(first.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_story() {
        let handler = DeleteStoryHandler::new(repo().await);
        let err = handler.handle(DeleteStory { story_id: 7 }).await.unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { resource_type: "Story", id: 7 }));
    }
}
