//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Story Repository
// ============================================================================

/// 故事实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryRecord {
    pub id: i64,
    pub title: String,
    pub created_timestamp: DateTime<Utc>,
}

/// 待插入的故事（id 由数据库自增生成）
#[derive(Debug, Clone)]
pub struct NewStory {
    pub title: String,
    pub created_timestamp: DateTime<Utc>,
}

/// 故事片段实体
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentRecord {
    pub id: i64,
    pub story_id: i64,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// 待插入的片段
#[derive(Debug, Clone)]
pub struct NewSegment {
    pub story_id: i64,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Story Repository Port
///
/// 每个方法是一条语句或一个事务，不跨请求持有连接
#[async_trait]
pub trait StoryRepositoryPort: Send + Sync {
    /// 插入故事，返回新 id
    async fn insert_story(&self, story: &NewStory) -> Result<i64, RepositoryError>;

    /// 根据 ID 查找故事
    async fn find_story(&self, id: i64) -> Result<Option<StoryRecord>, RepositoryError>;

    /// 获取所有故事（按创建时间倒序）
    async fn find_all_stories(&self) -> Result<Vec<StoryRecord>, RepositoryError>;

    /// 删除故事及其全部片段（单事务）
    async fn delete_story(&self, id: i64) -> Result<(), RepositoryError>;

    /// 插入片段，返回新 id
    ///
    /// 调用方需先确认 story 存在
    async fn insert_segment(&self, segment: &NewSegment) -> Result<i64, RepositoryError>;

    /// 获取故事的所有片段（按时间正序）
    async fn find_segments_by_story_id(
        &self,
        story_id: i64,
    ) -> Result<Vec<SegmentRecord>, RepositoryError>;

    /// 查找属于指定故事的片段
    async fn find_segment(
        &self,
        story_id: i64,
        segment_id: i64,
    ) -> Result<Option<SegmentRecord>, RepositoryError>;

    /// 删除单个片段
    async fn delete_segment(&self, segment_id: i64) -> Result<(), RepositoryError>;
}
