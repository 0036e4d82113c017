//! SQLite Story Repository

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{
    NewSegment, NewStory, RepositoryError, SegmentRecord, StoryRecord, StoryRepositoryPort,
};

/// SQLite 默认值 `CURRENT_TIMESTAMP` 的格式
const SQLITE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 固定微秒精度的 RFC 3339
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RepositoryError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, SQLITE_TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| RepositoryError::SerializationError(format!("{}: {}", raw, e)))
}

/// SQLite Story Repository
pub struct SqliteStoryRepository {
    pool: DbPool,
}

impl SqliteStoryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct StoryRow {
    id: i64,
    title: String,
    created_timestamp: String,
}

impl TryFrom<StoryRow> for StoryRecord {
    type Error = RepositoryError;

    fn try_from(row: StoryRow) -> Result<Self, Self::Error> {
        Ok(StoryRecord {
            id: row.id,
            title: row.title,
            created_timestamp: parse_timestamp(&row.created_timestamp)?,
        })
    }
}

#[derive(FromRow)]
struct SegmentRow {
    id: i64,
    story_id: i64,
    text: String,
    timestamp: String,
}

impl TryFrom<SegmentRow> for SegmentRecord {
    type Error = RepositoryError;

    fn try_from(row: SegmentRow) -> Result<Self, Self::Error> {
        Ok(SegmentRecord {
            id: row.id,
            story_id: row.story_id,
            text: row.text,
            timestamp: parse_timestamp(&row.timestamp)?,
        })
    }
}

#[async_trait]
impl StoryRepositoryPort for SqliteStoryRepository {
    async fn insert_story(&self, story: &NewStory) -> Result<i64, RepositoryError> {
        let result = sqlx::query("INSERT INTO stories (title, created_timestamp) VALUES (?, ?)")
            .bind(&story.title)
            .bind(format_timestamp(&story.created_timestamp))
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.last_insert_rowid())
    }

    async fn find_story(&self, id: i64) -> Result<Option<StoryRecord>, RepositoryError> {
        let row: Option<StoryRow> =
            sqlx::query_as("SELECT id, title, created_timestamp FROM stories WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(StoryRecord::try_from).transpose()
    }

    async fn find_all_stories(&self) -> Result<Vec<StoryRecord>, RepositoryError> {
        // 两种存储格式混用时字典序不等于时间序，按 julianday 排序
        let rows: Vec<StoryRow> = sqlx::query_as(
            r#"
            SELECT id, title, created_timestamp FROM stories
            ORDER BY julianday(created_timestamp) DESC, created_timestamp DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(StoryRecord::try_from).collect()
    }

    async fn delete_story(&self, id: i64) -> Result<(), RepositoryError> {
        // 使用事务确保原子性
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        // 删除关联的 story_segments
        let removed = sqlx::query("DELETE FROM story_segments WHERE story_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?
            .rows_affected();

        // 删除 story
        sqlx::query("DELETE FROM stories WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        tracing::debug!(story_id = id, segments = removed, "Story rows removed");

        Ok(())
    }

    async fn insert_segment(&self, segment: &NewSegment) -> Result<i64, RepositoryError> {
        let result =
            sqlx::query("INSERT INTO story_segments (story_id, text, timestamp) VALUES (?, ?, ?)")
                .bind(segment.story_id)
                .bind(&segment.text)
                .bind(format_timestamp(&segment.timestamp))
                .execute(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.last_insert_rowid())
    }

    async fn find_segments_by_story_id(
        &self,
        story_id: i64,
    ) -> Result<Vec<SegmentRecord>, RepositoryError> {
        let rows: Vec<SegmentRow> = sqlx::query_as(
            r#"
            SELECT id, story_id, text, timestamp FROM story_segments
            WHERE story_id = ?
            ORDER BY julianday(timestamp) ASC, timestamp ASC, id ASC
            "#,
        )
        .bind(story_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(SegmentRecord::try_from).collect()
    }

    async fn find_segment(
        &self,
        story_id: i64,
        segment_id: i64,
    ) -> Result<Option<SegmentRecord>, RepositoryError> {
        let row: Option<SegmentRow> = sqlx::query_as(
            "SELECT id, story_id, text, timestamp FROM story_segments WHERE id = ? AND story_id = ?",
        )
        .bind(segment_id)
        .bind(story_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(SegmentRecord::try_from).transpose()
    }

    async fn delete_segment(&self, segment_id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM story_segments WHERE id = ?")
            .bind(segment_id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
