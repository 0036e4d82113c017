//! Data Transfer Objects
//!
//! 请求字段均为 `Option`，缺失与空白走同一条校验路径

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::application::{SegmentRecord, StoryRecord};

fn render_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

// ============================================================================
// Story DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct CreateStoryRequest {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StoryResponse {
    pub id: i64,
    pub title: String,
    pub created_timestamp: String,
}

impl From<StoryRecord> for StoryResponse {
    fn from(record: StoryRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            created_timestamp: render_timestamp(&record.created_timestamp),
        }
    }
}

// ============================================================================
// Segment DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct AddSegmentRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SegmentResponse {
    pub id: i64,
    pub story_id: i64,
    pub text: String,
    pub timestamp: String,
}

impl From<SegmentRecord> for SegmentResponse {
    fn from(record: SegmentRecord) -> Self {
        Self {
            id: record.id,
            story_id: record.story_id,
            text: record.text,
            timestamp: render_timestamp(&record.timestamp),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddSegmentResponse {
    pub message: &'static str,
    pub segment_id: i64,
}

// ============================================================================
// 通用
// ============================================================================

/// 删除等操作的确认信息
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
