//! Segment HTTP Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{AddSegment, ApplicationError, DeleteSegment, GetStorySegments};
use crate::infrastructure::http::dto::{
    AddSegmentRequest, AddSegmentResponse, MessageResponse, SegmentResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取故事的全部片段（最早在前）
pub async fn list_segments(
    State(state): State<Arc<AppState>>,
    story_id: Option<Path<i64>>,
) -> Result<Json<Vec<SegmentResponse>>, ApiError> {
    let Path(story_id) =
        story_id.ok_or_else(|| ApiError::NotFound("Story not found".to_string()))?;

    let segments = state
        .get_story_segments_handler
        .handle(GetStorySegments { story_id })
        .await?;

    Ok(Json(segments.into_iter().map(SegmentResponse::from).collect()))
}

/// 向故事追加片段
pub async fn add_segment(
    State(state): State<Arc<AppState>>,
    story_id: Option<Path<i64>>,
    payload: Option<Json<AddSegmentRequest>>,
) -> Result<(StatusCode, Json<AddSegmentResponse>), ApiError> {
    let story_missing = || ApiError::NotFound("Story not found, cannot add segment".to_string());

    let Path(story_id) = story_id.ok_or_else(story_missing)?;
    let req = payload.map(|Json(req)| req).unwrap_or_default();

    let segment_id = state
        .add_segment_handler
        .handle(AddSegment {
            story_id,
            text: req.text,
        })
        .await
        .map_err(|e| match e {
            ApplicationError::NotFound { .. } => story_missing(),
            other => ApiError::from(other),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(AddSegmentResponse {
            message: "Segment added",
            segment_id,
        }),
    ))
}

/// 删除单个片段，片段必须属于路径中的故事
pub async fn delete_segment(
    State(state): State<Arc<AppState>>,
    ids: Option<Path<(i64, i64)>>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path((story_id, segment_id)) =
        ids.ok_or_else(|| ApiError::NotFound("Segment not found".to_string()))?;

    state
        .delete_segment_handler
        .handle(DeleteSegment {
            story_id,
            segment_id,
        })
        .await?;

    Ok(Json(MessageResponse {
        message: "Segment deleted successfully",
    }))
}
