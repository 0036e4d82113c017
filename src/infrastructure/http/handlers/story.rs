//! Story HTTP Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{CreateStory, DeleteStory, ListStories};
use crate::infrastructure::http::dto::{CreateStoryRequest, MessageResponse, StoryResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

const STORY_NOT_FOUND: &str = "Story not found";

/// 创建故事
///
/// 请求体无法解析时按缺少 title 处理
pub async fn create_story(
    State(state): State<Arc<AppState>>,
    payload: Option<Json<CreateStoryRequest>>,
) -> Result<(StatusCode, Json<StoryResponse>), ApiError> {
    let req = payload.map(|Json(req)| req).unwrap_or_default();

    let story = state
        .create_story_handler
        .handle(CreateStory { title: req.title })
        .await?;

    Ok((StatusCode::CREATED, Json(StoryResponse::from(story))))
}

/// 获取故事列表（最新在前）
pub async fn list_stories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StoryResponse>>, ApiError> {
    let stories = state.list_stories_handler.handle(ListStories).await?;

    Ok(Json(stories.into_iter().map(StoryResponse::from).collect()))
}

/// 删除故事及其所有片段
pub async fn delete_story(
    State(state): State<Arc<AppState>>,
    story_id: Option<Path<i64>>,
) -> Result<Json<MessageResponse>, ApiError> {
    // 非整数 id 与不存在的 id 同样处理
    let Path(story_id) = story_id.ok_or_else(|| ApiError::NotFound(STORY_NOT_FOUND.to_string()))?;

    state
        .delete_story_handler
        .handle(DeleteStory { story_id })
        .await?;

    Ok(Json(MessageResponse {
        message: "Story and segments deleted successfully",
    }))
}
