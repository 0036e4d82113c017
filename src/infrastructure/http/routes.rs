//! HTTP Routes
//!
//! API Endpoints:
//! - /stories                                  GET     列出所有故事（最新在前）
//! - /stories                                  POST    创建故事
//! - /stories/:story_id                        DELETE  删除故事及其片段
//! - /stories/:story_id/segments               GET     获取故事片段（最早在前）
//! - /stories/:story_id/segments               POST    追加片段
//! - /stories/:story_id/segments/:segment_id   DELETE  删除片段
//!
//! 其余 GET 请求由 server 中的静态资源服务处理

use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有 API 路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/stories",
            get(handlers::list_stories).post(handlers::create_story),
        )
        .route("/stories/:story_id", delete(handlers::delete_story))
        .route(
            "/stories/:story_id/segments",
            get(handlers::list_segments).post(handlers::add_segment),
        )
        .route(
            "/stories/:story_id/segments/:segment_id",
            delete(handlers::delete_segment),
        )
}
