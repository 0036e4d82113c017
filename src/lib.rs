//! StoryWeaver - 协作式故事接龙后端
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Story Context: 故事标题、片段文本及其校验
//!
//! 应用层 (application/):
//! - Ports: StoryRepository 端口
//! - Commands: 创建/删除故事，追加/删除片段
//! - Queries: 故事列表，故事片段
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + 静态资源
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
