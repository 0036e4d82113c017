//! StoryWeaver - 协作式故事接龙后端
//!
//! 启动流程：配置 → 日志 → 连接池与迁移 → HTTP 服务 → 优雅关闭

use std::sync::Arc;

use storyweaver::config::{load_config, print_config};
use storyweaver::infrastructure::http::{AppState, HttpServer};
use storyweaver::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteStoryRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},storyweaver={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("StoryWeaver - collaborative storytelling backend");
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    if config.server.static_files.enabled && !config.server.static_files.dir.is_dir() {
        tracing::warn!(
            dir = ?config.server.static_files.dir,
            "Static files directory not found, landing page will return 404"
        );
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    let story_repo = Arc::new(SqliteStoryRepository::new(pool.clone()));
    let state = AppState::new(story_repo);

    let server = HttpServer::new(config.server.clone(), state);

    tracing::info!("Starting HTTP server...");

    server.run_with_shutdown(shutdown_signal()).await?;

    // 服务退出后关闭连接池，等待连接归还
    pool.close().await;

    tracing::info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received shutdown signal"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for ctrl-c"),
    }
}
