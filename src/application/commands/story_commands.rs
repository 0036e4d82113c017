//! Story Commands

/// 创建故事命令
///
/// `title` 保留请求中的原始值，校验在 handler 中完成
#[derive(Debug, Clone)]
pub struct CreateStory {
    pub title: Option<String>,
}

/// 追加片段命令
#[derive(Debug, Clone)]
pub struct AddSegment {
    pub story_id: i64,
    pub text: Option<String>,
}

/// 删除故事命令（级联删除片段）
#[derive(Debug, Clone)]
pub struct DeleteStory {
    pub story_id: i64,
}

/// 删除片段命令
#[derive(Debug, Clone)]
pub struct DeleteSegment {
    pub story_id: i64,
    pub segment_id: i64,
}
