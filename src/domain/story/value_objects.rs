//! Story Context - Value Objects

use super::StoryError;

/// 去除首尾空白，空串视为缺失
fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// 故事标题
///
/// 不变量: 已 trim 且非空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryTitle(String);

impl StoryTitle {
    /// 从请求中的原始字段构造，`None` 与纯空白同样被拒绝
    pub fn parse(raw: Option<&str>) -> Result<Self, StoryError> {
        non_blank(raw).map(Self).ok_or(StoryError::EmptyTitle)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// 片段文本
///
/// 不变量: 已 trim 且非空；不做长度限制
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentText(String);

impl SegmentText {
    pub fn parse(raw: Option<&str>) -> Result<Self, StoryError> {
        non_blank(raw).map(Self).ok_or(StoryError::EmptyText)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_trimmed() {
        let title = StoryTitle::parse(Some("  Once Upon A Time \n")).unwrap();
        assert_eq!(title.into_inner(), "Once Upon A Time");
    }

    #[test]
    fn test_title_rejects_blank_and_missing() {
        assert_eq!(StoryTitle::parse(Some("   ")), Err(StoryError::EmptyTitle));
        assert_eq!(StoryTitle::parse(Some("")), Err(StoryError::EmptyTitle));
        assert_eq!(StoryTitle::parse(None), Err(StoryError::EmptyTitle));
    }

    #[test]
    fn test_segment_text_rejects_blank() {
        assert_eq!(SegmentText::parse(Some("\t ")), Err(StoryError::EmptyText));
        assert_eq!(SegmentText::parse(None), Err(StoryError::EmptyText));
    }

    #[test]
    fn test_segment_text_keeps_inner_whitespace() {
        let text = SegmentText::parse(Some(" It was  a dark night. ")).unwrap();
        assert_eq!(text.into_inner(), "It was  a dark night.");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(StoryError::EmptyTitle.to_string(), "Missing or empty title field");
        assert_eq!(
            StoryError::EmptyText.to_string(),
            "Missing or empty text field for segment"
        );
    }
}
