//! 卡片操作错误
//!
//! 全部为本地校验失败，不重试，也不会让控制器失效

use super::card::CardId;

/// 提示用户的 URL 格式示例
pub const EXPECTED_URL_FORMAT: &str = "example.com or https://example.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    /// 输入为空或只有空白，调用方保持输入框焦点，不提示
    EmptyInput,
    /// 无法解析为合法的绝对 URL
    InvalidUrl(String),
    /// 动作指向的卡片已不存在，静默忽略
    StaleReference(CardId),
}

impl CardError {
    /// 是否需要展示给用户
    pub fn is_user_visible(&self) -> bool {
        matches!(self, Self::InvalidUrl(_))
    }

    /// 面向用户的提示文本
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyInput => "Please enter a URL".to_string(),
            Self::InvalidUrl(_) => format!(
                "Please enter a valid URL (for example: {})",
                EXPECTED_URL_FORMAT
            ),
            Self::StaleReference(_) => "Card no longer exists".to_string(),
        }
    }
}

impl std::fmt::Display for CardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "URL input is empty"),
            Self::InvalidUrl(reason) => write!(f, "Invalid URL: {}", reason),
            Self::StaleReference(id) => write!(f, "Stale card reference: {}", id),
        }
    }
}

impl std::error::Error for CardError {}
