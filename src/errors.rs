use std::fmt;

use crate::deck::CardError;

#[derive(Debug, Clone)]
pub enum LinkdeckError {
    Config(String),
    FileOperation(String),
    Serialization(String),
    Validation(String),
    Browser(String),
    Clipboard(String),
    Terminal(String),
    Logging(String),
}

impl LinkdeckError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinkdeckError::Config(_) => "E001",
            LinkdeckError::FileOperation(_) => "E002",
            LinkdeckError::Serialization(_) => "E003",
            LinkdeckError::Validation(_) => "E004",
            LinkdeckError::Browser(_) => "E005",
            LinkdeckError::Clipboard(_) => "E006",
            LinkdeckError::Terminal(_) => "E007",
            LinkdeckError::Logging(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinkdeckError::Config(_) => "Configuration Error",
            LinkdeckError::FileOperation(_) => "File Operation Error",
            LinkdeckError::Serialization(_) => "Serialization Error",
            LinkdeckError::Validation(_) => "Validation Error",
            LinkdeckError::Browser(_) => "Browser Launch Error",
            LinkdeckError::Clipboard(_) => "Clipboard Error",
            LinkdeckError::Terminal(_) => "Terminal Error",
            LinkdeckError::Logging(_) => "Logging Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LinkdeckError::Config(msg)
            | LinkdeckError::FileOperation(msg)
            | LinkdeckError::Serialization(msg)
            | LinkdeckError::Validation(msg)
            | LinkdeckError::Browser(msg)
            | LinkdeckError::Clipboard(msg)
            | LinkdeckError::Terminal(msg)
            | LinkdeckError::Logging(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于终端启动阶段）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 状态栏）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LinkdeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkdeckError {}

// 便捷的构造函数
impl LinkdeckError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Serialization(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Validation(msg.into())
    }

    pub fn browser<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Browser(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Clipboard(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Terminal(msg.into())
    }

    pub fn logging<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Logging(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for LinkdeckError {
    fn from(err: std::io::Error) -> Self {
        LinkdeckError::FileOperation(err.to_string())
    }
}

impl From<config::ConfigError> for LinkdeckError {
    fn from(err: config::ConfigError) -> Self {
        LinkdeckError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for LinkdeckError {
    fn from(err: toml::ser::Error) -> Self {
        LinkdeckError::Serialization(err.to_string())
    }
}

impl From<CardError> for LinkdeckError {
    fn from(err: CardError) -> Self {
        LinkdeckError::Validation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkdeckError>;
