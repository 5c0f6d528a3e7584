use serde::{Deserialize, Serialize};

use crate::errors::{LinkdeckError, Result};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀
pub const ENV_PREFIX: &str = "LD";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// 包含：
/// - deck: 卡片列表行为
/// - ui: 终端界面
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub deck: DeckConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值
    /// ENV 前缀：LD，分隔符：__
    /// 示例：LD__LOGGING__LEVEL=debug
    ///
    /// 未显式指定路径时，`config.toml` 不存在不算错误
    pub fn try_load(path: Option<&str>) -> Result<Self> {
        use config::{Config, Environment, File};

        let (path, required) = match path {
            Some(p) => (p, true),
            None => (DEFAULT_CONFIG_PATH, false),
        };

        let settings = Config::builder()
            .add_source(File::with_name(path).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: StaticConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 加载配置，失败时打印错误并回退到默认值
    pub fn load(path: Option<&str>) -> Self {
        match Self::try_load(path) {
            Ok(config) => {
                let shown = path.unwrap_or(DEFAULT_CONFIG_PATH);
                if std::path::Path::new(shown).exists() {
                    eprintln!("[INFO] Configuration loaded from: {}", shown);
                }
                config
            }
            Err(e) => {
                eprintln!("{}", e.format_colored());
                Self::default()
            }
        }
    }

    /// 校验配置取值
    pub fn validate(&self) -> Result<()> {
        let scheme = &self.deck.default_scheme;
        if !crate::deck::has_scheme(&format!("{}://", scheme)) {
            return Err(LinkdeckError::config(format!(
                "Invalid deck.default_scheme: '{}'",
                scheme
            )));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(LinkdeckError::config(format!(
                "Invalid logging.format: '{}'. Valid: text, json",
                self.logging.format
            )));
        }

        Ok(())
    }

    /// 生成示例 TOML 配置文件（全部取默认值）
    pub fn generate_sample_config() -> Result<String> {
        Ok(toml::to_string_pretty(&Self::default())?)
    }
}

/// 卡片列表配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckConfig {
    /// 输入缺少协议时补全的协议
    #[serde(default = "default_scheme")]
    pub default_scheme: String,
    /// 启动时添加的卡片
    #[serde(default)]
    pub initial_urls: Vec<String>,
}

/// 终端界面配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// 是否捕获鼠标事件
    #[serde(default = "default_mouse")]
    pub mouse: bool,
    #[serde(default = "default_url_truncate_length")]
    pub url_truncate_length: usize,
    #[serde(default = "default_page_scroll_step")]
    pub page_scroll_step: usize,
}

/// 日志配置
///
/// 终端由 TUI 占用，日志只写文件；`file` 为空时不输出日志
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_scheme() -> String {
    crate::deck::DEFAULT_SCHEME.to_string()
}

fn default_mouse() -> bool {
    true
}

fn default_url_truncate_length() -> usize {
    60
}

fn default_page_scroll_step() -> usize {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_file() -> Option<String> {
    Some("linkdeck.log".to_string())
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    false
}

// ============================================================
// Default implementations
// ============================================================

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            default_scheme: default_scheme(),
            initial_urls: Vec::new(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse: default_mouse(),
            url_truncate_length: default_url_truncate_length(),
            page_scroll_step: default_page_scroll_step(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StaticConfig::default();
        assert_eq!(config.deck.default_scheme, "https");
        assert!(config.deck.initial_urls.is_empty());
        assert!(config.ui.mouse);
        assert_eq!(config.logging.file.as_deref(), Some("linkdeck.log"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let mut config = StaticConfig::default();
        config.deck.default_scheme = "ht tp".to_string();
        assert!(matches!(config.validate(), Err(LinkdeckError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_log_format() {
        let mut config = StaticConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sample_config_parses_back() {
        let sample = StaticConfig::generate_sample_config().unwrap();
        let parsed: StaticConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed.deck.default_scheme, "https");
        assert_eq!(parsed.ui.page_scroll_step, 5);
    }
}
