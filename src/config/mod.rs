//! 配置管理
//!
//! 启动时从 TOML 文件与 `LD__` 环境变量加载静态配置

mod structs;

pub use structs::*;
