//! 系统工具
//!
//! - `logging`: 日志系统初始化
//! - `panic_handler`: panic 时恢复终端

pub mod logging;
pub mod panic_handler;
