//! Panic handler module
//!
//! TUI 运行期间发生 panic 时，先恢复终端（退出 raw 模式与备用屏幕），
//! 再把 panic 信息写入日志，最后交给之前安装的 hook（color_eyre）输出报告

use std::panic;

use ratatui::crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Install custom panic hook
///
/// 必须在 `color_eyre::install()` 之后调用，以便链式调用其 hook
pub fn install_panic_hook() {
    let previous_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();

        let payload = panic_info.payload();
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "Unknown location".to_string());

        tracing::error!("Panic at {}: {}", location, message);

        previous_hook(panic_info);
    }));
}

/// 尽力恢复终端状态，忽略错误
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
}
