//! Terminal User Interface (TUI) module
//!
//! Provides an interactive terminal board of link cards

use std::io::{self, Stderr};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{info, warn};

pub mod app;
pub mod constants;
pub mod event_handler;
pub mod ui;
pub mod view;

use crate::config::StaticConfig;
use crate::deck::{CardError, CardListController};
use crate::errors::{LinkdeckError, Result};
use crate::system::panic_handler::restore_terminal;
use app::App;
use ui::ui;

/// 根据配置创建控制器并添加初始卡片
///
/// 无效的初始 URL 记录日志后跳过，并随控制器一起返回；空白项直接忽略
pub fn build_controller(
    config: &StaticConfig,
    seeds: &[String],
) -> (CardListController, Vec<LinkdeckError>) {
    let mut deck = CardListController::new().default_scheme(config.deck.default_scheme.clone());
    let mut skipped = Vec::new();
    for raw in seeds {
        match deck.add(raw) {
            Ok(_) | Err(CardError::EmptyInput) => {}
            Err(e) => {
                let err = LinkdeckError::from(e);
                warn!("Skipping initial URL '{}': {}", raw, err);
                skipped.push(err);
            }
        }
    }
    (deck, skipped)
}

/// Run the TUI application
pub fn run_tui(config: &StaticConfig, seeds: &[String]) -> Result<()> {
    let (deck, skipped) = build_controller(config, seeds);
    let mut app = App::new(deck, &config.ui);
    if let Some(first) = skipped.first() {
        app.set_error(format!(
            "Skipped {} invalid initial URL(s): {}",
            skipped.len(),
            first.message()
        ));
    }
    info!("Starting TUI with {} cards", app.deck.len());

    // Setup terminal
    enable_raw_mode().map_err(terminal_error)?;
    let mut terminal = or_restore(setup_terminal(config.ui.mouse))?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().map_err(terminal_error)?;
    if config.ui.mouse {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .map_err(terminal_error)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(terminal_error)?;
    }
    terminal.show_cursor().map_err(terminal_error)?;

    info!("TUI exited with {} cards", app.deck.len());
    res
}

/// 进入备用屏幕并创建终端
fn setup_terminal(mouse: bool) -> Result<Terminal<CrosstermBackend<Stderr>>> {
    let mut stderr = io::stderr();
    if mouse {
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture).map_err(terminal_error)?;
    } else {
        execute!(stderr, EnterAlternateScreen).map_err(terminal_error)?;
    }
    Terminal::new(CrosstermBackend::new(stderr)).map_err(terminal_error)
}

/// 终端初始化失败时恢复终端（raw 模式已开启）
pub(crate) fn or_restore<T>(result: Result<T>) -> Result<T> {
    if result.is_err() {
        restore_terminal();
    }
    result
}

/// Main application loop
///
/// 每个事件处理完成后才重绘，事件之间没有并发
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stderr>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app)).map_err(terminal_error)?;

        let event = event::read().map_err(terminal_error)?;
        if event_handler::handle_event(app, event) {
            return Ok(());
        }
    }
}

fn terminal_error(err: io::Error) -> LinkdeckError {
    LinkdeckError::terminal(err.to_string())
}
