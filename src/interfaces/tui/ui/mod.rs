// UI submodules
mod card_list;
mod common;
mod exiting;
mod help;
mod input_bar;
pub mod widgets;

// Re-export common utilities
pub use common::{draw_footer, draw_status_bar, draw_title_bar};

// Re-export screen drawing functions
pub use card_list::draw_card_list;
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use input_bar::draw_input_bar;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
///
/// 每帧重建点击区域表
pub fn ui(frame: &mut Frame, app: &mut App) {
    app.hit_map.clear();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Input bar
            Constraint::Min(6),    // Card list
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);
    draw_input_bar(frame, app, main_chunks[1]);
    draw_card_list(frame, app, main_chunks[2]);
    draw_status_bar(frame, app, main_chunks[3]);
    draw_footer(frame, app, main_chunks[4]);

    match app.current_screen {
        CurrentScreen::Main => {}
        CurrentScreen::Help => draw_help_screen(frame, frame.area()),
        CurrentScreen::Exiting => draw_exiting_screen(frame, frame.area(), app.deck.len()),
    }
}
