//! Event handlers for the main screen
//!
//! Handles: input bar, card list

use ratatui::crossterm::event::KeyCode;

use crate::deck::CardAction;
use crate::interfaces::tui::app::{App, CurrentScreen, Focus};

/// Handle input bar keys
pub fn handle_input_bar(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Tab | KeyCode::Down => {
            if !app.deck.is_empty() {
                app.focus = Focus::List;
                app.adjust_scroll_offset();
            }
        }
        KeyCode::Esc => {
            if app.deck.is_empty() {
                app.current_screen = CurrentScreen::Exiting;
            } else {
                app.focus = Focus::List;
                app.adjust_scroll_offset();
            }
        }
        KeyCode::Char(c) => {
            app.input.push(c);
            // 用户正在修改输入，清掉上次的错误提示
            app.error_message.clear();
        }
        _ => {}
    }
    false
}

/// Handle card list keys
pub fn handle_card_list(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => app.move_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => app.move_cursor_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Enter | KeyCode::Char('o') | KeyCode::Char('O') => {
            app.apply_to_focused(CardAction::Open)
        }
        KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Char('S') => {
            app.apply_to_focused(CardAction::Select)
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('x') | KeyCode::Char('X') => {
            app.apply_to_focused(CardAction::Delete)
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('i') | KeyCode::Tab => {
            app.focus = Focus::Input;
        }
        KeyCode::Char('y') => {
            #[cfg(feature = "clipboard")]
            app.copy_focused_url();
        }
        KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') => {
            app.current_screen = CurrentScreen::Help;
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.current_screen = CurrentScreen::Exiting;
        }
        KeyCode::Esc => app.clear_messages(),
        _ => {}
    }

    // 列表删空后回到输入框
    if app.deck.is_empty() && app.current_screen == CurrentScreen::Main {
        app.focus = Focus::Input;
    }
    false
}
