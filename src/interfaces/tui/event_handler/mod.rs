//! Event handling for TUI
//!
//! 所有卡片共用一个键盘处理入口和一个鼠标处理入口，
//! 由焦点或点击区域表决定事件指向哪张卡片、哪个动作。
//!
//! - main_screen: 输入框与卡片列表
//! - misc_screens: Help, Exiting

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::interfaces::tui::app::{App, CurrentScreen, Focus, HitTarget};

mod main_screen;
mod misc_screens;

use main_screen::*;
use misc_screens::*;

/// 处理一个终端事件，返回是否退出
pub fn handle_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key.code),
        Event::Mouse(mouse) => {
            handle_mouse_event(app, mouse);
            false
        }
        _ => false,
    }
}

/// Handle keyboard input based on current screen
pub fn handle_key_event(app: &mut App, key_code: KeyCode) -> bool {
    // 全局快捷键：Delete 删除选中的卡片
    if key_code == KeyCode::Delete {
        app.delete_selected();
        return false;
    }

    match app.current_screen {
        CurrentScreen::Main => match app.focus {
            Focus::Input => handle_input_bar(app, key_code),
            Focus::List => handle_card_list(app, key_code),
        },
        CurrentScreen::Help => handle_help_screen(app, key_code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key_code),
    }
}

/// Handle mouse input on the main screen
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if app.current_screen != CurrentScreen::Main {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match app.hit_map.target_at(mouse.column, mouse.row) {
                Some(HitTarget::Trigger(action)) => {
                    app.focus_card(action.card_id());
                    app.apply(action);
                }
                Some(HitTarget::Card(id)) => app.focus_card(id),
                Some(HitTarget::Input) => app.focus = Focus::Input,
                None => {}
            }
        }
        MouseEventKind::ScrollUp => app.move_cursor_up(),
        MouseEventKind::ScrollDown => app.move_cursor_down(),
        _ => {}
    }
}
