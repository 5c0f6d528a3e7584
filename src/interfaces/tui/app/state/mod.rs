//! App state definition and basic state management

use std::ops::Range;

use crate::config::UiConfig;
use crate::deck::{Card, CardId, CardListController};
use crate::interfaces::tui::view::{CardView, project_cards};

use super::hit_map::HitMap;

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    Help,
    Exiting,
}

/// 键盘焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

pub struct App {
    pub deck: CardListController,
    pub current_screen: CurrentScreen,
    pub focus: Focus,

    // 输入框
    pub input: String,

    // 列表光标（与卡片的选中状态无关）
    pub cursor: usize,
    pub scroll_offset: usize,
    /// 上一帧列表区域能容纳的卡片数
    pub last_visible_cards: usize,

    // UI state
    pub status_message: String,
    pub error_message: String,
    pub hit_map: HitMap,

    pub url_truncate_length: usize,
    pub page_scroll_step: usize,
}

impl App {
    pub fn new(deck: CardListController, ui: &UiConfig) -> App {
        App {
            deck,
            current_screen: CurrentScreen::Main,
            focus: Focus::Input,
            input: String::new(),
            cursor: 0,
            scroll_offset: 0,
            last_visible_cards: 1,
            status_message: String::new(),
            error_message: String::new(),
            hit_map: HitMap::default(),
            url_truncate_length: ui.url_truncate_length,
            page_scroll_step: ui.page_scroll_step.max(1),
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = message;
        self.status_message.clear();
    }

    pub fn clear_messages(&mut self) {
        self.status_message.clear();
        self.error_message.clear();
    }

    /// 光标所在的卡片
    pub fn focused_card(&self) -> Option<&Card> {
        self.deck.cards().get(self.cursor)
    }

    pub fn focused_id(&self) -> Option<CardId> {
        self.focused_card().map(Card::id)
    }

    /// 指定范围内卡片的视图投影
    pub fn card_views_in(&self, range: Range<usize>) -> Vec<CardView> {
        let cursor = (self.focus == Focus::List)
            .then_some(self.cursor)
            .and_then(|c| c.checked_sub(range.start));
        project_cards(&self.deck.cards()[range], cursor, self.url_truncate_length)
    }
}
