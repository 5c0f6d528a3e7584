//! Navigation and scroll logic

use super::state::{App, Focus};
use crate::deck::CardId;

impl App {
    pub fn move_cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        self.adjust_scroll_offset();
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor < self.deck.len().saturating_sub(1) {
            self.cursor += 1;
        }
        self.adjust_scroll_offset();
    }

    pub fn jump_to_top(&mut self) {
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.cursor = self.deck.len().saturating_sub(1);
        self.adjust_scroll_offset();
    }

    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.page_scroll_step);
        self.adjust_scroll_offset();
    }

    pub fn page_down(&mut self) {
        let max_index = self.deck.len().saturating_sub(1);
        self.cursor = (self.cursor + self.page_scroll_step).min(max_index);
        self.adjust_scroll_offset();
    }

    /// 将光标移到指定卡片并切换到列表焦点
    pub fn focus_card(&mut self, id: CardId) {
        if let Some(index) = self.deck.position(id) {
            self.cursor = index;
            self.focus = Focus::List;
            self.adjust_scroll_offset();
        }
    }

    /// 删除后修正光标：被删卡片在光标之前时光标前移，并保持在范围内
    pub fn cursor_after_removal(&mut self, removed_index: usize) {
        if removed_index < self.cursor {
            self.cursor -= 1;
        }
        self.cursor = self.cursor.min(self.deck.len().saturating_sub(1));
        self.adjust_scroll_offset();
    }

    /// 调整 scroll_offset 确保光标在可见窗口内
    pub fn adjust_scroll_offset(&mut self) {
        self.reveal_index(self.cursor);
    }

    /// 以最小滚动量让指定位置的卡片可见
    pub fn reveal_index(&mut self, index: usize) {
        let visible = self.last_visible_cards.max(1);
        // 在可见窗口上方，向上滚动
        if index < self.scroll_offset {
            self.scroll_offset = index;
        }
        // 在可见窗口下方，向下滚动
        if index >= self.scroll_offset + visible {
            self.scroll_offset = index + 1 - visible;
        }
        let max_offset = self.deck.len().saturating_sub(visible);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}

#[cfg(test)]
mod tests {
    use crate::config::UiConfig;
    use crate::deck::CardListController;
    use crate::interfaces::tui::app::App;

    fn app_with(count: usize, visible: usize) -> App {
        let mut deck = CardListController::new();
        for i in 0..count {
            deck.add(&format!("site{}.com", i)).unwrap();
        }
        let mut app = App::new(deck, &UiConfig::default());
        app.last_visible_cards = visible;
        app
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut app = app_with(3, 10);
        app.move_cursor_up();
        assert_eq!(app.cursor, 0);
        app.move_cursor_down();
        app.move_cursor_down();
        app.move_cursor_down();
        assert_eq!(app.cursor, 2);
        app.jump_to_top();
        assert_eq!(app.cursor, 0);
        app.jump_to_bottom();
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn test_reveal_scrolls_minimally() {
        let mut app = app_with(20, 4);
        app.reveal_index(6);
        assert_eq!(app.scroll_offset, 3);
        // 已可见，不滚动
        app.reveal_index(4);
        assert_eq!(app.scroll_offset, 3);
        app.reveal_index(1);
        assert_eq!(app.scroll_offset, 1);
    }

    #[test]
    fn test_paging() {
        let mut app = app_with(12, 4);
        app.page_down();
        assert_eq!(app.cursor, 5);
        app.page_down();
        app.page_down();
        assert_eq!(app.cursor, 11);
        assert_eq!(app.scroll_offset, 8);
        app.page_up();
        assert_eq!(app.cursor, 6);
    }

    #[test]
    fn test_cursor_after_removal() {
        let mut app = app_with(3, 10);
        app.cursor = 2;
        let first = app.deck.cards()[0].id();
        app.deck.delete(first);
        app.cursor_after_removal(0);
        assert_eq!(app.cursor, 1);

        let last = app.deck.cards()[1].id();
        app.deck.delete(last);
        app.cursor_after_removal(1);
        assert_eq!(app.cursor, 0);
    }
}
