//! Card operations triggered from the TUI

use super::state::{App, Focus};
use crate::deck::{CardAction, CardError, CardId};

impl App {
    /// 提交输入框内容
    ///
    /// - 空输入：保持输入框焦点，不提示
    /// - 无效 URL：提示期望格式，保留输入以便修改
    /// - 成功：清空输入并保持焦点
    pub fn submit_input(&mut self) {
        self.focus = Focus::Input;
        match self.deck.add(&self.input) {
            Ok(card) => {
                self.input.clear();
                self.cursor = self.deck.len().saturating_sub(1);
                self.adjust_scroll_offset();
                self.set_status(format!("Added {}", card.href()));
            }
            Err(CardError::EmptyInput) => {}
            Err(e) => {
                tracing::debug!("Rejected input '{}': {}", self.input, e);
                self.set_error(e.user_message());
            }
        }
    }

    /// 执行卡片动作
    pub fn apply(&mut self, action: CardAction) {
        let id = action.card_id();
        let Some(index) = self.deck.position(id) else {
            // 失效引用，静默忽略
            return;
        };
        let href = self.deck.cards()[index].href().to_string();
        tracing::debug!("Dispatching {} on {}", action.tag(), id);

        if let Err(e) = self.deck.dispatch(action) {
            self.set_error(e.format_simple());
            return;
        }

        match action {
            CardAction::Open(_) => self.set_status(format!("Opened {}", href)),
            CardAction::Select(_) => {
                if let Some(revealed) = self.deck.take_reveal() {
                    self.focus_card(revealed);
                    self.set_status(format!("Selected {}", href));
                } else {
                    self.set_status(format!("Deselected {}", href));
                }
            }
            CardAction::Delete(_) => {
                self.cursor_after_removal(index);
                self.set_status(format!("Deleted {}", href));
            }
        }
    }

    /// 对光标所在卡片执行指定动作
    pub fn apply_to_focused(&mut self, make: fn(CardId) -> CardAction) {
        if let Some(id) = self.focused_id() {
            self.apply(make(id));
        }
    }

    /// 全局快捷键：删除选中的卡片
    pub fn delete_selected(&mut self) {
        let Some(index) = self
            .deck
            .selected()
            .and_then(|card| self.deck.position(card.id()))
        else {
            return;
        };

        if let Some(card) = self.deck.delete_selected() {
            self.cursor_after_removal(index);
            self.set_status(format!("Deleted {}", card.href()));
        }
    }

    /// 复制光标所在卡片的 URL
    #[cfg(feature = "clipboard")]
    pub fn copy_focused_url(&mut self) {
        use crate::errors::LinkdeckError;

        let Some(href) = self.focused_card().map(|card| card.href().to_string()) else {
            return;
        };

        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(href.as_str())) {
            Ok(()) => self.set_status(format!("Copied: {}", href)),
            Err(e) => self.set_error(LinkdeckError::clipboard(e.to_string()).format_simple()),
        }
    }
}
