//! 卡片列表控制器
//!
//! 持有 `CardList`，所有操作同步执行、一次完成。
//! 失效引用（卡片已被删除）在这里静默处理，不会向外传播。

use tracing::{debug, info};

use super::action::CardAction;
use super::card::{Card, CardId};
use super::error::CardError;
use super::list::CardList;
use super::normalize::{DEFAULT_SCHEME, normalize_url_with_scheme};
use super::opener::{LinkOpener, SystemBrowser};
use crate::errors::{LinkdeckError, Result};

pub struct CardListController {
    list: CardList,
    opener: Box<dyn LinkOpener>,
    default_scheme: String,
    /// 待滚动到可见区域的卡片（由视图层取走）
    reveal: Option<CardId>,
}

impl Default for CardListController {
    fn default() -> Self {
        Self::new()
    }
}

impl CardListController {
    pub fn new() -> Self {
        Self::with_opener(Box::new(SystemBrowser))
    }

    pub fn with_opener(opener: Box<dyn LinkOpener>) -> Self {
        Self {
            list: CardList::new(),
            opener,
            default_scheme: DEFAULT_SCHEME.to_string(),
            reveal: None,
        }
    }

    /// 设置缺省协议
    pub fn default_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.default_scheme = scheme.into();
        self
    }

    /// 添加卡片
    ///
    /// 失败时列表保持不变
    pub fn add(&mut self, raw_input: &str) -> std::result::Result<Card, CardError> {
        let url = normalize_url_with_scheme(raw_input, &self.default_scheme)?;
        let card = self.list.push(Card::new(url)).clone();
        info!("Card added: {} -> {}", card.id(), card.href());
        Ok(card)
    }

    /// 在浏览器中打开卡片链接
    ///
    /// 卡片不存在时不做任何事；浏览器启动失败返回 `Browser` 错误
    pub fn open(&self, id: CardId) -> Result<()> {
        let Some(card) = self.list.get(id) else {
            debug!("{}", CardError::StaleReference(id));
            return Ok(());
        };

        self.opener
            .open(card.url())
            .map_err(|e| LinkdeckError::browser(format!("{}: {}", card.href(), e)))?;
        info!("Card opened: {}", card.href());
        Ok(())
    }

    /// 切换选中状态（独占）
    ///
    /// 返回目标卡片的新状态；卡片不存在时返回 None
    pub fn select(&mut self, id: CardId) -> Option<bool> {
        match self.list.toggle_selection(id) {
            Ok(selected) => {
                if selected {
                    self.reveal = Some(id);
                }
                debug!("Card {} selected: {}", id, selected);
                Some(selected)
            }
            Err(e) => {
                debug!("{}", e);
                None
            }
        }
    }

    /// 删除卡片，卡片不存在时为空操作
    pub fn delete(&mut self, id: CardId) -> Option<Card> {
        let removed = self.list.remove(id);
        match &removed {
            Some(card) => {
                if self.reveal == Some(id) {
                    self.reveal = None;
                }
                info!("Card deleted: {} -> {}", card.id(), card.href());
            }
            None => debug!("{}", CardError::StaleReference(id)),
        }
        removed
    }

    /// 删除当前选中的卡片，没有选中时为空操作
    pub fn delete_selected(&mut self) -> Option<Card> {
        let id = self.list.selected()?.id();
        self.delete(id)
    }

    /// 统一的动作分发入口
    pub fn dispatch(&mut self, action: CardAction) -> Result<()> {
        match action {
            CardAction::Open(id) => self.open(id)?,
            CardAction::Select(id) => {
                self.select(id);
            }
            CardAction::Delete(id) => {
                self.delete(id);
            }
        }
        Ok(())
    }

    /// 取走待显示的卡片
    pub fn take_reveal(&mut self) -> Option<CardId> {
        self.reveal.take()
    }

    pub fn cards(&self) -> &[Card] {
        self.list.cards()
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.list.get(id)
    }

    pub fn position(&self, id: CardId) -> Option<usize> {
        self.list.position(id)
    }

    pub fn selected(&self) -> Option<&Card> {
        self.list.selected()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use url::Url;

    #[derive(Default, Clone)]
    struct RecordingOpener {
        opened: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &Url) -> std::io::Result<()> {
            if self.fail {
                return Err(std::io::Error::other("no browser"));
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    fn controller() -> (CardListController, Rc<RefCell<Vec<String>>>) {
        let opener = RecordingOpener::default();
        let opened = opener.opened.clone();
        (CardListController::with_opener(Box::new(opener)), opened)
    }

    #[test]
    fn test_add_failure_leaves_list_unchanged() {
        let (mut deck, _) = controller();
        deck.add("a.com").unwrap();

        assert_eq!(deck.add("   "), Err(CardError::EmptyInput));
        assert!(matches!(deck.add("http://"), Err(CardError::InvalidUrl(_))));
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_open_hands_url_to_opener() {
        let (mut deck, opened) = controller();
        let card = deck.add("example.com/docs").unwrap();

        deck.open(card.id()).unwrap();
        assert_eq!(*opened.borrow(), vec!["https://example.com/docs".to_string()]);
    }

    #[test]
    fn test_open_stale_card_is_noop() {
        let (mut deck, opened) = controller();
        let card = deck.add("example.com").unwrap();
        deck.delete(card.id());

        assert!(deck.open(card.id()).is_ok());
        assert!(opened.borrow().is_empty());
    }

    #[test]
    fn test_open_failure_is_reported() {
        let opener = RecordingOpener {
            fail: true,
            ..Default::default()
        };
        let mut deck = CardListController::with_opener(Box::new(opener));
        let card = deck.add("example.com").unwrap();

        let err = deck.open(card.id()).unwrap_err();
        assert!(matches!(err, LinkdeckError::Browser(_)));
    }

    #[test]
    fn test_select_records_reveal_only_when_selecting() {
        let (mut deck, _) = controller();
        let card = deck.add("a.com").unwrap();

        assert_eq!(deck.select(card.id()), Some(true));
        assert_eq!(deck.take_reveal(), Some(card.id()));
        assert_eq!(deck.take_reveal(), None);

        assert_eq!(deck.select(card.id()), Some(false));
        assert_eq!(deck.take_reveal(), None);
    }

    #[test]
    fn test_select_stale_card() {
        let (mut deck, _) = controller();
        let card = deck.add("a.com").unwrap();
        deck.delete(card.id());
        assert_eq!(deck.select(card.id()), None);
    }

    #[test]
    fn test_delete_selected_without_selection() {
        let (mut deck, _) = controller();
        deck.add("a.com").unwrap();
        deck.add("b.com").unwrap();

        assert!(deck.delete_selected().is_none());
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_dispatch_routes_actions() {
        let (mut deck, opened) = controller();
        let a = deck.add("a.com").unwrap();
        let b = deck.add("b.com").unwrap();

        deck.dispatch(CardAction::Select(b.id())).unwrap();
        assert_eq!(deck.selected().map(Card::id), Some(b.id()));

        deck.dispatch(CardAction::Open(a.id())).unwrap();
        assert_eq!(*opened.borrow(), vec!["https://a.com/".to_string()]);

        deck.dispatch(CardAction::Delete(b.id())).unwrap();
        assert!(deck.selected().is_none());
        assert_eq!(deck.len(), 1);

        // 失效引用静默忽略
        deck.dispatch(CardAction::Delete(b.id())).unwrap();
        deck.dispatch(CardAction::Select(b.id())).unwrap();
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_custom_default_scheme() {
        let (deck, _) = controller();
        let mut deck = deck.default_scheme("http");
        let card = deck.add("example.com").unwrap();
        assert_eq!(card.href(), "http://example.com/");
    }
}
