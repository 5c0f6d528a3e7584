//! 有序卡片列表
//!
//! 插入顺序即显示顺序；任意时刻最多一张卡片处于选中状态

use super::card::{Card, CardId};
use super::error::CardError;

#[derive(Debug, Default, Clone)]
pub struct CardList {
    cards: Vec<Card>,
}

impl CardList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加到末尾
    pub fn push(&mut self, card: Card) -> &Card {
        self.cards.push(card);
        &self.cards[self.cards.len() - 1]
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id() == id)
    }

    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == id)
    }

    /// 当前选中的卡片
    pub fn selected(&self) -> Option<&Card> {
        self.cards.iter().find(|card| card.is_selected())
    }

    /// 切换选中状态，返回目标卡片的新状态
    ///
    /// 先取消其他卡片的选中，再切换目标
    pub fn toggle_selection(&mut self, id: CardId) -> Result<bool, CardError> {
        let index = self.position(id).ok_or(CardError::StaleReference(id))?;

        for (i, card) in self.cards.iter_mut().enumerate() {
            if i != index && card.is_selected() {
                card.set_selected(false);
            }
        }

        let card = &mut self.cards[index];
        let now_selected = !card.is_selected();
        card.set_selected(now_selected);
        Ok(now_selected)
    }

    /// 移除卡片，其余卡片保持原有顺序与选中状态
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let index = self.position(id)?;
        Some(self.cards.remove(index))
    }
}
