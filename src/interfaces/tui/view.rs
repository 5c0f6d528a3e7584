//! 卡片视图投影
//!
//! 视图只读取模型生成的投影，不保存任何状态；每次变更后重新生成

use strum::{EnumCount, VariantArray};

use crate::deck::{ActionTag, Card, CardAction, CardId};

/// 卡片上的一个触发器
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub tag: ActionTag,
    pub label: &'static str,
    /// 仅 Select 触发器有按下状态
    pub pressed: Option<bool>,
    pub hint: String,
}

impl Trigger {
    pub fn action(&self, id: CardId) -> CardAction {
        CardAction::new(self.tag, id)
    }
}

/// 单张卡片的投影
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: CardId,
    /// 完整 URL
    pub url: String,
    /// 截断后用于显示的 URL
    pub display_url: String,
    pub selected: bool,
    /// 是否为光标所在卡片
    pub focused: bool,
    /// 按 `ActionTag` 声明顺序排列
    pub triggers: [Trigger; ActionTag::COUNT],
}

impl CardView {
    pub fn project(card: &Card, focused: bool, truncate_at: usize) -> Self {
        let url = card.href().to_string();
        let selected = card.is_selected();
        let trigger = |tag: ActionTag| Trigger {
            tag,
            label: tag.label(),
            pressed: (tag == ActionTag::Select).then_some(selected),
            hint: tag.hint(&url),
        };

        Self {
            id: card.id(),
            display_url: truncate_url(&url, truncate_at),
            triggers: std::array::from_fn(|i| trigger(ActionTag::VARIANTS[i])),
            url,
            selected,
            focused,
        }
    }
}

/// 投影整个列表
pub fn project_cards(cards: &[Card], cursor: Option<usize>, truncate_at: usize) -> Vec<CardView> {
    cards
        .iter()
        .enumerate()
        .map(|(i, card)| CardView::project(card, cursor == Some(i), truncate_at))
        .collect()
}

/// 按字符截断 URL
pub fn truncate_url(url: &str, max_chars: usize) -> String {
    if max_chars == 0 || url.chars().count() <= max_chars {
        return url.to_string();
    }
    let head: String = url.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", head)
}
