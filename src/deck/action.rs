//! 卡片动作
//!
//! 每张卡片暴露 open / select / delete 三个触发器，
//! 由同一个处理入口按动作类型分发

use strum::{AsRefStr, EnumCount, VariantArray};

use super::card::CardId;

/// 触发器的稳定动作标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumCount, VariantArray)]
#[strum(serialize_all = "lowercase")]
pub enum ActionTag {
    Open,
    Select,
    Delete,
}

impl ActionTag {
    /// 按钮文本
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Select => "Select",
            Self::Delete => "Delete",
        }
    }

    /// 按钮说明
    pub fn hint(self, url: &str) -> String {
        match self {
            Self::Open => format!("Open {} in your browser", url),
            Self::Select => "Select this card".to_string(),
            Self::Delete => "Delete this card".to_string(),
        }
    }
}

impl std::fmt::Display for ActionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// 作用于单张卡片的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Open(CardId),
    Select(CardId),
    Delete(CardId),
}

impl CardAction {
    pub fn new(tag: ActionTag, id: CardId) -> Self {
        match tag {
            ActionTag::Open => Self::Open(id),
            ActionTag::Select => Self::Select(id),
            ActionTag::Delete => Self::Delete(id),
        }
    }

    pub fn card_id(&self) -> CardId {
        match self {
            Self::Open(id) | Self::Select(id) | Self::Delete(id) => *id,
        }
    }

    pub fn tag(&self) -> ActionTag {
        match self {
            Self::Open(_) => ActionTag::Open,
            Self::Select(_) => ActionTag::Select,
            Self::Delete(_) => ActionTag::Delete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_strings() {
        let tags: Vec<String> = ActionTag::VARIANTS.iter().map(|t| t.to_string()).collect();
        assert_eq!(tags, vec!["open", "select", "delete"]);
        assert_eq!(ActionTag::COUNT, 3);
    }

    #[test]
    fn test_tag_round_trip() {
        let id = CardId::next();
        for &tag in ActionTag::VARIANTS {
            let action = CardAction::new(tag, id);
            assert_eq!(action.tag(), tag);
            assert_eq!(action.card_id(), id);
        }
    }
}
