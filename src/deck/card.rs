use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use url::Url;

static NEXT_CARD_ID: AtomicU64 = AtomicU64::new(1);

/// 卡片 ID，进程内唯一，创建后不可变
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(u64);

impl CardId {
    pub(crate) fn next() -> Self {
        Self(NEXT_CARD_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card-{}", self.0)
    }
}

/// 链接卡片
///
/// `url` 在创建时完成规范化，之后只有 `selected` 会变化
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    id: CardId,
    url: Url,
    selected: bool,
}

impl Card {
    pub(crate) fn new(url: Url) -> Self {
        Self {
            id: CardId::next(),
            url,
            selected: false,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// 规范化后的完整 URL 字符串（卡片的稳定 URL 属性）
    pub fn href(&self) -> &str {
        self.url.as_str()
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}
