//! 链接卡片核心模型
//!
//! 卡片列表的内存模型与控制器，不依赖任何渲染层：
//! - `card`: 卡片实体与进程内唯一 ID
//! - `normalize`: URL 规范化与校验
//! - `list`: 有序卡片列表（独占选中）
//! - `action`: 类型化的卡片动作
//! - `controller`: 添加 / 打开 / 选中 / 删除的统一入口
//! - `opener`: 打开链接的外部协作者

mod action;
mod card;
mod controller;
mod error;
mod list;
mod normalize;
mod opener;

pub use action::{ActionTag, CardAction};
pub use card::{Card, CardId};
pub use controller::CardListController;
pub use error::{CardError, EXPECTED_URL_FORMAT};
pub use list::CardList;
pub use normalize::{DEFAULT_SCHEME, has_scheme, normalize_url_with_scheme};
pub use opener::{LinkOpener, SystemBrowser};
