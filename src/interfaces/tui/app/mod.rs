//! TUI 应用状态
//!
//! - `state`: App 结构与基础状态
//! - `hit_map`: 鼠标点击区域
//! - `navigation`: 光标与滚动
//! - `card_operations`: 卡片动作

mod card_operations;
mod hit_map;
mod navigation;
mod state;

pub use hit_map::{HitMap, HitTarget};
pub use state::{App, CurrentScreen, Focus};
