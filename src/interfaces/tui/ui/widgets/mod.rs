//! 可复用 UI 组件

mod popup;

pub use popup::{Popup, centered_rect};
