//! 点击区域表
//!
//! 每帧渲染时记录各卡片及其触发器的屏幕区域，
//! 鼠标事件由同一个处理函数查表得到目标

use ratatui::layout::{Position, Rect};

use crate::deck::{CardAction, CardId};

/// 点击目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// 卡片上的按钮
    Trigger(CardAction),
    /// 卡片本身（按钮以外的区域）
    Card(CardId),
    /// 输入框
    Input,
}

#[derive(Debug, Default, Clone)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// 后注册的区域优先命中
    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if !area.is_empty() {
            self.regions.push((area, target));
        }
    }

    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }

    /// 查找指定动作的按钮区域
    pub fn area_of(&self, action: CardAction) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, target)| *target == HitTarget::Trigger(action))
            .map(|(area, _)| *area)
    }
}
