use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, Focus, HitMap, HitTarget};
use crate::interfaces::tui::constants::{CARD_HEIGHT, TRIGGER_INDENT, colors};
use crate::interfaces::tui::view::{CardView, Trigger};

pub fn draw_card_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let total = app.deck.len();
    let mut title = format!("Cards ({})", total);
    if app.deck.selected().is_some() {
        title.push_str(" | 1 selected");
    }

    let border_color = if app.focus == Focus::List {
        colors::PRIMARY
    } else {
        colors::MUTED
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(title)
        .title_style(
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if total == 0 {
        let empty_text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "No cards yet",
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Type a URL above and press [Enter] to add your first link",
                Style::default().fg(colors::MUTED),
            )]),
        ];
        frame.render_widget(
            Paragraph::new(empty_text).alignment(Alignment::Center),
            inner,
        );
        return;
    }

    // 可见窗口内能容纳的卡片数
    let capacity = ((inner.height / CARD_HEIGHT) as usize).max(1);
    app.last_visible_cards = capacity;

    let offset = app.scroll_offset.min(total.saturating_sub(capacity));
    app.scroll_offset = offset;
    let end = (offset + capacity).min(total);

    // 虚拟渲染：只投影并渲染可见的卡片
    let views = app.card_views_in(offset..end);
    for (slot, view) in views.iter().enumerate() {
        let y = inner.y + slot as u16 * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(inner.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let card_area = Rect::new(inner.x, y, inner.width, height);
        draw_card(frame, view, card_area, &mut app.hit_map);
    }
}

/// 渲染单张卡片并登记点击区域
fn draw_card(frame: &mut Frame, view: &CardView, area: Rect, hit_map: &mut HitMap) {
    hit_map.push(area, HitTarget::Card(view.id));

    let cursor = if view.focused { "▶ " } else { "  " };
    let marker = if view.selected { "● " } else { "  " };
    let url_style = if view.selected {
        Style::default()
            .fg(colors::SUCCESS)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::LINK)
    };

    let url_line = Line::from(vec![
        Span::styled(cursor, Style::default().fg(colors::PRIMARY)),
        Span::styled(marker, Style::default().fg(colors::SUCCESS)),
        Span::styled(view.display_url.as_str(), url_style),
    ]);

    let mut trigger_spans = vec![Span::raw(" ".repeat(TRIGGER_INDENT as usize))];
    let mut x = area.x + TRIGGER_INDENT;
    for (i, trigger) in view.triggers.iter().enumerate() {
        if i > 0 {
            trigger_spans.push(Span::raw(" "));
            x += 1;
        }
        let text = format!("[ {} ]", trigger.label);
        let width = text.chars().count() as u16;
        if area.height > 1 && x < area.right() {
            let visible_width = width.min(area.right() - x);
            hit_map.push(
                Rect::new(x, area.y + 1, visible_width, 1),
                HitTarget::Trigger(trigger.action(view.id)),
            );
        }
        trigger_spans.push(Span::styled(text, trigger_style(trigger)));
        x = x.saturating_add(width);
    }

    let lines = vec![url_line, Line::from(trigger_spans)];
    let style = if view.focused {
        Style::default().bg(Color::Black)
    } else {
        Style::default()
    };
    frame.render_widget(Paragraph::new(lines).style(style), area);
}

fn trigger_style(trigger: &Trigger) -> Style {
    use crate::deck::ActionTag;

    match (trigger.tag, trigger.pressed) {
        (ActionTag::Select, Some(true)) => Style::default()
            .fg(Color::Black)
            .bg(colors::SUCCESS)
            .add_modifier(Modifier::BOLD),
        (ActionTag::Select, _) => Style::default().fg(colors::SUCCESS),
        (ActionTag::Open, _) => Style::default().fg(colors::PRIMARY),
        (ActionTag::Delete, _) => Style::default().fg(colors::ERROR),
    }
}
