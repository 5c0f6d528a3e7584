use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen, Focus, HitTarget};
use crate::interfaces::tui::constants::{INPUT_PLACEHOLDER, colors};

/// 输入超出输入框宽度时只显示末尾部分，返回显示的文本与其字符数
///
/// 保留一列给光标
fn visible_tail(input: &str, inner_width: u16) -> (&str, u16) {
    let room = usize::from(inner_width.saturating_sub(1));
    let typed = input.chars().count();
    let skip = typed.saturating_sub(room);
    let start = input
        .char_indices()
        .nth(skip)
        .map_or(input.len(), |(i, _)| i);
    let shown = u16::try_from(typed - skip).unwrap_or(u16::MAX);
    (&input[start..], shown)
}

pub fn draw_input_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    let active = app.focus == Focus::Input && app.current_screen == CurrentScreen::Main;
    let border_color = if !app.error_message.is_empty() && active {
        colors::ERROR
    } else if active {
        colors::WARNING
    } else {
        colors::MUTED
    };

    let (tail, shown) = visible_tail(&app.input, area.width.saturating_sub(2));
    let content = if app.input.is_empty() {
        Span::styled(
            INPUT_PLACEHOLDER,
            Style::default()
                .fg(colors::MUTED)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(tail, Style::default().fg(colors::PRIMARY))
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title("Add link")
            .title_style(Style::default().fg(border_color).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(paragraph, area);
    app.hit_map.push(area, HitTarget::Input);

    if active && area.width > 2 && area.height > 2 {
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(shown)
            .min(area.right().saturating_sub(2));
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}
