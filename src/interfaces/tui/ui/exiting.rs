use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::{colors, popup};

/// 退出确认，提示本次会话的卡片不会保留
pub fn draw_exiting_screen(frame: &mut Frame, area: Rect, card_count: usize) {
    let inner_area = Popup::new("Quit Linkdeck", popup::EXITING)
        .theme_color(Color::Magenta)
        .margin(Margin::new(2, 1))
        .hint("y quit · n stay")
        .render(frame, area);

    let loss = match card_count {
        0 => Line::styled("The deck is empty.", Style::default().fg(Color::Gray)),
        1 => Line::styled(
            "1 card will be lost (not saved).",
            Style::default().fg(colors::WARNING),
        ),
        n => Line::styled(
            format!("{} cards will be lost (not saved).", n),
            Style::default().fg(colors::WARNING),
        ),
    };

    let text = vec![
        Line::from(""),
        Line::styled(
            "Quit and close the deck?",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        loss,
    ];

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner_area);
}
