use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )])
}

fn entry(keys: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<18}", keys), Style::default().fg(Color::Cyan)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP)
        .hint("q/Esc close")
        .render(frame, area);

    let help_text = vec![
        section("INPUT"),
        entry("Enter", "Add the typed URL as a card"),
        entry("Tab, Down", "Move focus to the card list"),
        entry("Esc", "Back to the list (exit when empty)"),
        Line::from(""),
        section("CARDS"),
        entry("Up/Down, j/k", "Move cursor"),
        entry("Home/End, g/G", "Jump to first / last card"),
        entry("PageUp/PageDown", "Scroll a page"),
        entry("Enter, o", "Open in browser"),
        entry("Space, s", "Select / deselect (one at a time)"),
        entry("d, x", "Delete card under cursor"),
        entry("y", "Copy URL to clipboard"),
        entry("a, i, Tab", "Focus the input bar"),
        Line::from(""),
        section("GLOBAL"),
        entry("Delete", "Delete the selected card"),
        entry("Mouse click", "Press [ Open ] [ Select ] [ Delete ]"),
        entry("?", "Show this help"),
        entry("q", "Quit"),
    ];

    frame.render_widget(Paragraph::new(help_text), inner_area);
}
