use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use calpad::app::AppState;

pub fn render(f: &mut Frame, app: &AppState) {
    let area = f.size();
    let help_width = 56.min(area.width);
    let help_height = 20.min(area.height);
    let x = (area.width.saturating_sub(help_width)) / 2;
    let y = (area.height.saturating_sub(help_height)) / 2;

    let help_area = ratatui::layout::Rect {
        x,
        y,
        width: help_width,
        height: help_height,
    };

    f.render_widget(Clear, help_area);

    let section = Style::default().fg(app.theme.heading);
    let help_text = vec![
        Line::from(vec![Span::styled("calpad Help", Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![Span::styled("Calendar:", section)]),
        Line::from("  h/l      - Previous/next day"),
        Line::from("  j/k      - Next/previous week"),
        Line::from("  { } p n  - Previous/next month"),
        Line::from("  t        - Jump to today"),
        Line::from("  Enter    - Open day (or click a day)"),
        Line::from(""),
        Line::from(vec![Span::styled("Day panel, input:", section)]),
        Line::from("  Enter    - Add event / save rename"),
        Line::from("  Esc      - Cancel rename"),
        Line::from("  Tab      - Focus event list"),
        Line::from(""),
        Line::from(vec![Span::styled("Day panel, list:", section)]),
        Line::from("  j/k      - Move highlight"),
        Line::from("  e/Enter  - Rename highlighted event"),
        Line::from("  x/Del    - Delete highlighted event"),
        Line::from("  Tab/i    - Back to input"),
        Line::from("  Esc/q    - Close panel"),
        Line::from(""),
        Line::from(vec![Span::styled("Commands:", section)]),
        Line::from("  :q       - Quit"),
        Line::from("  :goto    - Jump to date (:goto 2025-12-25)"),
        Line::from("  :today   - Jump to today"),
        Line::from("  :new     - Open selected day (:new Dentist)"),
        Line::from("  :theme   - Change theme (:theme paper)"),
        Line::from("  :help    - Toggle this help"),
    ];

    let visible_lines = help_height.saturating_sub(2) as usize;
    let total_lines = help_text.len();
    let max_scroll = total_lines.saturating_sub(visible_lines);
    let scroll = app.help_scroll.min(max_scroll);

    let scrolled_text: Vec<Line> = help_text
        .into_iter()
        .skip(scroll)
        .take(visible_lines)
        .collect();

    let help_paragraph = Paragraph::new(scrolled_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!(" Help (j/k to scroll, q to close) [{}/{}] ", scroll + 1, total_lines))
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, help_area);
}
