use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use calpad::app::AppState;

pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let events = app.store.events_on(app.selected_date);

    let title = format!("Events on {}", app.selected_date.format("%B %d, %Y"));

    let mut lines = vec![
        Line::from(vec![
            Span::styled(title, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
    ];

    if events.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("No events", Style::default().fg(app.theme.muted)),
        ]));
    } else {
        for event in &events {
            lines.push(Line::from(vec![
                Span::styled("• ", Style::default().fg(app.theme.event_marker)),
                Span::raw(event.title.as_str()),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Enter", Style::default().fg(app.theme.success)),
        Span::raw(" = Add / edit events"),
    ]));

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
