use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use calpad::{
    app::AppState,
    panel::{PanelFocus, PanelState},
};

pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(date) = app.panel.date() else {
        return;
    };

    f.render_widget(Clear, area);

    let editing = matches!(app.panel.state(), PanelState::Editing(_));
    let list_focused = app.panel.focus() == Some(PanelFocus::List);
    let events = app.panel.day_events(&app.store);

    let mut lines = vec![
        Line::from(vec![Span::styled(
            format!("Events on {}", date.format("%Y-%m-%d")),
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
    ];

    if events.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("No events yet", Style::default().fg(app.theme.muted)),
        ]));
    }

    for (idx, event) in events.iter().enumerate() {
        let is_highlighted = list_focused && idx == app.panel.highlighted();
        let is_edit_target = app.panel.edit_cursor() == Some(event.id.as_str());

        let style = if is_highlighted {
            Style::default().bg(app.theme.selected_bg).fg(app.theme.text).add_modifier(Modifier::BOLD)
        } else if is_edit_target {
            Style::default().fg(app.theme.today).add_modifier(Modifier::ITALIC)
        } else {
            Style::default()
        };

        let cursor = if is_highlighted { ">" } else { " " };
        lines.push(Line::from(vec![
            Span::styled(cursor, Style::default().fg(app.theme.selected_bg)),
            Span::styled(event.title.as_str(), style),
        ]));
    }

    lines.push(Line::from(""));

    let label = if editing { "Rename: " } else { "New event: " };
    let label_style = if list_focused {
        Style::default().fg(app.theme.muted)
    } else {
        Style::default().fg(app.theme.selected_bg).add_modifier(Modifier::BOLD)
    };
    let caret = if list_focused { "" } else { "▏" };
    lines.push(Line::from(vec![
        Span::styled(label, label_style),
        Span::raw(app.panel.input()),
        Span::styled(caret, Style::default().fg(app.theme.title)),
    ]));
    lines.push(Line::from(""));

    let submit_style = if app.can_submit() {
        Style::default().fg(app.theme.success).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.muted)
    };
    let submit_label = if editing { " = Save" } else { " = Add" };

    if list_focused {
        lines.push(Line::from(vec![
            Span::styled("j/k", Style::default().fg(app.theme.title)),
            Span::raw(" = Move | "),
            Span::styled("e", Style::default().fg(app.theme.success)),
            Span::raw(" = Edit | "),
            Span::styled("x", Style::default().fg(app.theme.error)),
            Span::raw(" = Delete | "),
            Span::styled("Esc", Style::default().fg(app.theme.error)),
            Span::raw(" = Close"),
        ]));
    } else {
        let mut hint = vec![
            Span::styled("Enter", submit_style),
            Span::styled(submit_label, submit_style),
            Span::raw(" | "),
            Span::styled("Tab", Style::default().fg(app.theme.title)),
            Span::raw(" = List"),
        ];
        if editing {
            hint.push(Span::raw(" | "));
            hint.push(Span::styled("Esc", Style::default().fg(app.theme.error)));
            hint.push(Span::raw(" = Cancel edit"));
        }
        lines.push(Line::from(hint));
    }

    let block_title = if editing { " Edit Event " } else { " Day " };

    let panel = Paragraph::new(lines)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(block_title)
            .border_style(Style::default().fg(app.theme.title)))
        .alignment(Alignment::Left);

    f.render_widget(panel, area);
}
