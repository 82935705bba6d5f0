use chrono::{Datelike, Local, NaiveDate};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use calpad::{app::AppState, ui::month_view};

const CELL_WIDTH: u16 = 5;
/// Month label, blank line and weekday header sit above the first week row.
const HEADER_ROWS: u16 = 3;

pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let layout = month_view::calculate_layout(app, Local::now().date_naive());

    let mut lines = vec![
        Line::from(vec![Span::styled(
            app.month.label(),
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(
            app.week_start
                .weekday_labels()
                .iter()
                .map(|label| Span::styled(format!("{:^5}", label), Style::default().fg(app.theme.heading)))
                .collect::<Vec<_>>(),
        ),
    ];

    for week in &layout.weeks {
        let mut day_spans = Vec::new();

        for day_cell in &week.days {
            let Some(date) = day_cell.date else {
                day_spans.push(Span::raw("     "));
                continue;
            };

            let mut style = Style::default();
            if day_cell.is_selected {
                style = style.bg(app.theme.selected_bg).fg(app.theme.text).add_modifier(Modifier::BOLD);
            } else if day_cell.is_today {
                style = style.fg(app.theme.today).add_modifier(Modifier::BOLD);
            }
            if day_cell.is_today {
                style = style.add_modifier(Modifier::UNDERLINED);
            }

            day_spans.push(Span::styled(format!(" {:>2}", date.day()), style));
            if day_cell.has_events {
                day_spans.push(Span::styled("• ", style.fg(app.theme.event_marker)));
            } else {
                day_spans.push(Span::styled("  ", style));
            }
        }

        lines.push(Line::from(day_spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("hjkl", Style::default().fg(app.theme.title)),
        Span::raw(" = Move | "),
        Span::styled("{ }", Style::default().fg(app.theme.title)),
        Span::raw(" = Month | "),
        Span::styled("Enter", Style::default().fg(app.theme.success)),
        Span::raw("/click = Open day"),
    ]));

    let content = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}

/// Maps a terminal position inside the rendered grid area to its date.
pub fn date_at(app: &AppState, area: Rect, column: u16, row: u16) -> Option<NaiveDate> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let grid_top = inner.y + HEADER_ROWS;
    if column < inner.x || row < grid_top || column >= inner.x + inner.width {
        return None;
    }

    let col = ((column - inner.x) / CELL_WIDTH) as usize;
    let week = (row - grid_top) as usize;
    if col >= 7 {
        return None;
    }

    let layout = month_view::calculate_layout(app, Local::now().date_naive());
    layout.cell_at(week, col).and_then(|cell| cell.date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calpad::storage::EventStore;

    fn state_on(day: NaiveDate) -> AppState {
        let mut state = AppState::new(EventStore::in_memory());
        state.select_date(day);
        state
    }

    #[test]
    fn click_on_first_day_cell_resolves_date() {
        // 2024-03-01 is a Friday, column 5 with Sunday start.
        let app = state_on(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        let area = Rect::new(0, 0, 40, 14);

        let date = date_at(&app, area, 1 + 5 * 5 + 2, 1 + HEADER_ROWS);

        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn click_on_blank_or_header_resolves_nothing() {
        let app = state_on(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        let area = Rect::new(0, 0, 40, 14);

        assert_eq!(date_at(&app, area, 2, 1 + HEADER_ROWS), None);
        assert_eq!(date_at(&app, area, 10, 1), None);
    }
}
