use chrono::NaiveDate;

use crate::app::AppState;
use crate::calendar::{is_today, leading_blanks};

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub days: Vec<DayCell>,
}

/// One grid cell. Padding cells before day 1 and after the last day carry no date.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: Option<NaiveDate>,
    pub is_selected: bool,
    pub is_today: bool,
    pub has_events: bool,
}

impl DayCell {
    pub fn blank() -> Self {
        Self {
            date: None,
            is_selected: false,
            is_today: false,
            has_events: false,
        }
    }

    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::blank()
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn with_today(mut self, today: bool) -> Self {
        self.is_today = today;
        self
    }

    pub fn with_events(mut self, has_events: bool) -> Self {
        self.has_events = has_events;
        self
    }
}

impl MonthLayout {
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&DayCell> {
        self.weeks.get(row).and_then(|w| w.days.get(col))
    }
}

pub fn calculate_layout(state: &AppState, today: NaiveDate) -> MonthLayout {
    let year = state.month.year;
    let month = state.month.month;

    let mut weeks = Vec::new();
    let mut current_week = Week { days: Vec::new() };

    for _ in 0..leading_blanks(year, month, state.week_start) {
        current_week.days.push(DayCell::blank());
    }

    for date in state.month.days() {
        let cell = DayCell::new(date)
            .with_selected(date == state.selected_date)
            .with_today(is_today(date, today))
            .with_events(state.store.has_events_on(date));

        current_week.days.push(cell);

        if current_week.days.len() == 7 {
            weeks.push(current_week);
            current_week = Week { days: Vec::new() };
        }
    }

    if !current_week.days.is_empty() {
        while current_week.days.len() < 7 {
            current_week.days.push(DayCell::blank());
        }
        weeks.push(current_week);
    }

    MonthLayout { year, month, weeks }
}
