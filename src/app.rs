use chrono::{Datelike, Days, Local, NaiveDate};

use crate::calendar::{MonthCursor, WeekStart};
use crate::panel::{DayPanel, SubmitOutcome};
use crate::storage::{EventStore, StorageError};
use crate::ui::theme::Theme;

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Normal,
    Command,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveStatus {
    Idle,
    Saved,
    Error(String),
}

pub struct AppState {
    pub mode: Mode,
    pub month: MonthCursor,
    pub selected_date: NaiveDate,
    pub store: EventStore,
    pub panel: DayPanel,
    pub week_start: WeekStart,
    pub save_status: SaveStatus,
    pub command_buffer: String,
    pub show_help: bool,
    pub help_scroll: usize,
    pub theme: Theme,
}

impl AppState {
    pub fn new(store: EventStore) -> Self {
        let today = Local::now().date_naive();
        Self {
            mode: Mode::Normal,
            month: MonthCursor::containing(today),
            selected_date: today,
            store,
            panel: DayPanel::new(),
            week_start: WeekStart::default(),
            save_status: SaveStatus::Idle,
            command_buffer: String::new(),
            show_help: false,
            help_scroll: 0,
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// Moves the selection, following it with the displayed month. An open
    /// panel is re-targeted to the new day.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
        self.month = MonthCursor::containing(date);
        if self.panel.is_open() && self.panel.date() != Some(date) {
            self.panel.open_for(date);
        }
    }

    pub fn move_days(&mut self, delta: i64) {
        let moved = if delta >= 0 {
            self.selected_date.checked_add_days(Days::new(delta.unsigned_abs()))
        } else {
            self.selected_date.checked_sub_days(Days::new(delta.unsigned_abs()))
        };
        if let Some(date) = moved {
            self.select_date(date);
        }
    }

    pub fn prev_month(&mut self) {
        self.show_month(self.month.prev());
    }

    pub fn next_month(&mut self) {
        self.show_month(self.month.next());
    }

    fn show_month(&mut self, month: MonthCursor) {
        if let Some(date) = month.clamp_day(self.selected_date.day()) {
            self.select_date(date);
        }
    }

    pub fn jump_to_today(&mut self) {
        self.select_date(Local::now().date_naive());
    }

    pub fn open_panel(&mut self) {
        self.panel.open_for(self.selected_date);
    }

    pub fn open_panel_on(&mut self, date: NaiveDate) {
        self.selected_date = date;
        self.month = MonthCursor::containing(date);
        self.panel.open_for(date);
    }

    pub fn close_panel(&mut self) {
        self.panel.close();
    }

    pub fn can_submit(&self) -> bool {
        self.panel.can_submit(&self.store)
    }

    pub fn submit_panel(&mut self) {
        let result = self.panel.submit(&mut self.store);
        if let Some(outcome) = self.record(result)
            && outcome != SubmitOutcome::Ignored
        {
            self.save_status = SaveStatus::Saved;
        }
    }

    pub fn edit_highlighted(&mut self) {
        if let Some(event) = self.panel.highlighted_event(&self.store).cloned() {
            self.panel.select_for_edit(&event);
        }
    }

    pub fn delete_highlighted(&mut self) {
        let Some(id) = self.panel.highlighted_event(&self.store).map(|e| e.id.clone()) else {
            return;
        };
        let result = self.panel.delete(&id, &mut self.store);
        if let Some(true) = self.record(result) {
            self.save_status = SaveStatus::Saved;
        }
    }

    fn record<T>(&mut self, result: Result<T, StorageError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Failed to save events: {}", e);
                self.save_status = SaveStatus::Error(format!("Save failed: {}", e));
                None
            }
        }
    }
}
