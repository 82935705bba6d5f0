pub mod app;
pub mod calendar;
pub mod input;
pub mod panel;
pub mod storage;
pub mod ui;

pub use app::{AppState, Mode, SaveStatus};
pub use calendar::{Event, MonthCursor, WeekStart};
pub use panel::{DayPanel, PanelState, SubmitOutcome};
pub use storage::EventStore;
