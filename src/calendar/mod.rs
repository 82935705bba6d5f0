pub mod event;
pub mod grid;

pub use event::{Event, fresh_id, parse_iso_date, to_iso_date};
pub use grid::{MonthCursor, WeekStart, days_in_month, is_today, leading_blanks};
