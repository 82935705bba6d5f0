pub mod day_panel;
pub mod help;
