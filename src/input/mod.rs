pub mod command_mode;
pub mod normal_mode;
pub mod panel_mode;
