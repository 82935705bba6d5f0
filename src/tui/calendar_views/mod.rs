pub mod day_list;
pub mod month;
