use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub date: String,
    pub title: String,
}

impl Event {
    /// Builds a new event with a freshly generated id. The title is stored trimmed.
    pub fn new(date: NaiveDate, title: &str) -> Self {
        Self {
            id: fresh_id(),
            date: to_iso_date(date),
            title: title.trim().to_string(),
        }
    }

    pub fn trimmed_title(&self) -> &str {
        self.title.trim()
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == to_iso_date(date)
    }

    pub fn naive_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.date)
    }

    /// True when the record can be written back without breaking store invariants.
    pub fn is_well_formed(&self) -> bool {
        !self.id.is_empty() && !self.trimmed_title().is_empty() && self.naive_date().is_some()
    }
}

pub fn fresh_id() -> String {
    Uuid::new_v4().simple().to_string()
}

pub fn to_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Parses a strict, zero-padded `YYYY-MM-DD` string.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    static ISO_DATE_RE: OnceLock<Regex> = OnceLock::new();
    let pattern = ISO_DATE_RE.get_or_init(|| {
        Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("invalid iso date regex")
    });

    if !pattern.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).ok()
}
