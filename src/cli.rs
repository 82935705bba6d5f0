use chrono::{Local, NaiveDate};

use calpad::{calendar::parse_iso_date, storage::EventStore};

pub const USAGE: &str = "Usage: calpad [--agenda [YYYY-MM-DD]] [--memory]";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CliMode {
    Tui { memory: bool },
    Agenda { date: NaiveDate, memory: bool },
    Help,
}

impl CliMode {
    /// Whether the session should run against a throwaway in-memory store.
    pub fn uses_memory_store(&self) -> bool {
        matches!(self, CliMode::Tui { memory: true } | CliMode::Agenda { memory: true, .. })
    }
}

pub fn parse_cli_mode(args: impl IntoIterator<Item = String>) -> Result<CliMode, String> {
    let mut memory = false;
    let mut agenda_date = None;
    let mut args = args.into_iter().peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--memory" => {
                memory = true;
            }
            "--agenda" => {
                let target_date = match args.next_if(|next| !next.starts_with("--")) {
                    Some(date_str) => parse_iso_date(&date_str)
                        .ok_or_else(|| format!("Invalid date '{}'. Use YYYY-MM-DD.", date_str))?,
                    None => Local::now().date_naive(),
                };
                agenda_date = Some(target_date);
            }
            "--help" | "-h" => return Ok(CliMode::Help),
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    if let Some(date) = agenda_date {
        Ok(CliMode::Agenda { date, memory })
    } else {
        Ok(CliMode::Tui { memory })
    }
}

pub fn format_agenda_text(date: NaiveDate, store: &EventStore) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Agenda – {}", date.format("%A, %B %d, %Y")));
    lines.push(String::new());

    let events = store.events_on(date);
    if events.is_empty() {
        lines.push("No events scheduled.".to_string());
    } else {
        for event in events {
            lines.push(format!("- {}", event.title));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use calpad::storage::{EVENTS_KEY, MemoryStore};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_start_the_tui() {
        assert_eq!(parse_cli_mode(args(&[])), Ok(CliMode::Tui { memory: false }));
    }

    #[test]
    fn memory_flag_is_recognised() {
        assert_eq!(parse_cli_mode(args(&["--memory"])), Ok(CliMode::Tui { memory: true }));
    }

    #[test]
    fn agenda_with_date() {
        let mode = parse_cli_mode(args(&["--agenda", "2024-03-05"]));
        assert_eq!(
            mode,
            Ok(CliMode::Agenda {
                date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
                memory: false,
            })
        );
    }

    #[test]
    fn agenda_without_date_uses_today() {
        let mode = parse_cli_mode(args(&["--agenda"]));
        assert_eq!(
            mode,
            Ok(CliMode::Agenda {
                date: Local::now().date_naive(),
                memory: false,
            })
        );
    }

    #[test]
    fn memory_flag_carries_into_agenda_in_either_order() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let expected = Ok(CliMode::Agenda { date, memory: true });

        let before = parse_cli_mode(args(&["--memory", "--agenda", "2024-03-05"]));
        let after = parse_cli_mode(args(&["--agenda", "2024-03-05", "--memory"]));

        assert_eq!(before, expected);
        assert_eq!(after, expected);
        assert!(before.unwrap().uses_memory_store());
    }

    #[test]
    fn agenda_without_date_before_memory_flag() {
        let mode = parse_cli_mode(args(&["--agenda", "--memory"])).unwrap();
        assert_eq!(
            mode,
            CliMode::Agenda {
                date: Local::now().date_naive(),
                memory: true,
            }
        );
    }

    #[test]
    fn plain_tui_uses_configured_store() {
        assert!(!CliMode::Tui { memory: false }.uses_memory_store());
        assert!(CliMode::Tui { memory: true }.uses_memory_store());
        assert!(!CliMode::Help.uses_memory_store());
    }

    #[test]
    fn agenda_with_bad_date_is_an_error() {
        assert!(parse_cli_mode(args(&["--agenda", "2024/03/05"])).is_err());
    }

    #[test]
    fn unknown_argument_is_an_error() {
        assert!(parse_cli_mode(args(&["--sync"])).is_err());
    }

    #[test]
    fn agenda_lists_only_that_day() {
        let blob = r#"[{"id":"1","date":"2024-03-05","title":"A"},{"id":"2","date":"2024-03-06","title":"B"}]"#;
        let store = EventStore::load(Box::new(MemoryStore::with_entry(EVENTS_KEY, blob)));

        let text = format_agenda_text(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(), &store);

        assert!(text.contains("- A"));
        assert!(!text.contains("- B"));
    }

    #[test]
    fn empty_agenda_says_so() {
        let store = EventStore::in_memory();
        let text = format_agenda_text(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(), &store);
        assert!(text.ends_with("No events scheduled."));
    }
}
