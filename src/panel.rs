//! The day panel: the list of one day's events plus the input line used to add
//! or rename them.
//!
//! The panel is either closed, composing a new event, or editing an existing
//! one. Which of the last two applies is decided by the edit cursor alone.

use chrono::NaiveDate;

use crate::calendar::Event;
use crate::storage::{EventStore, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    Input,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState<'a> {
    Closed,
    Composing,
    Editing(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Ignored,
    Added(String),
    Updated(String),
}

#[derive(Debug, Clone, Default)]
pub struct DayPanel {
    session: Option<PanelSession>,
}

#[derive(Debug, Clone)]
struct PanelSession {
    date: NaiveDate,
    input: String,
    edit_cursor: Option<String>,
    focus: PanelFocus,
    highlighted: usize,
}

impl PanelSession {
    fn reset_input(&mut self) {
        self.input.clear();
        self.edit_cursor = None;
        self.focus = PanelFocus::Input;
    }
}

impl DayPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PanelState<'_> {
        match &self.session {
            None => PanelState::Closed,
            Some(PanelSession { edit_cursor: None, .. }) => PanelState::Composing,
            Some(PanelSession { edit_cursor: Some(id), .. }) => PanelState::Editing(id),
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.session.as_ref().map(|s| s.date)
    }

    pub fn input(&self) -> &str {
        self.session.as_ref().map(|s| s.input.as_str()).unwrap_or("")
    }

    pub fn edit_cursor(&self) -> Option<&str> {
        self.session.as_ref().and_then(|s| s.edit_cursor.as_deref())
    }

    pub fn focus(&self) -> Option<PanelFocus> {
        self.session.as_ref().map(|s| s.focus)
    }

    pub fn highlighted(&self) -> usize {
        self.session.as_ref().map(|s| s.highlighted).unwrap_or(0)
    }

    /// Opens (or re-targets) the panel on `date` with an empty draft.
    pub fn open_for(&mut self, date: NaiveDate) {
        tracing::debug!("Panel opened for {}", date);
        self.session = Some(PanelSession {
            date,
            input: String::new(),
            edit_cursor: None,
            focus: PanelFocus::Input,
            highlighted: 0,
        });
    }

    pub fn close(&mut self) {
        if let Some(session) = self.session.take()
            && !session.input.trim().is_empty()
        {
            tracing::debug!("Panel closed, discarding unsaved input");
        }
    }

    pub fn select_for_edit(&mut self, event: &Event) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        tracing::debug!("Editing event {}", event.id);
        session.edit_cursor = Some(event.id.clone());
        session.input = event.title.clone();
        session.focus = PanelFocus::Input;
    }

    pub fn cancel_edit(&mut self) {
        if let Some(session) = self.session.as_mut()
            && session.edit_cursor.is_some()
        {
            session.reset_input();
        }
    }

    /// Escape: leaves edit mode, does nothing while composing.
    pub fn escape(&mut self) {
        self.cancel_edit();
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(session) = self.session.as_mut() {
            session.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.input.pop();
        }
    }

    pub fn set_input(&mut self, text: &str) {
        if let Some(session) = self.session.as_mut() {
            session.input = text.to_string();
        }
    }

    /// Whether Enter would change anything: the trimmed draft is non-empty and,
    /// when editing, differs from the target's current trimmed title.
    pub fn can_submit(&self, store: &EventStore) -> bool {
        let Some(session) = &self.session else {
            return false;
        };
        let draft = session.input.trim();
        if draft.is_empty() {
            return false;
        }
        match &session.edit_cursor {
            None => true,
            Some(id) => store
                .get(id)
                .is_some_and(|target| target.trimmed_title() != draft),
        }
    }

    pub fn submit(&mut self, store: &mut EventStore) -> Result<SubmitOutcome, StorageError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(SubmitOutcome::Ignored);
        };
        let draft = session.input.trim().to_string();
        if draft.is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }

        match session.edit_cursor.clone() {
            None => {
                // A failed flush still leaves the event in the store, so the
                // draft is spent either way.
                let added = store.add(session.date, &draft);
                session.reset_input();
                Ok(added?.map_or(SubmitOutcome::Ignored, SubmitOutcome::Added))
            }
            Some(id) => {
                let Some(target) = store.get(&id) else {
                    tracing::debug!("Edit target {} no longer exists", id);
                    session.reset_input();
                    return Ok(SubmitOutcome::Ignored);
                };
                if target.trimmed_title() == draft {
                    return Ok(SubmitOutcome::Ignored);
                }
                let updated = store.update(&id, &draft, session.date);
                session.reset_input();
                updated?;
                Ok(SubmitOutcome::Updated(id))
            }
        }
    }

    pub fn delete(&mut self, id: &str, store: &mut EventStore) -> Result<bool, StorageError> {
        let removed = store.remove(id);
        if let Some(session) = self.session.as_mut() {
            if session.edit_cursor.as_deref() == Some(id) {
                session.reset_input();
            }
            let remaining = store.events_on(session.date).len();
            session.highlighted = session.highlighted.min(remaining.saturating_sub(1));
        }
        removed
    }

    pub fn focus_input(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.focus = PanelFocus::Input;
        }
    }

    pub fn focus_list(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.focus = PanelFocus::List;
        }
    }

    pub fn day_events<'a>(&self, store: &'a EventStore) -> Vec<&'a Event> {
        self.date().map(|d| store.events_on(d)).unwrap_or_default()
    }

    pub fn highlighted_event<'a>(&self, store: &'a EventStore) -> Option<&'a Event> {
        self.day_events(store).get(self.highlighted()).copied()
    }

    pub fn move_highlight_down(&mut self, store: &EventStore) {
        let count = self.day_events(store).len();
        if let Some(session) = self.session.as_mut()
            && count > 0
            && session.highlighted < count - 1
        {
            session.highlighted += 1;
        }
    }

    pub fn move_highlight_up(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.highlighted = session.highlighted.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::MockKeyValueStore;
    use crate::storage::{EVENTS_KEY, MemoryStore};
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn store_with_dentist() -> EventStore {
        let blob = r#"[{"id":"1","date":"2024-03-05","title":"Dentist"}]"#;
        EventStore::load(Box::new(MemoryStore::with_entry(EVENTS_KEY, blob)))
    }

    /// Backend that serves `blob` on read and rejects every write.
    fn store_with_failing_writes(blob: Option<&str>) -> EventStore {
        let blob = blob.map(str::to_string);
        let mut backend = MockKeyValueStore::new();
        backend.expect_get().returning(move |_| Ok(blob.clone()));
        backend
            .expect_set()
            .returning(|_, _| Err(StorageError::Io(std::io::Error::other("read-only"))));
        EventStore::load(Box::new(backend))
    }

    fn type_text(panel: &mut DayPanel, text: &str) {
        for c in text.chars() {
            panel.push_char(c);
        }
    }

    #[test]
    fn new_panel_is_closed() {
        let panel = DayPanel::new();
        assert_eq!(panel.state(), PanelState::Closed);
        assert!(!panel.is_open());
    }

    #[test]
    fn open_for_starts_composing_with_empty_input() {
        let mut panel = DayPanel::new();
        panel.open_for(date(2024, 3, 5));

        assert_eq!(panel.state(), PanelState::Composing);
        assert_eq!(panel.input(), "");
        assert_eq!(panel.focus(), Some(PanelFocus::Input));
    }

    #[test]
    fn reopening_on_new_date_clears_edit_state() {
        let store = store_with_dentist();
        let mut panel = DayPanel::new();
        panel.open_for(date(2024, 3, 5));
        panel.select_for_edit(store.get("1").unwrap());

        panel.open_for(date(2024, 3, 6));

        assert_eq!(panel.state(), PanelState::Composing);
        assert_eq!(panel.input(), "");
        assert_eq!(panel.date(), Some(date(2024, 3, 6)));
    }

    #[test]
    fn empty_submit_is_disabled_and_changes_nothing() {
        let mut store = EventStore::in_memory();
        let mut panel = DayPanel::new();
        panel.open_for(date(2024, 3, 5));

        assert!(!panel.can_submit(&store));
        assert_eq!(panel.submit(&mut store).unwrap(), SubmitOutcome::Ignored);
        assert!(store.is_empty());
        assert_eq!(panel.state(), PanelState::Composing);
    }

    #[test]
    fn whitespace_submit_is_disabled() {
        let mut store = EventStore::in_memory();
        let mut panel = DayPanel::new();
        panel.open_for(date(2024, 3, 5));
        type_text(&mut panel, "   ");

        assert!(!panel.can_submit(&store));
        assert_eq!(panel.submit(&mut store).unwrap(), SubmitOutcome::Ignored);
        assert_eq!(panel.input(), "   ");
    }

    #[test]
    fn submit_while_composing_adds_event_and_stays_composing() {
        let mut store = EventStore::in_memory();
        let mut panel = DayPanel::new();
        panel.open_for(date(2024, 3, 5));
        type_text(&mut panel, "Dentist");

        assert!(panel.can_submit(&store));
        let SubmitOutcome::Added(id) = panel.submit(&mut store).unwrap() else {
            panic!("expected an added event");
        };

        assert_eq!(store.len(), 1);
        let added = store.get(&id).unwrap();
        assert_eq!(added.date, "2024-03-05");
        assert_eq!(added.title, "Dentist");
        assert_eq!(panel.state(), PanelState::Composing);
        assert_eq!(panel.input(), "");
    }

    #[test]
    fn editing_flow_enables_submit_only_after_change() {
        let mut store = store_with_dentist();
        let mut panel = DayPanel::new();
        panel.open_for(date(2024, 3, 5));

        panel.select_for_edit(store.get("1").unwrap());
        assert_eq!(panel.state(), PanelState::Editing("1"));
        assert_eq!(panel.input(), "Dentist");
        assert!(!panel.can_submit(&store));
        assert_eq!(panel.submit(&mut store).unwrap(), SubmitOutcome::Ignored);
        assert_eq!(panel.state(), PanelState::Editing("1"));

        panel.set_input("Dentist 3pm");
        assert!(panel.can_submit(&store));
        assert_eq!(
            panel.submit(&mut store).unwrap(),
            SubmitOutcome::Updated("1".to_string())
        );

        let updated = store.get("1").unwrap();
        assert_eq!(updated.title, "Dentist 3pm");
        assert_eq!(updated.date, "2024-03-05");
        assert_eq!(store.len(), 1);
        assert_eq!(panel.state(), PanelState::Composing);
        assert_eq!(panel.input(), "");
    }

    #[test]
    fn padded_unchanged_title_is_still_disabled() {
        let store = store_with_dentist();
        let mut panel = DayPanel::new();
        panel.open_for(date(2024, 3, 5));
        panel.select_for_edit(store.get("1").unwrap());

        panel.set_input("  Dentist ");

        assert!(!panel.can_submit(&store));
    }

    #[test]
    fn cancel_edit_returns_to_composing() {
        let store = store_with_dentist();
        let mut panel = DayPanel::new();
        panel.open_for(date(2024, 3, 5));
        panel.select_for_edit(store.get("1").unwrap());

        panel.cancel_edit();

        assert_eq!(panel.state(), PanelState::Composing);
        assert_eq!(panel.input(), "");
    }

    #[test]
    fn escape_while_composing_keeps_draft() {
        let mut panel = DayPanel::new();
        panel.open_for(date(2024, 3, 5));
        type_text(&mut panel, "Gym");

        panel.escape();

        assert_eq!(panel.state(), PanelState::Composing);
        assert_eq!(panel.input(), "Gym");
    }

    #[test]
    fn deleting_edited_event_returns_to_composing() {
        let mut store = store_with_dentist();
        let mut panel = DayPanel::new();
        panel.open_for(date(2024, 3, 5));
        panel.select_for_edit(store.get("1").unwrap());
        panel.set_input("Dentist 3pm");

        assert!(panel.delete("1", &mut store).unwrap());

        assert_eq!(panel.state(), PanelState::Composing);
        assert_eq!(panel.input(), "");
        assert!(store.is_empty());
    }

    #[test]
    fn deleting_other_event_keeps_edit_state() {
        let mut store = store_with_dentist();
        let mut panel = DayPanel::new();
        panel.open_for(date(2024, 3, 5));
        let other = store.add(date(2024, 3, 5), "Gym").unwrap().unwrap();
        panel.select_for_edit(store.get("1").unwrap());

        panel.delete(&other, &mut store).unwrap();

        assert_eq!(panel.state(), PanelState::Editing("1"));
        assert_eq!(panel.input(), "Dentist");
    }

    #[test]
    fn submit_after_target_vanished_drops_cursor() {
        let mut store = store_with_dentist();
        let mut panel = DayPanel::new();
        panel.open_for(date(2024, 3, 5));
        panel.select_for_edit(store.get("1").unwrap());
        panel.set_input("Renamed");
        store.remove("1").unwrap();

        assert!(!panel.can_submit(&store));
        assert_eq!(panel.submit(&mut store).unwrap(), SubmitOutcome::Ignored);
        assert_eq!(panel.state(), PanelState::Composing);
        assert!(store.is_empty());
    }

    #[test]
    fn close_discards_draft() {
        let mut store = EventStore::in_memory();
        let mut panel = DayPanel::new();
        panel.open_for(date(2024, 3, 5));
        type_text(&mut panel, "Unsaved");

        panel.close();

        assert_eq!(panel.state(), PanelState::Closed);
        assert_eq!(panel.input(), "");
        assert_eq!(panel.submit(&mut store).unwrap(), SubmitOutcome::Ignored);
        assert!(store.is_empty());
    }

    #[test]
    fn highlight_is_clamped_to_day_events() {
        let mut store = EventStore::in_memory();
        let day = date(2024, 3, 5);
        store.add(day, "A").unwrap();
        store.add(day, "B").unwrap();
        store.add(date(2024, 3, 6), "Elsewhere").unwrap();
        let mut panel = DayPanel::new();
        panel.open_for(day);

        panel.move_highlight_down(&store);
        panel.move_highlight_down(&store);
        assert_eq!(panel.highlighted(), 1);
        assert_eq!(panel.highlighted_event(&store).map(|e| e.title.as_str()), Some("B"));

        let id = panel.highlighted_event(&store).unwrap().id.clone();
        panel.delete(&id, &mut store).unwrap();
        assert_eq!(panel.highlighted(), 0);
    }

    #[test]
    fn failed_flush_on_add_spends_draft_so_retry_cannot_duplicate() {
        let mut store = store_with_failing_writes(None);
        let mut panel = DayPanel::new();
        panel.open_for(date(2024, 3, 5));
        type_text(&mut panel, "Dentist");

        assert!(panel.submit(&mut store).is_err());
        assert_eq!(store.len(), 1);
        assert_eq!(panel.input(), "");
        assert_eq!(panel.state(), PanelState::Composing);
        assert!(!panel.can_submit(&store));

        assert_eq!(panel.submit(&mut store).unwrap(), SubmitOutcome::Ignored);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn failed_flush_on_edit_still_leaves_edit_mode() {
        let blob = r#"[{"id":"1","date":"2024-03-05","title":"Dentist"}]"#;
        let mut store = store_with_failing_writes(Some(blob));
        let mut panel = DayPanel::new();
        panel.open_for(date(2024, 3, 5));
        panel.select_for_edit(store.get("1").unwrap());
        panel.set_input("Dentist 3pm");

        assert!(panel.submit(&mut store).is_err());

        assert_eq!(store.get("1").unwrap().title, "Dentist 3pm");
        assert_eq!(panel.state(), PanelState::Composing);
        assert_eq!(panel.input(), "");
    }

    #[test]
    fn failed_flush_on_delete_still_resets_edit_state() {
        let blob = r#"[{"id":"1","date":"2024-03-05","title":"Dentist"}]"#;
        let mut store = store_with_failing_writes(Some(blob));
        let mut panel = DayPanel::new();
        panel.open_for(date(2024, 3, 5));
        panel.select_for_edit(store.get("1").unwrap());

        assert!(panel.delete("1", &mut store).is_err());

        assert!(store.is_empty());
        assert_eq!(panel.state(), PanelState::Composing);
        assert_eq!(panel.input(), "");
        assert_eq!(panel.highlighted(), 0);
    }
}
