use chrono::NaiveDate;

use crate::calendar::{Event, to_iso_date};
use crate::storage::kv::{KeyValueStore, MemoryStore, StorageError};

pub const EVENTS_KEY: &str = "calendar-events";

/// The ordered list of events plus the backend it is flushed to.
///
/// Every successful mutation rewrites the whole `calendar-events` blob before
/// returning. Reads never touch the backend.
pub struct EventStore {
    events: Vec<Event>,
    backend: Box<dyn KeyValueStore>,
}

impl EventStore {
    /// Hydrates from the backend. Missing, unreadable or malformed blobs yield
    /// an empty store.
    pub fn load(backend: Box<dyn KeyValueStore>) -> Self {
        let events = match backend.get(EVENTS_KEY) {
            Ok(Some(blob)) => parse_blob(&blob),
            Ok(None) => {
                tracing::info!("No stored events found, starting empty");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Failed to read stored events: {}", e);
                Vec::new()
            }
        };

        tracing::info!("Loaded {} events", events.len());
        Self { events, backend }
    }

    pub fn in_memory() -> Self {
        Self::load(Box::new(MemoryStore::new()))
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        let date_str = to_iso_date(date);
        self.events.iter().filter(|e| e.date == date_str).collect()
    }

    pub fn has_events_on(&self, date: NaiveDate) -> bool {
        let date_str = to_iso_date(date);
        self.events.iter().any(|e| e.date == date_str)
    }

    pub fn save(&mut self) -> Result<(), StorageError> {
        let blob = serde_json::to_string(&self.events)?;
        self.backend.set(EVENTS_KEY, &blob)?;
        tracing::debug!("Saved {} events", self.events.len());
        Ok(())
    }

    /// Appends a new event and returns its id, or `None` for a blank title.
    /// A flush error is returned after the event has been appended.
    pub fn add(&mut self, date: NaiveDate, title: &str) -> Result<Option<String>, StorageError> {
        if title.trim().is_empty() {
            return Ok(None);
        }

        let event = Event::new(date, title);
        let id = event.id.clone();
        tracing::info!("Adding event {} on {}", id, event.date);
        self.events.push(event);
        self.save()?;
        Ok(Some(id))
    }

    /// Replaces title and date of the matching event in place. Returns whether
    /// anything changed; an unchanged trimmed title is a no-op and does not
    /// write the backend.
    pub fn update(&mut self, id: &str, new_title: &str, new_date: NaiveDate) -> Result<bool, StorageError> {
        let trimmed = new_title.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let Some(event) = self.events.iter_mut().find(|e| e.id == id) else {
            tracing::debug!("Update for unknown event {} ignored", id);
            return Ok(false);
        };

        if event.trimmed_title() == trimmed {
            return Ok(false);
        }

        tracing::info!("Updating event {}", id);
        event.title = trimmed.to_string();
        event.date = to_iso_date(new_date);
        self.save()?;
        Ok(true)
    }

    pub fn remove(&mut self, id: &str) -> Result<bool, StorageError> {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        if self.events.len() == before {
            tracing::debug!("Remove for unknown event {} ignored", id);
            return Ok(false);
        }

        tracing::info!("Removed event {}", id);
        self.save()?;
        Ok(true)
    }
}

/// Parses the stored array record by record, so one bad entry does not cost
/// its siblings.
fn parse_blob(blob: &str) -> Vec<Event> {
    let records: Vec<serde_json::Value> = match serde_json::from_str(blob) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!("Stored events are malformed, starting empty: {}", e);
            return Vec::new();
        }
    };

    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Event>(record) {
            Ok(event) if event.is_well_formed() => Some(event),
            Ok(event) => {
                tracing::warn!("Dropping malformed stored event {:?}", event.id);
                None
            }
            Err(e) => {
                tracing::warn!("Dropping unreadable stored event at index {}: {}", index, e);
                None
            }
        })
        .collect()
}
