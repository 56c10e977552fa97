//! The calendar event store

use chrono::{NaiveDate, NaiveTime};

use crate::config;
use crate::error::ValidationError;
use crate::event::{CalendarEvent, NewEvent};
use crate::ident::ItemId;
use crate::seed;
use crate::traits::KeyValueStorage;

/// Owns the calendar events, persists them through a [`KeyValueStorage`], and serves point
/// lookups and the bounded upcoming-events projection.
///
/// Persistence follows the same best-effort policy as [`TaskStore`](crate::TaskStore):
/// failed snapshot writes are logged and swallowed, the in-memory collection stays
/// authoritative for the session.
#[derive(Debug)]
pub struct EventStore<S: KeyValueStorage> {
    storage: S,
    events: Vec<CalendarEvent>,
}

impl<S: KeyValueStorage> EventStore<S> {
    /// Load the persisted events, or seed them with the default sample events.
    ///
    /// The trust rules are the same as for [`TaskStore::load`](crate::TaskStore::load):
    /// any present, parseable snapshot wins (even an empty one), anything else seeds
    /// and persists immediately.
    pub fn load(storage: S) -> Self {
        Self::load_with_seed(storage, seed::default_events())
    }

    /// Same as [`load`](Self::load), with a custom seed collection
    pub fn load_with_seed(storage: S, seed: Vec<CalendarEvent>) -> Self {
        if let Some(raw) = storage.get(config::EVENTS_STORAGE_KEY) {
            match serde_json::from_str(&raw) {
                Ok(events) => return Self { storage, events },
                Err(err) => log::warn!("Discarding corrupt event snapshot: {}", err),
            }
        }

        let mut store = Self { storage, events: seed };
        store.persist();
        store
    }

    /// Create a new event from the add-event form input.
    ///
    /// The title is trimmed and must not be empty; `date` must be a valid `YYYY-MM-DD`
    /// date. A missing time defaults to
    /// [`DEFAULT_EVENT_TIME`](crate::config::DEFAULT_EVENT_TIME). The result is always a
    /// single-instant, non-all-day event carrying freshly assigned display metadata; it is
    /// appended, persisted, and returned.
    pub fn add(&mut self, input: NewEvent) -> Result<CalendarEvent, ValidationError> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let date = NaiveDate::parse_from_str(input.date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(input.date.clone()))?;
        let time = match &input.time {
            Some(time) => NaiveTime::parse_from_str(time.trim(), "%H:%M")
                .map_err(|_| ValidationError::InvalidTime(time.clone()))?,
            None => NaiveTime::parse_from_str(config::DEFAULT_EVENT_TIME, "%H:%M")
                .unwrap(/* the default time constant is a valid HH:MM time */),
        };

        let event = CalendarEvent::new(
            title.to_string(),
            date.and_time(time),
            non_empty(input.organization),
            non_empty(input.location),
        );
        self.events.push(event.clone());
        self.persist();
        Ok(event)
    }

    /// Permanently delete the event with this id. Unknown ids are a no-op.
    ///
    /// Any open detail view showing the removed id has to be closed by the caller; the
    /// store does not track view state.
    pub fn remove(&mut self, id: &ItemId) {
        let count_before = self.events.len();
        self.events.retain(|event| event.id() != id);
        if self.events.len() == count_before {
            log::debug!("No event {} to remove", id);
            return;
        }
        self.persist();
    }

    /// Returns the event with exactly this id
    pub fn find_by_id(&self, id: &ItemId) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| event.id() == id)
    }

    /// Returns at most `limit` events, soonest start first.
    ///
    /// A pure projection recomputed from current state on every call. Events with equal
    /// starts keep their insertion order.
    pub fn upcoming(&self, limit: usize) -> Vec<&CalendarEvent> {
        let mut events: Vec<&CalendarEvent> = self.events.iter().collect();
        events.sort_by_key(|event| event.start());
        events.truncate(limit);
        events
    }

    /// Iterates over every event, in insertion order (e.g. to feed a calendar grid)
    pub fn iter(&self) -> impl Iterator<Item = &CalendarEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Overwrite the persisted snapshot with the current collection
    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.events) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("Unable to serialize events: {}", err);
                return;
            }
        };

        if let Err(err) = self.storage.set(config::EVENTS_STORAGE_KEY, &json) {
            log::warn!("Unable to persist events: {}", err);
        }
    }
}

/// Trims an optional form field, mapping whitespace-only input to `None`
fn non_empty(field: Option<String>) -> Option<String> {
    field
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
