//! Calendar events

use chrono::NaiveDateTime;
use csscolorparser::Color;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::ident::{self, ItemId};

/// CSS class names given to events created through [`EventStore::add`](crate::EventStore::add)
const DEFAULT_EVENT_TAGS: [&str; 2] = ["fc-ev", "fc-ev--blue"];

/// The colors participant dots are drawn from
static PARTICIPANT_PALETTE: Lazy<Vec<Color>> = Lazy::new(|| {
    [
        "#111827", "#9ca3af", "#e5e7eb", "#f59e0b", "#10b981", "#3b82f6",
        "#ef4444", "#a855f7", "#22c55e", "#06b6d4", "#f97316", "#ec4899",
    ]
    .iter()
    .map(|hex| hex.parse().unwrap(/* palette entries are valid hex colors */))
    .collect()
});

/// A calendar event
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Unique within the owning store for the lifetime of the event
    id: ItemId,

    /// The user-supplied title. Never empty after a successful creation
    title: String,

    /// The start instant, as a local date-time
    start: NaiveDateTime,

    /// Optional end instant. Carried verbatim: nothing checks it against `start`,
    /// downstream rendering assumes it is not earlier
    end: Option<NaiveDateTime>,

    all_day: bool,

    /// Ordered display class names (e.g. a color category)
    tags: Vec<String>,

    /// Cosmetic metadata shown in detail views and the upcoming sidebar
    details: EventDetails,
}

impl CalendarEvent {
    /// Create a brand new single-instant event, as the add-event form does.
    ///
    /// This picks a fresh random id, the default tags, and random display metadata
    /// (attendee count, participant colors). `title` is expected to be already trimmed and
    /// non-empty; the owning store validates user input before calling this.
    pub fn new(title: String, start: NaiveDateTime, organization: Option<String>, location: Option<String>) -> Self {
        let details = EventDetails::new(
            organization,
            location,
            config::MIN_ATTENDEE_COUNT + ident::random_below(config::ATTENDEE_COUNT_SPREAD),
            random_participant_colors(),
        );
        Self {
            id: ItemId::random_with_prefix("e"),
            title,
            start,
            end: None,
            all_day: false,
            tags: DEFAULT_EVENT_TAGS.iter().map(|tag| tag.to_string()).collect(),
            details,
        }
    }

    /// Create an event with every field supplied, e.g. for seed data
    pub fn new_with_parameters(
        id: ItemId,
        title: String,
        start: NaiveDateTime,
        end: Option<NaiveDateTime>,
        all_day: bool,
        tags: Vec<String>,
        details: EventDetails,
    ) -> Self {
        Self { id, title, start, end, all_day, tags, details }
    }

    pub fn id(&self) -> &ItemId { &self.id }
    pub fn title(&self) -> &str { &self.title }
    pub fn start(&self) -> NaiveDateTime { self.start }
    pub fn end(&self) -> Option<NaiveDateTime> { self.end }
    pub fn all_day(&self) -> bool { self.all_day }
    pub fn tags(&self) -> &[String] { &self.tags }
    pub fn details(&self) -> &EventDetails { &self.details }
}

/// Cosmetic event metadata (none of it is invariant-bearing)
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventDetails {
    organization: Option<String>,
    location: Option<String>,
    attendee_count: u32,
    /// Rendered as avatar dots; callers show the first three
    participant_colors: Vec<Color>,
}

impl EventDetails {
    pub fn new(
        organization: Option<String>,
        location: Option<String>,
        attendee_count: u32,
        participant_colors: Vec<Color>,
    ) -> Self {
        Self { organization, location, attendee_count, participant_colors }
    }

    pub fn organization(&self) -> Option<&str> { self.organization.as_deref() }
    pub fn location(&self) -> Option<&str> { self.location.as_deref() }
    pub fn attendee_count(&self) -> u32 { self.attendee_count }
    pub fn participant_colors(&self) -> &[Color] { &self.participant_colors }
}

/// The input of [`EventStore::add`](crate::EventStore::add), mirroring the add-event form.
///
/// `date` is a `YYYY-MM-DD` date, `time` an optional `HH:MM` time
/// (defaults to [`DEFAULT_EVENT_TIME`](crate::config::DEFAULT_EVENT_TIME)).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub date: String,
    pub time: Option<String>,
    pub location: Option<String>,
    pub organization: Option<String>,
}

/// A run of consecutive palette colors, starting at a random offset
fn random_participant_colors() -> Vec<Color> {
    let palette = &*PARTICIPANT_PALETTE;
    let offset = ident::random_below(palette.len() as u32) as usize;
    (0..config::PARTICIPANT_COLOR_COUNT)
        .map(|i| palette[(offset + i) % palette.len()].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_start() -> NaiveDateTime {
        "2019-10-07T07:19:00".parse().unwrap()
    }

    #[test]
    fn new_event_defaults() {
        let event = CalendarEvent::new("Design Conference".to_string(), some_start(), None, None);
        assert!(event.id().as_str().starts_with("e-"));
        assert_eq!(event.all_day(), false);
        assert_eq!(event.end(), None);
        assert_eq!(event.tags(), &["fc-ev".to_string(), "fc-ev--blue".to_string()]);
    }

    #[test]
    fn new_event_metadata_is_within_bounds() {
        for _ in 0..50 {
            let event = CalendarEvent::new("Standup".to_string(), some_start(), None, None);
            let count = event.details().attendee_count();
            assert!((5..=24).contains(&count), "attendee count {} out of bounds", count);
            assert_eq!(event.details().participant_colors().len(), 3);
        }
    }

    #[test]
    fn start_serializes_as_local_iso_string() {
        let event = CalendarEvent::new("Design Conference".to_string(), some_start(), None, None);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"2019-10-07T07:19:00\""), "unexpected serialization: {}", json);
    }

    #[test]
    fn colors_serialize_as_hex_strings() {
        let details = EventDetails::new(None, None, 8, vec!["#3b82f6".parse().unwrap()]);
        let json = serde_json::to_string(&details).unwrap();
        assert!(json.contains("#3b82f6"), "unexpected serialization: {}", json);
    }
}
