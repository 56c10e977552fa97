//! Fixed library configuration
//!
//! Storage keys are versioned so that an incompatible snapshot schema change can
//! migrate by bumping the suffix rather than by parsing old data.

/// The storage key the task list snapshot is persisted under
pub const TASKS_STORAGE_KEY: &str = "todos.v1";

/// The storage key the calendar event snapshot is persisted under
pub const EVENTS_STORAGE_KEY: &str = "calendar_events.v1";

/// The start time assigned to a new event when the caller supplies none
pub const DEFAULT_EVENT_TIME: &str = "09:00";

/// How many events [`upcoming`](crate::EventStore::upcoming) callers usually want
pub const DEFAULT_UPCOMING_LIMIT: usize = 6;

/// Bounds for the attendee count assigned to newly created events
pub(crate) const MIN_ATTENDEE_COUNT: u32 = 5;
pub(crate) const ATTENDEE_COUNT_SPREAD: u32 = 20;

/// How many participant colors a newly created event gets
pub(crate) const PARTICIPANT_COLOR_COUNT: usize = 3;
