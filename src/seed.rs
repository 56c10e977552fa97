//! The fixed sample collections a store starts from when no snapshot exists yet
//!
//! Seeds are plain constructor functions rather than hidden globals, so tests (or an
//! embedding app) can pass their own collection to `load_with_seed` instead.

use chrono::{NaiveDateTime, Utc};
use csscolorparser::Color;

use crate::event::{CalendarEvent, EventDetails};
use crate::ident::ItemId;
use crate::task::TaskItem;

/// The default to-do list: seven sample tasks, two of them starred.
///
/// All tasks share one load-time creation stamp, so their display order within each
/// starred group falls back to this declaration order.
pub fn default_tasks() -> Vec<TaskItem> {
    let now = Utc::now().timestamp_millis();
    [
        ("t1", "Meeting with CEO", false),
        ("t2", "Pick up kids from school", true),
        ("t3", "Shopping with Brother", false),
        ("t4", "Review with HR", false),
        ("t5", "Going to Dia's School", false),
        ("t6", "Check design files", true),
        ("t7", "Update File", false),
    ]
    .iter()
    .map(|(id, text, starred)| {
        TaskItem::new_with_parameters(ItemId::from(*id), text.to_string(), false, *starred, now)
    })
    .collect()
}

/// The default calendar: four sample events spanning one month
pub fn default_events() -> Vec<CalendarEvent> {
    vec![
        CalendarEvent::new_with_parameters(
            ItemId::from("e-design"),
            "Design Conference".to_string(),
            datetime("2019-10-07T07:19:00"),
            None,
            false,
            tags("fc-ev--purple"),
            EventDetails::new(
                Some("F6D Davio Mission Suite 157".to_string()),
                Some("Meaghan".to_string()),
                15,
                colors(&["#111827", "#9ca3af", "#e5e7eb"]),
            ),
        ),
        CalendarEvent::new_with_parameters(
            ItemId::from("e-weekend"),
            "Weekend Festival".to_string(),
            datetime("2019-10-16T22:00:00"),
            None,
            false,
            tags("fc-ev--pink"),
            EventDetails::new(
                Some("8530 Delet Flats Suite 158".to_string()),
                Some("Sweden".to_string()),
                20,
                colors(&["#f59e0b", "#10b981", "#3b82f6"]),
            ),
        ),
        CalendarEvent::new_with_parameters(
            ItemId::from("e-glasto"),
            "Glastonbury Festival".to_string(),
            datetime("2019-10-20T20:00:00"),
            Some(datetime("2019-10-22T20:00:00")),
            false,
            tags("fc-ev--orange"),
            EventDetails::new(
                Some("456 Walter Road Apt. 571".to_string()),
                Some("Turks and Caicos Islands".to_string()),
                14,
                colors(&["#ef4444", "#a855f7", "#22c55e"]),
            ),
        ),
        CalendarEvent::new_with_parameters(
            ItemId::from("e-ultra"),
            "Ultra Europe 2019".to_string(),
            datetime("2019-10-25T10:00:00"),
            None,
            false,
            tags("fc-ev--blue"),
            EventDetails::new(
                Some("506 Satterfield Tunnel Apt. 983".to_string()),
                Some("San Marino".to_string()),
                25,
                colors(&["#06b6d4", "#f97316", "#3b82f6"]),
            ),
        ),
    ]
}

fn datetime(value: &str) -> NaiveDateTime {
    value.parse().unwrap(/* seed timestamps are valid ISO date-times */)
}

fn tags(variant: &str) -> Vec<String> {
    vec!["fc-ev".to_string(), variant.to_string()]
}

fn colors(hex_values: &[&str]) -> Vec<Color> {
    hex_values
        .iter()
        .map(|hex| hex.parse().unwrap(/* seed colors are valid hex colors */))
        .collect()
}
