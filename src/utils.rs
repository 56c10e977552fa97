//! Some utility functions

use chrono::NaiveDateTime;

use crate::event_store::EventStore;
use crate::task_store::TaskStore;
use crate::traits::KeyValueStorage;

/// Formats a date the way the upcoming-events sidebar shows it, e.g. `07 October 2019`
pub fn format_date_line(instant: NaiveDateTime) -> String {
    instant.format("%d %B %Y").to_string()
}

/// Formats a time the way the upcoming-events sidebar shows it, e.g. `7:19 AM`
pub fn format_time_line(instant: NaiveDateTime) -> String {
    instant.format("%-I:%M %p").to_string()
}

/// A debug utility that pretty-prints a task list in display order
pub fn print_task_list<S: KeyValueStorage>(store: &TaskStore<S>) {
    for task in store.list() {
        println!(
            "[{}]{} {}",
            if task.done() { "x" } else { " " },
            if task.starred() { "*" } else { " " },
            task.text()
        );
    }
    if store.is_empty() {
        println!("No tasks yet.");
    }
}

/// A debug utility that pretty-prints the next `limit` upcoming events
pub fn print_upcoming<S: KeyValueStorage>(store: &EventStore<S>, limit: usize) {
    for event in store.upcoming(limit) {
        println!(
            "{} at {}\t{}",
            format_date_line(event.start()),
            format_time_line(event.start()),
            event.title()
        );
        if let Some(organization) = event.details().organization() {
            println!("\t{}", organization);
        }
        if let Some(location) = event.details().location() {
            println!("\t{}", location);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_and_time_lines() {
        let instant: NaiveDateTime = "2019-10-07T07:19:00".parse().unwrap();
        assert_eq!(format_date_line(instant), "07 October 2019");
        assert_eq!(format_time_line(instant), "7:19 AM");

        let evening: NaiveDateTime = "2019-10-16T22:00:00".parse().unwrap();
        assert_eq!(format_time_line(evening), "10:00 PM");
    }
}
