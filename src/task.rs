//! To-do list items

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::ident::ItemId;

/// A to-do list item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    /// Unique within the owning store for the lifetime of the item
    id: ItemId,

    /// The user-supplied label. Never empty after a successful creation
    text: String,

    /// Whether the task has been checked off
    done: bool,

    /// Whether the user pinned this task to the top of the list
    starred: bool,

    /// Creation time, in milliseconds since the Unix epoch.
    /// Used as the recency tiebreaker of the display order
    created_at: i64,
}

impl TaskItem {
    /// Create a brand new task with a fresh random id.
    ///
    /// `text` is expected to be already trimmed and non-empty; the owning store validates
    /// user input before calling this.
    pub fn new(text: String) -> Self {
        Self {
            id: ItemId::random(),
            text,
            done: false,
            starred: false,
            created_at: Utc::now().timestamp_millis(),
        }
    }

    /// Create a task with every field supplied, e.g. for seed data
    pub fn new_with_parameters(id: ItemId, text: String, done: bool, starred: bool, created_at: i64) -> Self {
        Self { id, text, done, starred, created_at }
    }

    pub fn id(&self) -> &ItemId { &self.id }
    pub fn text(&self) -> &str { &self.text }
    pub fn done(&self) -> bool { self.done }
    pub fn starred(&self) -> bool { self.starred }
    pub fn created_at(&self) -> i64 { self.created_at }

    /// Flip the done flag. Every other field is left untouched
    pub fn toggle_done(&mut self) {
        self.done = !self.done;
    }

    /// Flip the starred flag. Every other field is left untouched
    pub fn toggle_star(&mut self) {
        self.starred = !self.starred;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_defaults() {
        let task = TaskItem::new("Buy milk".to_string());
        assert_eq!(task.text(), "Buy milk");
        assert_eq!(task.done(), false);
        assert_eq!(task.starred(), false);
    }

    #[test]
    fn toggles_are_involutions() {
        let mut task = TaskItem::new("Buy milk".to_string());
        let before = task.clone();

        task.toggle_done();
        assert_eq!(task.done(), true);
        task.toggle_done();
        assert_eq!(task, before);

        task.toggle_star();
        assert_eq!(task.starred(), true);
        task.toggle_star();
        assert_eq!(task, before);
    }
}
