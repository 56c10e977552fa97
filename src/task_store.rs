//! The to-do list store

use crate::config;
use crate::error::ValidationError;
use crate::ident::ItemId;
use crate::seed;
use crate::task::TaskItem;
use crate::traits::KeyValueStorage;

/// Owns the to-do list, persists it through a [`KeyValueStorage`], and defines the
/// canonical display order.
///
/// All operations are synchronous and the in-memory collection is authoritative: a failed
/// snapshot write is logged and swallowed (best-effort local durability), it does not roll
/// back the mutation that triggered it.
#[derive(Debug)]
pub struct TaskStore<S: KeyValueStorage> {
    storage: S,
    tasks: Vec<TaskItem>,
}

impl<S: KeyValueStorage> TaskStore<S> {
    /// Load the persisted task list, or seed it with the default sample tasks.
    ///
    /// A present, parseable snapshot is trusted as-is, even when it holds zero tasks
    /// (a user may well have deleted everything). Only a missing or corrupt snapshot
    /// falls back to the seed, which is then persisted immediately so the next load
    /// reads it back unchanged.
    pub fn load(storage: S) -> Self {
        Self::load_with_seed(storage, seed::default_tasks())
    }

    /// Same as [`load`](Self::load), with a custom seed collection
    pub fn load_with_seed(storage: S, seed: Vec<TaskItem>) -> Self {
        if let Some(raw) = storage.get(config::TASKS_STORAGE_KEY) {
            match serde_json::from_str(&raw) {
                Ok(tasks) => return Self { storage, tasks },
                Err(err) => log::warn!("Discarding corrupt task snapshot: {}", err),
            }
        }

        let mut store = Self { storage, tasks: seed };
        store.persist();
        store
    }

    /// Create a new task from user input and put it at the head of the collection.
    ///
    /// The text is trimmed first; whitespace-only input is rejected without touching the
    /// collection or storage. On success the created task is returned, so e.g. a UI can
    /// keep its id around.
    pub fn add(&mut self, text: &str) -> Result<TaskItem, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }

        let task = TaskItem::new(text.to_string());
        self.tasks.insert(0, task.clone());
        self.persist();
        Ok(task)
    }

    /// Flip the done flag of the task with this id.
    ///
    /// Unknown ids are a no-op, so the operation is idempotent from the UI's point of view.
    pub fn toggle_done(&mut self, id: &ItemId) {
        match self.tasks.iter_mut().find(|task| task.id() == id) {
            Some(task) => {
                task.toggle_done();
                self.persist();
            }
            None => log::debug!("No task {} to toggle", id),
        }
    }

    /// Flip the starred flag of the task with this id. Unknown ids are a no-op
    pub fn toggle_star(&mut self, id: &ItemId) {
        match self.tasks.iter_mut().find(|task| task.id() == id) {
            Some(task) => {
                task.toggle_star();
                self.persist();
            }
            None => log::debug!("No task {} to toggle", id),
        }
    }

    /// Permanently delete the task with this id. Unknown ids are a no-op
    pub fn remove(&mut self, id: &ItemId) {
        let count_before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        if self.tasks.len() == count_before {
            log::debug!("No task {} to remove", id);
            return;
        }
        self.persist();
    }

    /// Returns the task with this id
    pub fn get(&self, id: &ItemId) -> Option<&TaskItem> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the tasks in display order: starred before unstarred, then not-done before
    /// done, then most recently created first.
    ///
    /// This is a pure projection recomputed from current state on every call; the stored
    /// order (newest first) is left untouched and breaks any remaining ties, so two tasks
    /// created within the same millisecond still list most-recent first.
    pub fn list(&self) -> Vec<&TaskItem> {
        let mut tasks: Vec<&TaskItem> = self.tasks.iter().collect();
        tasks.sort_by(|a, b| {
            b.starred()
                .cmp(&a.starred())
                .then_with(|| a.done().cmp(&b.done()))
                .then_with(|| b.created_at().cmp(&a.created_at()))
        });
        tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Overwrite the persisted snapshot with the current collection
    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.tasks) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("Unable to serialize tasks: {}", err);
                return;
            }
        };

        if let Err(err) = self.storage.set(config::TASKS_STORAGE_KEY, &json) {
            log::warn!("Unable to persist tasks: {}", err);
        }
    }
}
