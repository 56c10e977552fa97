//! End-to-end scenarios covering both stores against a shared in-memory storage.
//!
//! Reconstructing a store over a clone of its `MemoryStorage` simulates what a browser
//! reload does to the real application: everything the store knows must come back from
//! the persisted snapshot.

use std::collections::HashSet;

use corkboard::storage::MemoryStorage;
use corkboard::{seed, EventStore, ItemId, NewEvent, TaskStore};

fn new_event(title: &str, date: &str) -> NewEvent {
    NewEvent {
        title: title.to_string(),
        date: date.to_string(),
        ..NewEvent::default()
    }
}

#[test]
fn task_store_seeds_once() {
    let storage = MemoryStorage::new();

    let store = TaskStore::load(storage.clone());
    let expected: Vec<String> = seed::default_tasks()
        .iter()
        .map(|task| task.id().to_string())
        .collect();
    let first_load: Vec<String> = store.list().iter().map(|task| task.id().to_string()).collect();
    assert_eq!(first_load.len(), expected.len());
    assert!(expected.iter().all(|id| first_load.contains(id)));

    // A reload must read the seeded snapshot back unchanged: same ids, no duplication
    let reloaded = TaskStore::load(storage);
    let second_load: Vec<String> = reloaded.list().iter().map(|task| task.id().to_string()).collect();
    assert_eq!(second_load, first_load);
}

#[test]
fn event_store_seeds_once() {
    let storage = MemoryStorage::new();

    let store = EventStore::load(storage.clone());
    assert_eq!(store.len(), seed::default_events().len());

    let reloaded = EventStore::load(storage);
    assert_eq!(reloaded.len(), store.len());
    for event in store.iter() {
        assert!(reloaded.find_by_id(event.id()).is_some());
    }
}

#[test]
fn task_edits_survive_a_reload() {
    let storage = MemoryStorage::new();

    let mut store = TaskStore::load_with_seed(storage.clone(), Vec::new());
    let kept = store.add("Write minutes").unwrap();
    let dropped = store.add("Book room").unwrap();
    store.toggle_done(kept.id());
    store.toggle_star(kept.id());
    store.remove(dropped.id());

    let reloaded = TaskStore::load_with_seed(storage, Vec::new());
    assert_eq!(reloaded.len(), 1);
    let task = reloaded.get(kept.id()).unwrap();
    assert_eq!(task.text(), "Write minutes");
    assert_eq!(task.done(), true);
    assert_eq!(task.starred(), true);
}

#[test]
fn task_ids_are_pairwise_distinct() {
    let mut store = TaskStore::load_with_seed(MemoryStorage::new(), Vec::new());
    let mut ids = HashSet::new();
    for i in 0..100 {
        let task = store.add(&format!("task {}", i)).unwrap();
        ids.insert(task.id().clone());
    }
    assert_eq!(ids.len(), 100);
}

#[test]
fn toggle_done_twice_restores_the_original_state() {
    let mut store = TaskStore::load(MemoryStorage::new());
    let target = store.list()[3].id().clone();
    let before: Vec<(ItemId, bool)> = store
        .list()
        .iter()
        .map(|task| (task.id().clone(), task.done()))
        .collect();

    store.toggle_done(&target);
    let flipped = store.get(&target).unwrap().done();
    assert_ne!(
        flipped,
        before.iter().find(|(id, _)| id == &target).unwrap().1
    );

    store.toggle_done(&target);
    let after: Vec<(ItemId, bool)> = store
        .list()
        .iter()
        .map(|task| (task.id().clone(), task.done()))
        .collect();
    assert_eq!(after, before);
}

/// Fresh store, one added task: it is the single, pristine head of the list
#[test]
fn scenario_buy_milk() {
    let mut store = TaskStore::load_with_seed(MemoryStorage::new(), Vec::new());
    store.add("Buy milk").unwrap();

    let list = store.list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].text(), "Buy milk");
    assert_eq!(list[0].done(), false);
    assert_eq!(list[0].starred(), false);
}

/// Recency orders unstarred tasks; a star dominates recency
#[test]
fn scenario_star_beats_recency() {
    let mut store = TaskStore::load_with_seed(MemoryStorage::new(), Vec::new());
    let a = store.add("A").unwrap();
    store.add("B").unwrap();

    let texts: Vec<&str> = store.list().iter().map(|task| task.text()).collect();
    assert_eq!(texts, ["B", "A"]);

    store.toggle_star(a.id());
    let texts: Vec<&str> = store.list().iter().map(|task| task.text()).collect();
    assert_eq!(texts, ["A", "B"]);
}

#[test]
fn list_order_invariant_holds_for_mixed_states() {
    let mut store = TaskStore::load_with_seed(MemoryStorage::new(), Vec::new());
    let ids: Vec<ItemId> = (0..8)
        .map(|i| store.add(&format!("task {}", i)).unwrap().id().clone())
        .collect();
    store.toggle_star(&ids[1]);
    store.toggle_star(&ids[4]);
    store.toggle_star(&ids[6]);
    store.toggle_done(&ids[2]);
    store.toggle_done(&ids[4]);
    store.toggle_done(&ids[7]);

    let list = store.list();
    // Starred before unstarred, not-done before done, then newest first
    for pair in list.windows(2) {
        let (left, right) = (pair[0], pair[1]);
        assert!(left.starred() >= right.starred(), "starred order violated");
        if left.starred() == right.starred() {
            assert!(left.done() <= right.done(), "done order violated");
            if left.done() == right.done() {
                assert!(left.created_at() >= right.created_at(), "recency order violated");
            }
        }
    }
}

/// The seeded calendar spans Oct 7-25 2019; the two soonest events open the projection
#[test]
fn scenario_upcoming_defaults() {
    let store = EventStore::load(MemoryStorage::new());

    let upcoming = store.upcoming(2);
    assert_eq!(upcoming.len(), 2);
    assert_eq!(upcoming[0].title(), "Design Conference");
    assert_eq!(upcoming[1].title(), "Weekend Festival");
}

#[test]
fn upcoming_projection_tracks_removals() {
    let storage = MemoryStorage::new();
    let mut store = EventStore::load(storage);

    let first = store.upcoming(1)[0].id().clone();
    store.remove(&first);

    let upcoming = store.upcoming(2);
    assert_eq!(upcoming[0].title(), "Weekend Festival");
    assert!(store.find_by_id(&first).is_none());

    for pair in store.upcoming(10).windows(2) {
        assert!(pair[0].start() <= pair[1].start());
    }
}

#[test]
fn rejected_input_changes_nothing() {
    let storage = MemoryStorage::new();

    let mut tasks = TaskStore::load(storage.clone());
    let task_count = tasks.len();
    assert!(tasks.add("").is_err());
    assert!(tasks.add("   ").is_err());
    assert_eq!(tasks.len(), task_count);

    let mut events = EventStore::load(storage.clone());
    let event_count = events.len();
    assert!(events.add(new_event("", "2019-10-01")).is_err());
    assert!(events.add(new_event("Board meeting", "not-a-date")).is_err());
    assert_eq!(events.len(), event_count);

    // Nothing about the rejections may have reached storage either
    let reloaded_tasks = TaskStore::load(storage.clone());
    let reloaded_events = EventStore::load(storage);
    assert_eq!(reloaded_tasks.len(), task_count);
    assert_eq!(reloaded_events.len(), event_count);
}

#[test]
fn emptied_event_store_stays_empty_across_reloads() {
    let storage = MemoryStorage::new();

    let mut store = EventStore::load(storage.clone());
    let ids: Vec<ItemId> = store.iter().map(|event| event.id().clone()).collect();
    for id in &ids {
        store.remove(id);
    }
    assert!(store.is_empty());

    let reloaded = EventStore::load(storage);
    assert!(reloaded.is_empty(), "an empty snapshot must not be re-seeded");
}

#[test]
fn added_events_survive_a_reload() {
    let storage = MemoryStorage::new();

    let mut store = EventStore::load(storage.clone());
    let created = store
        .add(NewEvent {
            title: "Retrospective".to_string(),
            date: "2019-10-30".to_string(),
            time: Some("16:30".to_string()),
            location: Some("Room 2".to_string()),
            organization: Some("ACME".to_string()),
        })
        .unwrap();

    let reloaded = EventStore::load(storage);
    let event = reloaded.find_by_id(created.id()).unwrap();
    assert_eq!(event.title(), "Retrospective");
    assert_eq!(event.start(), "2019-10-30T16:30:00".parse().unwrap());
    assert_eq!(event.details().location(), Some("Room 2"));
    assert_eq!(event.details().organization(), Some("ACME"));
    assert_eq!(
        event.details().attendee_count(),
        created.details().attendee_count()
    );
}
