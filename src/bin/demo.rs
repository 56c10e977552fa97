use std::path::Path;

use corkboard::config::DEFAULT_UPCOMING_LIMIT;
use corkboard::storage::FileStorage;
use corkboard::{EventStore, TaskStore};

const DATA_FOLDER: &str = "corkboard_data";

fn main() {
    env_logger::init();

    let folder = Path::new(DATA_FOLDER);
    let mut tasks = TaskStore::load(FileStorage::new(folder));
    let events = EventStore::load(FileStorage::new(folder));

    if let Some(text) = std::env::args().nth(1) {
        match tasks.add(&text) {
            Ok(task) => println!("Added task {}\n", task.id()),
            Err(err) => log::error!("Unable to add task: {}", err),
        }
    }

    println!("---- to-do list ----");
    corkboard::utils::print_task_list(&tasks);

    println!("\n---- you are going to ----");
    corkboard::utils::print_upcoming(&events, DEFAULT_UPCOMING_LIMIT);
}
