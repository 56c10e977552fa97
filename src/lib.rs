//! This crate provides local-first storage for the user-editable collections of a dashboard app.
//!
//! It provides two stores: a [`TaskStore`] for a to-do list, and an [`EventStore`] for calendar events. \
//! Each store owns its collection in memory, persists it as a whole JSON snapshot through a
//! [`KeyValueStorage`](traits::KeyValueStorage) capability, and derives display projections
//! (sorted task list, upcoming events) without mutating stored state.
//!
//! On first use (no prior snapshot) a store seeds itself with the fixed sample data from the
//! [`seed`] module and persists that snapshot immediately. A present snapshot is trusted as-is,
//! even when it is an empty collection.
//!
//! Persistence is best-effort: a failed snapshot write is logged and swallowed, and the
//! in-memory collection stays authoritative for the rest of the session.

pub mod traits;

pub mod config;
pub mod error;
mod ident;
pub use ident::ItemId;
mod task;
pub use task::TaskItem;
mod event;
pub use event::{CalendarEvent, EventDetails, NewEvent};
mod task_store;
pub use task_store::TaskStore;
mod event_store;
pub use event_store::EventStore;

pub mod storage;
pub mod mock_behaviour;

pub mod seed;
pub mod utils;
