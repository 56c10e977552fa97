//! The storage backends shipped with this crate
//!
//! Both implement [`KeyValueStorage`](crate::traits::KeyValueStorage): [`FileStorage`]
//! for a real deployment, [`MemoryStorage`] as a substitutable fake for tests.

pub mod file;
pub use file::FileStorage;
pub mod memory;
pub use memory::MemoryStorage;
