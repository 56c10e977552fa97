//! An in-memory key-value storage, mainly useful for tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StorageError;
use crate::traits::KeyValueStorage;

#[cfg(any(test, feature = "mock_storage_failures"))]
use crate::mock_behaviour::MockBehaviour;

/// A [`KeyValueStorage`] holding its data in a shared map.
///
/// Clones share the same backing map, so handing a clone to a freshly constructed store
/// simulates an application reload against the same persisted state.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    data: Arc<Mutex<HashMap<String, String>>>,

    #[cfg(any(test, feature = "mock_storage_failures"))]
    mock_behaviour: Option<Arc<Mutex<MockBehaviour>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a [`MockBehaviour`] that can make get/set calls fail on demand
    #[cfg(any(test, feature = "mock_storage_failures"))]
    pub fn with_mock_behaviour(mut self, mock_behaviour: Arc<Mutex<MockBehaviour>>) -> Self {
        self.mock_behaviour = Some(mock_behaviour);
        self
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(any(test, feature = "mock_storage_failures"))]
        {
            if let Some(mock) = &self.mock_behaviour {
                if let Err(err) = mock.lock().unwrap().can_get() {
                    log::warn!("Unable to read key {:?}: {}", key, err);
                    return None;
                }
            }
        }

        self.data.lock().unwrap().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(any(test, feature = "mock_storage_failures"))]
        {
            if let Some(mock) = &self.mock_behaviour {
                mock.lock().unwrap().can_set()?;
            }
        }

        self.data.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
