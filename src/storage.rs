//! Browser Storage
//!
//! `localStorage` behind the [`Storage`] trait.

use todo_core::{Storage, StorageError};

use crate::error::describe;

pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
        let inner = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(describe(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))?;
        Ok(Self { inner })
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key).map_err(|e| StorageError::Unavailable(describe(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set_item(key, value).map_err(|e| StorageError::Rejected {
            key: key.to_string(),
            reason: describe(&e),
        })
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn round_trips_through_local_storage() {
        let mut storage = LocalStorage::open().unwrap();
        storage.set("todo-widget-test", "{\"tasks\":[]}").unwrap();
        assert_eq!(storage.get("todo-widget-test").unwrap().as_deref(), Some("{\"tasks\":[]}"));
        assert!(storage.get("todo-widget-missing").unwrap().is_none());
    }
}
