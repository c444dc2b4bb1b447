use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
	#[error("local storage is unavailable")]
	Unavailable,
	#[error("storage write failed: {0}")]
	Write(String),
}

/// String key-value persistence.
pub trait KeyValueStore {
	fn get(&self, key: &str) -> Option<String>;
	fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
	fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
	fn storage() -> Result<web_sys::Storage, StorageError> {
		web_sys::window()
			.and_then(|w| w.local_storage().ok().flatten())
			.ok_or(StorageError::Unavailable)
	}
}

impl KeyValueStore for LocalStorage {
	fn get(&self, key: &str) -> Option<String> {
		Self::storage().ok()?.get_item(key).ok().flatten()
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
		Self::storage()?
			.set_item(key, value)
			.map_err(|e| StorageError::Write(format!("{e:?}")))
	}

	fn remove(&self, key: &str) -> Result<(), StorageError> {
		Self::storage()?
			.remove_item(key)
			.map_err(|e| StorageError::Write(format!("{e:?}")))
	}
}

#[cfg(test)]
pub use memory::MemoryStore;

#[cfg(test)]
mod memory {
	use std::cell::RefCell;
	use std::collections::HashMap;
	use std::rc::Rc;

	use super::{KeyValueStore, StorageError};

	/// Shared in-memory map; clones see the same entries, like two page loads.
	#[derive(Clone, Default)]
	pub struct MemoryStore(Rc<RefCell<HashMap<String, String>>>);

	impl KeyValueStore for MemoryStore {
		fn get(&self, key: &str) -> Option<String> {
			self.0.borrow().get(key).cloned()
		}

		fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
			self.0.borrow_mut().insert(key.into(), value.into());
			Ok(())
		}

		fn remove(&self, key: &str) -> Result<(), StorageError> {
			self.0.borrow_mut().remove(key);
			Ok(())
		}
	}
}
