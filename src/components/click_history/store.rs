use log::{info, warn};

use super::storage::{KeyValueStore, LocalStorage};

/// History persisted in the browser.
pub type ClickHistory = HistoryStore<LocalStorage>;

/// Ordered log of visited labels, mirrored into a key-value store as a JSON array.
///
/// Entries are never deduplicated. Every mutation rewrites the persisted value
/// synchronously, so a navigation right after `append` or `clear` sees it.
#[derive(Clone, Debug)]
pub struct HistoryStore<S> {
	storage: S,
	key: String,
	entries: Vec<String>,
}

impl<S: KeyValueStore> HistoryStore<S> {
	pub fn load(storage: S, key: impl Into<String>) -> Self {
		let key = key.into();
		let entries = match storage.get(&key) {
			None => Vec::new(),
			Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
				warn!("ignoring malformed click history under {key:?}: {e}");
				Vec::new()
			}),
		};
		Self {
			storage,
			key,
			entries,
		}
	}

	pub fn entries(&self) -> &[String] {
		&self.entries
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn append(&mut self, text: impl Into<String>) {
		self.entries.push(text.into());
		self.persist();
	}

	pub fn clear(&mut self) {
		self.entries.clear();
		if let Err(e) = self.storage.remove(&self.key) {
			warn!("failed to clear click history: {e}");
		}
	}

	/// Seeds an empty history with the query of a valid search. Returns whether it appended.
	pub fn prime_if_first_visit(&mut self, query: &str, render_valid: bool) -> bool {
		if !render_valid || !self.is_empty() {
			return false;
		}
		info!("starting click history with {query:?}");
		self.append(query);
		true
	}

	fn persist(&self) {
		let result = serde_json::to_string(&self.entries)
			.map_err(|e| e.to_string())
			.and_then(|raw| self.storage.set(&self.key, &raw).map_err(|e| e.to_string()));
		if let Err(e) = result {
			warn!("failed to persist click history: {e}");
		}
	}
}
