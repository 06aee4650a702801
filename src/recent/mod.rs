//! Bounded, deduplicated, most-recent-first history of committed queries.
//!
//! The store is the only component that touches persistent storage. Read and
//! write failures are logged and swallowed; the in-memory list stays
//! authoritative for the rest of the session.

mod storage;

pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

/// Storage key holding the JSON array of recent queries.
pub const RECENT_SEARCHES_KEY: &str = "recent-searches";

/// Default number of queries remembered.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

pub struct RecentQueryStore {
	backend: Box<dyn KeyValueStore>,
	limit: usize,
	entries: Vec<String>,
}

impl std::fmt::Debug for RecentQueryStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RecentQueryStore")
			.field("limit", &self.limit)
			.field("entries", &self.entries)
			.finish_non_exhaustive()
	}
}

impl RecentQueryStore {
	/// Open the store and load any previously persisted entries.
	pub fn open(backend: Box<dyn KeyValueStore>, limit: usize) -> Self {
		let mut store = Self {
			backend,
			limit: limit.max(1),
			entries: Vec::new(),
		};
		store.entries = store.load();
		store
	}

	/// Store backed by process memory only.
	#[must_use]
	pub fn in_memory(limit: usize) -> Self {
		Self::open(Box::new(MemoryStore::new()), limit)
	}

	/// Read the persisted list. Missing keys, unreadable storage, and corrupt
	/// payloads all yield an empty list.
	#[must_use]
	pub fn load(&self) -> Vec<String> {
		let raw = match self.backend.get(RECENT_SEARCHES_KEY) {
			Ok(Some(raw)) => raw,
			Ok(None) => return Vec::new(),
			Err(err) => {
				tracing::warn!(%err, "failed to read recent searches");
				return Vec::new();
			}
		};
		match serde_json::from_str::<Vec<String>>(&raw) {
			Ok(values) => self.normalize(values),
			Err(err) => {
				tracing::warn!(%err, "discarding corrupt recent searches");
				Vec::new()
			}
		}
	}

	/// Current in-memory list, most recent first.
	#[must_use]
	pub fn entries(&self) -> &[String] {
		&self.entries
	}

	/// Record `query` at the front of the list.
	///
	/// Trimming is the caller's job; an exact duplicate moves to the front and
	/// the oldest entry is evicted once the limit is exceeded.
	pub fn add(&mut self, query: &str) -> &[String] {
		if query.is_empty() {
			return &self.entries;
		}
		self.entries.retain(|entry| entry != query);
		self.entries.insert(0, query.to_string());
		self.entries.truncate(self.limit);
		self.persist();
		&self.entries
	}

	/// Drop the exact match of `query`, if present.
	pub fn remove(&mut self, query: &str) -> &[String] {
		self.entries.retain(|entry| entry != query);
		self.persist();
		&self.entries
	}

	fn normalize(&self, values: Vec<String>) -> Vec<String> {
		let mut entries: Vec<String> = Vec::with_capacity(self.limit);
		for value in values {
			if value.is_empty() || entries.contains(&value) {
				continue;
			}
			entries.push(value);
			if entries.len() == self.limit {
				break;
			}
		}
		entries
	}

	fn persist(&self) {
		let payload = match serde_json::to_string(&self.entries) {
			Ok(payload) => payload,
			Err(err) => {
				tracing::warn!(%err, "failed to encode recent searches");
				return;
			}
		};
		if let Err(err) = self.backend.set(RECENT_SEARCHES_KEY, &payload) {
			tracing::warn!(%err, "failed to persist recent searches");
		}
	}
}
