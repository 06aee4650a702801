//! String key-value backends for persisted UI state.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

/// Failures raised by a [`KeyValueStore`].
#[derive(Debug, Error)]
pub enum StorageError {
	#[error("storage I/O failed for key '{key}': {source}")]
	Io {
		key: String,
		#[source]
		source: std::io::Error,
	},
	#[error("storage key '{0}' is not a valid file name")]
	InvalidKey(String),
	#[error("storage backend is unavailable")]
	Unavailable,
}

/// Synchronous get/set/remove of a string under a key.
pub trait KeyValueStore: Send {
	fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
	fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
	fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Stores each key as `<key>.json` inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
	root: PathBuf,
}

impl FileStore {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
		let valid = !key.is_empty()
			&& key
				.chars()
				.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'));
		if !valid || key.starts_with('.') {
			return Err(StorageError::InvalidKey(key.to_string()));
		}
		Ok(self.root.join(format!("{key}.json")))
	}
}

impl KeyValueStore for FileStore {
	fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
		let path = self.path_for(key)?;
		match fs::read_to_string(&path) {
			Ok(contents) => Ok(Some(contents)),
			Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
			Err(source) => Err(StorageError::Io {
				key: key.to_string(),
				source,
			}),
		}
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
		let path = self.path_for(key)?;
		let io_error = |source| StorageError::Io {
			key: key.to_string(),
			source,
		};
		fs::create_dir_all(&self.root).map_err(io_error)?;
		fs::write(&path, value).map_err(io_error)
	}

	fn remove(&self, key: &str) -> Result<(), StorageError> {
		let path = self.path_for(key)?;
		match fs::remove_file(&path) {
			Ok(()) => Ok(()),
			Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
			Err(source) => Err(StorageError::Io {
				key: key.to_string(),
				source,
			}),
		}
	}
}

/// In-process store, used when no data directory is available and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
	entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Seed the store with an existing value.
	#[must_use]
	pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
		if let Ok(mut entries) = self.entries.lock() {
			entries.insert(key.into(), value.into());
		}
		self
	}
}

impl KeyValueStore for MemoryStore {
	fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
		let entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
		Ok(entries.get(key).cloned())
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
		let mut entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
		entries.insert(key.to_string(), value.to_string());
		Ok(())
	}

	fn remove(&self, key: &str) -> Result<(), StorageError> {
		let mut entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
		entries.remove(key);
		Ok(())
	}
}
