//! Persistence for the applied filter selection.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use log::{debug, warn};
use thiserror::Error;

use crate::app_dirs;
use crate::filters::FilterState;

/// File name used inside the data directory.
pub const DEFAULT_FILE_NAME: &str = "filters.json";

/// Errors raised while reading or writing a persisted selection.
#[derive(Debug, Error)]
pub enum StoreError {
	#[error("failed to access filter state at {}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("filter state at {} is not valid JSON", path.display())]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("failed to serialize filter state")]
	Serialize(#[source] serde_json::Error),
}

/// Somewhere a [`FilterState`] survives between runs.
pub trait FilterStore: Send {
	/// Read the saved selection. `Ok(None)` means nothing was saved yet.
	fn load(&self) -> Result<Option<FilterState>, StoreError>;

	fn save(&self, state: &FilterState) -> Result<(), StoreError>;

	/// Backing file, if the store has one.
	fn location(&self) -> Option<&Path> {
		None
	}
}

/// Load the saved selection, falling back to defaults when it is missing or
/// unreadable.
pub fn load_or_default(store: &dyn FilterStore) -> FilterState {
	match store.load() {
		Ok(Some(state)) => state.normalized(),
		Ok(None) => FilterState::default(),
		Err(err) => {
			warn!("ignoring saved filters: {err}");
			FilterState::default()
		}
	}
}

/// Single JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
	path: PathBuf,
}

impl JsonFileStore {
	#[must_use]
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// Store under the application's data directory.
	pub fn in_data_dir() -> anyhow::Result<Self> {
		Ok(Self::new(app_dirs::get_data_dir()?.join(DEFAULT_FILE_NAME)))
	}

	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn io_error(&self, source: io::Error) -> StoreError {
		StoreError::Io {
			path: self.path.clone(),
			source,
		}
	}
}

impl FilterStore for JsonFileStore {
	fn load(&self) -> Result<Option<FilterState>, StoreError> {
		let bytes = match fs::read(&self.path) {
			Ok(bytes) => bytes,
			Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
			Err(err) => return Err(self.io_error(err)),
		};
		let state = serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
			path: self.path.clone(),
			source,
		})?;
		debug!("loaded filters from {}", self.path.display());
		Ok(Some(state))
	}

	fn save(&self, state: &FilterState) -> Result<(), StoreError> {
		if let Some(dir) = self.path.parent()
			&& !dir.as_os_str().is_empty()
		{
			fs::create_dir_all(dir).map_err(|err| self.io_error(err))?;
		}

		let data = serde_json::to_vec_pretty(state).map_err(StoreError::Serialize)?;
		let tmp_path = self.path.with_extension("json.tmp");
		{
			let mut file = fs::File::create(&tmp_path).map_err(|err| self.io_error(err))?;
			file.write_all(&data).map_err(|err| self.io_error(err))?;
			file.sync_all().ok();
		}
		fs::rename(&tmp_path, &self.path).map_err(|err| self.io_error(err))?;

		debug!("saved filters to {}", self.path.display());
		Ok(())
	}

	fn location(&self) -> Option<&Path> {
		Some(&self.path)
	}
}

/// Process-local store for `--no-persist` runs and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
	state: Mutex<Option<FilterState>>,
}

impl MemoryStore {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Last saved selection.
	#[must_use]
	pub fn snapshot(&self) -> Option<FilterState> {
		self.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
	}
}

impl FilterStore for MemoryStore {
	fn load(&self) -> Result<Option<FilterState>, StoreError> {
		Ok(self.snapshot())
	}

	fn save(&self, state: &FilterState) -> Result<(), StoreError> {
		*self.state.lock().unwrap_or_else(PoisonError::into_inner) = Some(state.clone());
		Ok(())
	}
}
