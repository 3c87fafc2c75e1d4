use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
	#[error("Failed to parse game sheet {path}: {source}")]
	BadSheet { path: String, source: serde_json::Error },

	#[error("Failed to parse roster file {path}: {source}")]
	BadRoster { path: String, source: serde_json::Error },

	#[error(transparent)]
	Io(#[from] io::Error),

	#[error(transparent)]
	Csv(#[from] csv::Error),
}

impl ExportError {
	pub fn bad_sheet(path: &Path, source: serde_json::Error) -> Self {
		ExportError::BadSheet {
			path: path.display().to_string(),
			source,
		}
	}

	pub fn bad_roster(path: &Path, source: serde_json::Error) -> Self {
		ExportError::BadRoster {
			path: path.display().to_string(),
			source,
		}
	}
}
