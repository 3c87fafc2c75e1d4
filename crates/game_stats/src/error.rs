use pbp_parser::error::{GameClockError, TeamCodeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameStatsError {
	#[error("Required table is empty: {name}")]
	EmptyTable { name: &'static str },

	#[error("Team stats row not found: {label}")]
	MissingStatRow { label: &'static str },

	#[error("Malformed value in team stats row {label}: {value}")]
	BadStatRow { label: &'static str, value: String },

	#[error("Drive {index} has no start quarter and no predecessor to inherit from")]
	BadDriveQuarter { index: usize },

	#[error("Drive {index} start clock is unparsable: {source}")]
	BadDriveClock { index: usize, source: GameClockError },

	#[error(transparent)]
	TeamCode(#[from] TeamCodeError),
}

impl GameStatsError {
	pub fn empty_table(name: &'static str) -> Self {
		GameStatsError::EmptyTable { name }
	}

	pub fn missing_stat_row(label: &'static str) -> Self {
		GameStatsError::MissingStatRow { label }
	}

	pub fn bad_stat_row(label: &'static str, value: &str) -> Self {
		GameStatsError::BadStatRow {
			label,
			value: value.to_string(),
		}
	}
}
