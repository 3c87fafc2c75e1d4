use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GameClockError {
	#[error("Invalid quarter: {quarter}")]
	InvalidQuarter { quarter: String },

	#[error("Invalid minutes: {minutes}, must be between 0 and 15")]
	InvalidMinutes { minutes: u8 },

	#[error("Invalid seconds: {seconds}, must be between 0 and 59")]
	InvalidSeconds { seconds: u8 },

	#[error("Failed to parse game clock format: {0}")]
	InvalidFormat(String),

	#[error("Parse error occurred for number: {source}")]
	ParseError {
		#[from]
		source: ParseIntError,
	},
}

impl GameClockError {
	pub fn invalid_quarter_error(quarter: &str) -> Self {
		GameClockError::InvalidQuarter { quarter: quarter.to_string() }
	}

	pub fn invalid_minutes_error(minutes: u8) -> Self {
		GameClockError::InvalidMinutes { minutes }
	}

	pub fn invalid_seconds_error(seconds: u8) -> Self {
		GameClockError::InvalidSeconds { seconds }
	}

	pub fn invalid_format_error(input: &str) -> Self {
		GameClockError::InvalidFormat(input.to_string())
	}
}

#[derive(Debug, Error, PartialEq)]
pub enum TeamCodeError {
	#[error("Unknown team name: {0}")]
	UnknownTeamName(String),

	#[error("Invalid team code: {0}")]
	InvalidTeamCode(String),
}

impl TeamCodeError {
	pub fn unknown_team_name(name: &str) -> Self {
		TeamCodeError::UnknownTeamName(name.to_string())
	}
}

#[derive(Debug, Error, PartialEq)]
pub enum DownError {
	#[error("Invalid down: {0}")]
	InvalidDown(String),
}
