use crate::error::GameClockError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quarter {
	First,
	Second,
	Third,
	Fourth,
	Overtime,
}

impl Quarter {
	/// Quarter number with overtime counted as the fifth period.
	pub fn number(self) -> i32 {
		match self {
			Quarter::First => 1,
			Quarter::Second => 2,
			Quarter::Third => 3,
			Quarter::Fourth => 4,
			Quarter::Overtime => 5,
		}
	}
}

impl FromStr for Quarter {
	type Err = GameClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"1" => Ok(Quarter::First),
			"2" => Ok(Quarter::Second),
			"3" => Ok(Quarter::Third),
			"4" => Ok(Quarter::Fourth),
			"5" | "OT" => Ok(Quarter::Overtime),
			other => Err(GameClockError::invalid_quarter_error(other)),
		}
	}
}

/// Struct to represent minutes (valid range: 0-15)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minutes(u8);

impl Minutes {
	pub fn new(value: u8) -> Result<Self, GameClockError> {
		if value > 15 {
			Err(GameClockError::invalid_minutes_error(value))
		} else {
			Ok(Minutes(value))
		}
	}
}

impl FromStr for Minutes {
	type Err = GameClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let value = s.parse::<u8>()?;
		Minutes::new(value)
	}
}

/// Struct to represent seconds (valid range: 0-59)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seconds(u8);

impl Seconds {
	pub fn new(value: u8) -> Result<Self, GameClockError> {
		if value >= 60 {
			Err(GameClockError::invalid_seconds_error(value))
		} else {
			Ok(Seconds(value))
		}
	}
}

impl FromStr for Seconds {
	type Err = GameClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let value = s.parse::<u8>()?;
		Seconds::new(value)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
	minutes: Minutes,
	seconds: Seconds,
	quarter: Quarter,
}

impl GameClock {
	pub fn new(minutes: Minutes, seconds: Seconds, quarter: Quarter) -> Self {
		GameClock { minutes, seconds, quarter }
	}

	/// Parse a `"MM:SS"` clock string together with its quarter.
	pub fn parse(clock: &str, quarter: Quarter) -> Result<Self, GameClockError> {
		let (minutes_str, seconds_str) = clock.trim().split_once(':').ok_or_else(|| GameClockError::invalid_format_error(clock))?;

		let minutes = minutes_str.parse::<Minutes>()?;
		let seconds = seconds_str.parse::<Seconds>()?;

		Ok(GameClock::new(minutes, seconds, quarter))
	}

	/// Remaining game time in seconds, counted down from 4500 at the
	/// opening kickoff to 0 at the end of overtime. Strictly decreasing
	/// within a quarter, resets upward at each quarter boundary.
	pub fn seconds_remaining(&self) -> i32 {
		900 * (5 - self.quarter.number()) + 60 * i32::from(self.minutes.0) + i32::from(self.seconds.0)
	}
}

/// Convenience wrapper for the table rows that carry quarter and clock as
/// separate string columns.
pub fn seconds_remaining(quarter: &str, clock: &str) -> Result<i32, GameClockError> {
	let quarter = Quarter::from_str(quarter)?;
	Ok(GameClock::parse(clock, quarter)?.seconds_remaining())
}
