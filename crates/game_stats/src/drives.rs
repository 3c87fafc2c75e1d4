use crate::error::GameStatsError;
use crate::tables::DriveRow;
use pbp_parser::schema::{seconds_remaining, Quarter};
use std::str::FromStr;
use tracing::warn;

/// One team's ordered drive list with each drive's start time resolved to
/// seconds remaining. Start quarters missing from continuation rows are
/// repaired by inheriting the preceding drive's quarter before the start
/// time is computed.
#[derive(Debug, Clone)]
pub struct DriveChart {
	rows: Vec<DriveRow>,
	starts: Vec<i32>,
}

impl DriveChart {
	pub fn new(rows: &[DriveRow]) -> Result<Self, GameStatsError> {
		let mut rows = rows.to_vec();
		let mut starts = Vec::with_capacity(rows.len());

		for index in 0..rows.len() {
			let secs = match seconds_remaining(&rows[index].quarter, &rows[index].clock) {
				Ok(secs) => secs,
				Err(_) if index > 0 => {
					rows[index].quarter = rows[index - 1].quarter.clone();
					seconds_remaining(&rows[index].quarter, &rows[index].clock).map_err(|source| GameStatsError::BadDriveClock { index, source })?
				}
				Err(_) => return Err(GameStatsError::BadDriveQuarter { index }),
			};
			starts.push(secs);
		}

		Ok(DriveChart { rows, starts })
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// How many of this team's drives have already started at the given
	/// seconds-remaining. A fresh linear scan from drive 0; counts are
	/// small enough that re-scanning per play is fine, and the result is
	/// non-decreasing as the clock runs down.
	pub fn index_at(&self, secs_remaining: i32) -> usize {
		let mut d = 0;
		while d < self.starts.len() && secs_remaining <= self.starts[d] {
			d += 1;
		}
		d
	}

	/// Start time of the most recently started drive for a given index
	/// from `index_at`. `None` when the team has not yet possessed.
	pub fn last_started_secs(&self, index: usize) -> Option<i32> {
		index.checked_sub(1).and_then(|i| self.starts.get(i)).copied()
	}

	pub fn result(&self, drive: usize) -> &str {
		self.rows.get(drive).map_or("", |r| r.result.as_str())
	}

	/// Possession time in minutes, overtime drives excluded.
	pub fn possession_minutes(&self) -> f64 {
		let mut secs = 0;
		for row in &self.rows {
			let in_regulation = Quarter::from_str(&row.quarter).is_ok_and(|q| q.number() < 5);
			if !in_regulation {
				continue;
			}
			if let Some((mm, ss)) = parse_elapsed(&row.elapsed) {
				secs += 60 * mm + ss;
			}
		}
		f64::from(secs) / 60.0
	}

	/// Average starting yard line on the 0-100 scale toward the opponent's
	/// goal. Tokens prefixed with the other team's code read as the
	/// complement from 100. Drives with no parsable token are skipped.
	pub fn average_start_position(&self, own_code: &str) -> f64 {
		let mut positions = Vec::with_capacity(self.rows.len());
		for row in &self.rows {
			let Some((team, yard)) = row.start_at.split_once(' ') else { continue };
			let Ok(yard) = yard.trim().parse::<i32>() else { continue };
			positions.push(if team == own_code { yard } else { 100 - yard });
		}
		if positions.is_empty() {
			warn!(code = own_code, "no parsable drive start positions");
			return 0.0;
		}
		f64::from(positions.iter().sum::<i32>()) / positions.len() as f64
	}
}

fn parse_elapsed(elapsed: &str) -> Option<(i32, i32)> {
	let (mm, ss) = elapsed.split_once(':')?;
	Some((mm.trim().parse().ok()?, ss.trim().parse().ok()?))
}

/// Per-drive red-zone flags. A flag is set at most once per drive and
/// never cleared; trips and touchdowns are read off after the play pass.
#[derive(Debug, Clone)]
pub struct RedZoneTracker {
	flags: Vec<bool>,
}

impl RedZoneTracker {
	pub fn new(drive_count: usize) -> Self {
		RedZoneTracker {
			flags: vec![false; drive_count],
		}
	}

	/// Idempotent: re-marking a drive never double-counts.
	pub fn mark(&mut self, drive: usize) {
		if let Some(flag) = self.flags.get_mut(drive) {
			*flag = true;
		}
	}

	pub fn trips(&self) -> i32 {
		self.flags.iter().filter(|f| **f).count() as i32
	}

	/// Flagged drives whose terminal result was a touchdown.
	pub fn touchdowns(&self, chart: &DriveChart) -> i32 {
		self.flags.iter().enumerate().filter(|(d, flag)| **flag && chart.result(*d) == "Touchdown").count() as i32
	}
}
