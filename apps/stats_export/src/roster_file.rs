use crate::error::ExportError;
use chrono::NaiveDate;
use game_stats::{RosterAnswer, RosterLookup};
use pbp_parser::schema::TeamCode;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

/// One stretch of a player's career with a single team, inclusive on both
/// ends. Players traded mid-season get one stint per team.
#[derive(Debug, Deserialize)]
struct Stint {
	from: NaiveDate,
	to: NaiveDate,
	team: String,
}

/// Roster lookups backed by a JSON map of player reference to stints.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct FileRoster {
	stints: HashMap<String, Vec<Stint>>,
}

impl FileRoster {
	pub fn load(path: &Path) -> Result<Self, ExportError> {
		let file = File::open(path)?;
		serde_json::from_reader(BufReader::new(file)).map_err(|source| ExportError::bad_roster(path, source))
	}
}

impl RosterLookup for FileRoster {
	/// A player absent from the file is `Unknown`; a listed player whose
	/// stints do not cover the date was affirmatively teamless then.
	fn team_for(&self, player_ref: &str, date: NaiveDate) -> RosterAnswer {
		let Some(stints) = self.stints.get(player_ref) else {
			return RosterAnswer::Unknown;
		};
		match stints.iter().find(|stint| stint.from <= date && date <= stint.to) {
			Some(stint) => TeamCode::from_str(&stint.team).map_or(RosterAnswer::Unknown, RosterAnswer::Team),
			None => RosterAnswer::NoTeam,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn roster() -> FileRoster {
		serde_json::from_value(json!({
			"c-boswell": [
				{ "from": "2015-09-01", "to": "2026-02-28", "team": "PIT" },
			],
			"t-hill": [
				{ "from": "2016-09-01", "to": "2022-02-28", "team": "KAN" },
				{ "from": "2022-03-01", "to": "2026-02-28", "team": "MIA" },
			],
		}))
		.unwrap()
	}

	fn code(s: &str) -> TeamCode {
		TeamCode::from_str(s).unwrap()
	}

	#[test]
	fn test_stint_selected_by_date() {
		let roster = roster();
		let before = NaiveDate::from_ymd_opt(2021, 10, 3).unwrap();
		let after = NaiveDate::from_ymd_opt(2022, 10, 16).unwrap();
		assert_eq!(roster.team_for("t-hill", before), RosterAnswer::Team(code("KAN")));
		assert_eq!(roster.team_for("t-hill", after), RosterAnswer::Team(code("MIA")));
	}

	#[test]
	fn test_unknown_player_vs_out_of_range_date() {
		let roster = roster();
		let date = NaiveDate::from_ymd_opt(2010, 9, 12).unwrap();
		assert_eq!(roster.team_for("j-nobody", date), RosterAnswer::Unknown);
		assert_eq!(roster.team_for("t-hill", date), RosterAnswer::NoTeam, "listed player outside his stints was teamless");
	}
}
