use crate::error::GameStatsError;
use chrono::NaiveDate;
use serde::Deserialize;

/// Everything the table-extraction layer hands over for one game. Rows
/// keep their cell text as-is; all interpretation happens in the engine
/// and reconciler.
#[derive(Debug, Clone, Deserialize)]
pub struct GameSheet {
	pub scorebox: Scorebox,
	#[serde(default)]
	pub game_info: Vec<LabeledRow>,
	#[serde(default)]
	pub officials: Vec<LabeledRow>,
	pub team_stats: Vec<TeamStatRow>,
	#[serde(default)]
	pub kick_punt_returns: Vec<ReturnRow>,
	#[serde(default)]
	pub kicking_punting: Vec<KickingRow>,
	pub home_drives: Vec<DriveRow>,
	pub away_drives: Vec<DriveRow>,
	pub plays: Vec<PlayRow>,
	#[serde(default)]
	pub scoring: Vec<ScoringRow>,
}

impl GameSheet {
	/// Structural check run before the play pass. A sheet missing its
	/// team-stats rows or its play list cannot produce a record at all.
	pub fn validate(&self) -> Result<(), GameStatsError> {
		if self.team_stats.is_empty() {
			return Err(GameStatsError::empty_table("team_stats"));
		}
		if self.plays.is_empty() {
			return Err(GameStatsError::empty_table("plays"));
		}
		Ok(())
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scorebox {
	pub date: NaiveDate,
	#[serde(default)]
	pub start_time: String,
	#[serde(default)]
	pub stadium: String,
	pub home_team: String,
	pub away_team: String,
	#[serde(default)]
	pub home_coach: String,
	#[serde(default)]
	pub away_coach: String,
	pub home_pts: i32,
	pub away_pts: i32,
	#[serde(default)]
	pub home_linescore: [i32; 4],
	#[serde(default)]
	pub away_linescore: [i32; 4],
}

/// Two-column label/value rows (game info, officials).
#[derive(Debug, Clone, Deserialize)]
pub struct LabeledRow {
	pub label: String,
	#[serde(default)]
	pub value: String,
}

/// Team-stats rows carry the away value before the home value, matching
/// the source table's column order.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamStatRow {
	pub label: String,
	#[serde(default)]
	pub away: String,
	#[serde(default)]
	pub home: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DriveRow {
	/// May be blank on continuation rows; repaired by carry-forward.
	#[serde(default)]
	pub quarter: String,
	#[serde(default)]
	pub clock: String,
	/// Field-position token of the drive start, e.g. `"KAN 25"`.
	#[serde(default)]
	pub start_at: String,
	/// `"MM:SS"` elapsed time of the drive.
	#[serde(default)]
	pub elapsed: String,
	/// Terminal result, e.g. `"Touchdown"`, `"Punt"`, `"Interception"`.
	#[serde(default)]
	pub result: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayRow {
	#[serde(default)]
	pub quarter: String,
	#[serde(default)]
	pub clock: String,
	#[serde(default)]
	pub down: String,
	#[serde(default)]
	pub to_go: String,
	/// Field-position token, e.g. `"KAN 25"`.
	#[serde(default)]
	pub location: String,
	#[serde(default)]
	pub detail: String,
	/// Stable reference to the first linked player in the row, attached
	/// by the extraction layer. Backs roster lookups for kickoffs and
	/// penalty attribution.
	#[serde(default)]
	pub player_ref: Option<String>,
}

impl PlayRow {
	/// Repeated column-header rows mark quarter boundaries inline.
	pub fn is_quarter_header(&self) -> bool {
		self.quarter == "Quarter"
	}
}

/// One row of the combined two-team kicking & punting table. Numeric
/// cells stay as text; blanks coerce to zero at reconciliation.
#[derive(Debug, Clone, Deserialize)]
pub struct KickingRow {
	pub player: String,
	#[serde(default)]
	pub team: String,
	#[serde(default)]
	pub punts: String,
	#[serde(default)]
	pub punt_yds: String,
}

/// One row of the combined two-team kick & punt returns table.
#[derive(Debug, Clone, Deserialize)]
pub struct ReturnRow {
	pub player: String,
	#[serde(default)]
	pub team: String,
	#[serde(default)]
	pub kick_returns: String,
	#[serde(default)]
	pub kick_return_yds: String,
	#[serde(default)]
	pub punt_returns: String,
	#[serde(default)]
	pub punt_return_yds: String,
}

/// One scoring-summary row, used to reconcile PAT and two-point tries.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringRow {
	/// Team nickname as printed in the scoring table (e.g. `"Chiefs"`).
	pub team: String,
	#[serde(default)]
	pub description: String,
}
