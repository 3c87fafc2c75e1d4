use chrono::NaiveDate;
use pbp_parser::schema::TeamCode;

/// Answer from a roster lookup.
///
/// `NoTeam` is an affirmative answer (the source knows the player and he
/// was rostered nowhere on that date) and is not the same as `Unknown`
/// (the source cannot answer). The penalty attribution chain discards
/// yardage on `NoTeam` but falls through to its keyword step on
/// `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterAnswer {
	Team(TeamCode),
	NoTeam,
	Unknown,
}

/// External roster boundary: which team a player was rostered to on a
/// given date. Lookups must never fail a play; the caller degrades
/// through its attribution fallback chain.
pub trait RosterLookup {
	fn team_for(&self, player_ref: &str, date: NaiveDate) -> RosterAnswer;
}

/// Lookup that cannot answer anything. Used when no roster source is
/// configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRoster;

impl RosterLookup for NoRoster {
	fn team_for(&self, _player_ref: &str, _date: NaiveDate) -> RosterAnswer {
		RosterAnswer::Unknown
	}
}
