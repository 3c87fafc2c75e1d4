use crate::drives::DriveChart;

/// Offense slot for a play: home teams aggregate at index 0, away at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSide {
	Home,
	Away,
}

impl TeamSide {
	pub fn index(self) -> usize {
		match self {
			TeamSide::Home => 0,
			TeamSide::Away => 1,
		}
	}

	pub fn opponent(self) -> Self {
		match self {
			TeamSide::Home => TeamSide::Away,
			TeamSide::Away => TeamSide::Home,
		}
	}
}

/// Resolve the current offense from both teams' drive progress.
///
/// A team with no started drives cannot be on offense. Otherwise the team
/// whose most recent drive started later in the game (smaller seconds
/// remaining) has the ball. The comparison is strict in home's favor
/// only, so an exact tie resolves to away.
pub fn resolve_offense(home: &DriveChart, away: &DriveChart, home_index: usize, away_index: usize) -> TeamSide {
	if home_index == 0 {
		return TeamSide::Away;
	}
	if away_index == 0 {
		return TeamSide::Home;
	}

	match (home.last_started_secs(home_index), away.last_started_secs(away_index)) {
		(Some(home_start), Some(away_start)) if home_start < away_start => TeamSide::Home,
		_ => TeamSide::Away,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tables::DriveRow;

	fn chart(starts: &[(&str, &str)]) -> DriveChart {
		let rows: Vec<DriveRow> = starts
			.iter()
			.map(|(q, c)| DriveRow {
				quarter: (*q).to_string(),
				clock: (*c).to_string(),
				start_at: String::new(),
				elapsed: String::new(),
				result: String::new(),
			})
			.collect();
		DriveChart::new(&rows).unwrap()
	}

	#[test]
	fn test_team_without_possession_is_on_defense() {
		let home = chart(&[("1", "13:00")]);
		let away = chart(&[("1", "15:00")]);

		// before the home team's first drive only away can be offense
		assert_eq!(resolve_offense(&home, &away, 0, 1), TeamSide::Away);
		assert_eq!(resolve_offense(&home, &away, 1, 0), TeamSide::Home);
	}

	#[test]
	fn test_latest_started_drive_holds_the_ball() {
		let home = chart(&[("1", "13:00")]);
		let away = chart(&[("1", "15:00")]);

		// home's drive at 13:00 started after away's at 15:00
		assert_eq!(resolve_offense(&home, &away, 1, 1), TeamSide::Home);

		let away_late = chart(&[("1", "15:00"), ("1", "9:30")]);
		assert_eq!(resolve_offense(&home, &away_late, 1, 2), TeamSide::Away);
	}

	#[test]
	fn test_exact_tie_favors_away() {
		let home = chart(&[("1", "12:00")]);
		let away = chart(&[("1", "12:00")]);
		assert_eq!(resolve_offense(&home, &away, 1, 1), TeamSide::Away);
	}
}
