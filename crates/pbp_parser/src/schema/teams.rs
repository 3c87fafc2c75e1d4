use crate::error::TeamCodeError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Full franchise name to 3-letter code. Relocated and rebranded
/// franchises keep separate name entries, so duplicate codes are expected.
static TEAM_CODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
	HashMap::from([
		("Arizona Cardinals", "ARI"),
		("Atlanta Falcons", "ATL"),
		("Baltimore Ravens", "BAL"),
		("Buffalo Bills", "BUF"),
		("Carolina Panthers", "CAR"),
		("Chicago Bears", "CHI"),
		("Cincinnati Bengals", "CIN"),
		("Cleveland Browns", "CLE"),
		("Dallas Cowboys", "DAL"),
		("Denver Broncos", "DEN"),
		("Detroit Lions", "DET"),
		("Green Bay Packers", "GNB"),
		("Houston Texans", "HOU"),
		("Indianapolis Colts", "IND"),
		("Jacksonville Jaguars", "JAX"),
		("Kansas City Chiefs", "KAN"),
		("Las Vegas Raiders", "LVR"),
		("Los Angeles Chargers", "LAC"),
		("Los Angeles Rams", "LAR"),
		("Miami Dolphins", "MIA"),
		("Minnesota Vikings", "MIN"),
		("New England Patriots", "NWE"),
		("New Orleans Saints", "NOR"),
		("New York Giants", "NYG"),
		("New York Jets", "NYJ"),
		("Oakland Raiders", "OAK"),
		("Philadelphia Eagles", "PHI"),
		("Pittsburgh Steelers", "PIT"),
		("San Diego Chargers", "SDG"),
		("San Francisco 49ers", "SFO"),
		("Seattle Seahawks", "SEA"),
		("St. Louis Rams", "STL"),
		("Tampa Bay Buccaneers", "TAM"),
		("Tennessee Titans", "TEN"),
		("Washington Football Team", "WAS"),
		("Washington Redskins", "WAS"),
	])
});

/// A 3-letter franchise code as it appears in play text and table cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamCode(String);

impl TeamCode {
	/// Resolve a full franchise name from the reference table.
	pub fn for_name(name: &str) -> Result<Self, TeamCodeError> {
		TEAM_CODES
			.get(name.trim())
			.map(|code| TeamCode((*code).to_string()))
			.ok_or_else(|| TeamCodeError::unknown_team_name(name))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl FromStr for TeamCode {
	type Err = TeamCodeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let code = s.trim();
		if code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase()) {
			Ok(TeamCode(code.to_string()))
		} else {
			Err(TeamCodeError::InvalidTeamCode(s.to_string()))
		}
	}
}

impl fmt::Display for TeamCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl PartialEq<str> for TeamCode {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for TeamCode {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_code_for_name() {
		assert_eq!(TeamCode::for_name("Kansas City Chiefs").unwrap(), "KAN");
		assert_eq!(TeamCode::for_name("Green Bay Packers").unwrap(), "GNB");
		assert_eq!(TeamCode::for_name("New England Patriots").unwrap(), "NWE");
		assert!(TeamCode::for_name("London Monarchs").is_err());
	}

	#[test]
	fn test_relocated_franchises_share_codes() {
		assert_eq!(TeamCode::for_name("Washington Redskins").unwrap(), TeamCode::for_name("Washington Football Team").unwrap());
		assert_ne!(TeamCode::for_name("St. Louis Rams").unwrap(), TeamCode::for_name("Los Angeles Rams").unwrap());
	}

	#[test]
	fn test_code_from_str() {
		assert_eq!(TeamCode::from_str("PIT").unwrap(), "PIT");
		assert!(TeamCode::from_str("pit").is_err());
		assert!(TeamCode::from_str("PITT").is_err());
	}
}
