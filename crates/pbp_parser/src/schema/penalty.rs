use crate::schema::yards::leading_yardage;

const PENALTY_MARKER: &str = "Penalty on ";

/// Parsed penalty fragment of a play description. Attribution to a team
/// is resolved by the engine; this only extracts the text-level facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PenaltyText {
	/// Text after the last `"Penalty on "` marker.
	pub detail: String,
	/// Enforced penalties count; declined or offsetting ones do not,
	/// unless explicitly marked accepted.
	pub enforced: bool,
	/// Trailing integer before the yard marker in the detail, 0 on failure.
	pub yards: i32,
	/// First whitespace token of the detail (e.g. `"KAN-J.Smith,"`), used
	/// for direct team-code containment tests.
	pub team_token: String,
	pub offensive: bool,
	pub defensive: bool,
}

impl PenaltyText {
	pub fn parse(description: &str) -> Option<Self> {
		if !description.contains(PENALTY_MARKER) {
			return None;
		}

		let detail = description.rsplit(PENALTY_MARKER).next().unwrap_or("").to_string();

		let declined_or_offsetting =
			detail.contains("(Declined)") || detail.contains("(declined)") || detail.contains("(Offsetting)") || detail.contains("(offsetting)");
		let accepted = description.contains("(Accepted)") || description.contains("(accepted)");
		let enforced = !declined_or_offsetting || accepted;

		let yards = leading_yardage(&detail).unwrap_or(0);
		let team_token = detail.split_whitespace().next().unwrap_or("").to_string();
		let offensive = detail.contains("Offensive") || detail.contains("offensive");
		let defensive = detail.contains("Defensive") || detail.contains("defensive");

		Some(PenaltyText {
			detail,
			enforced,
			yards,
			team_token,
			offensive,
			defensive,
		})
	}
}
