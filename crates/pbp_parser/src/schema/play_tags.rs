/// Independent classification tags for one play description.
///
/// Tags are computed with fixed-vocabulary substring tests and are not
/// mutually exclusive unless a tag's definition excludes another. A
/// nullified play (`"(no play)"`) keeps its raw markers but `is_live` is
/// false, which excludes it from every counter downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayTags {
	pub is_live: bool,
	pub extra_point: bool,
	pub two_point_attempt: bool,
	pub field_goal: bool,
	pub field_goal_good: bool,
	pub kickoff: bool,
	pub punt: bool,
	pub touchback: bool,
	pub pass_play: bool,
	pub completion: bool,
	pub sack: bool,
	pub kneel: bool,
	pub spike: bool,
	pub rush: bool,
	pub end_run: bool,
	pub short_pass: bool,
	pub deep_pass: bool,
	pub middle_pass: bool,
}

impl PlayTags {
	pub fn classify(description: &str) -> Self {
		let is_live = !description.contains("(no play)");
		let extra_point = description.contains(" extra point ");
		let two_point_attempt = description.contains("Two Point Attempt");
		let field_goal = description.contains(" field goal ");
		let kickoff = description.contains(" kicks off ");
		let punt = description.contains(" punts ");
		let sack = description.contains(" sacked ");
		let kneel = description.contains(" kneels for ");
		let has_pass_marker = description.contains(" pass ");

		let pass_play = is_live && !two_point_attempt && has_pass_marker;
		let completion = pass_play && description.contains(" pass complete ");

		let rush = is_live
			&& !extra_point
			&& !two_point_attempt
			&& !field_goal
			&& !kickoff
			&& !punt
			&& !kneel
			&& !sack
			&& !has_pass_marker
			&& description.contains(" for ");

		let short_pass = description.contains("short left") || description.contains("short middle") || description.contains("short right");
		let deep_pass = description.contains("deep left") || description.contains("deep middle") || description.contains("deep right");
		let middle_pass = description.contains("short middle") || description.contains("deep middle");

		PlayTags {
			is_live,
			extra_point,
			two_point_attempt,
			field_goal,
			field_goal_good: description.contains("field goal good"),
			kickoff,
			punt,
			touchback: description.contains("touchback"),
			pass_play,
			completion,
			sack,
			kneel,
			spike: description.contains("spiked the ball"),
			rush,
			end_run: description.contains("left end") || description.contains("right end"),
			short_pass,
			deep_pass,
			middle_pass,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rush_classification() {
		let tags = PlayTags::classify("J.Dobbins right end to BAL 40 for 5 yards (T.Edmunds).");
		assert!(tags.is_live);
		assert!(tags.rush);
		assert!(tags.end_run);
		assert!(!tags.pass_play);
		assert!(!tags.kneel);
	}

	#[test]
	fn test_pass_classification() {
		let tags = PlayTags::classify("L.Jackson pass complete short middle to M.Andrews for 10 yards (M.Fitzpatrick).");
		assert!(tags.pass_play);
		assert!(tags.completion);
		assert!(tags.short_pass);
		assert!(tags.middle_pass);
		assert!(!tags.deep_pass);
		assert!(!tags.rush);
	}

	#[test]
	fn test_incomplete_deep_pass() {
		let tags = PlayTags::classify("B.Mayfield pass incomplete deep right intended for C.Godwin.");
		assert!(tags.pass_play);
		assert!(!tags.completion);
		assert!(tags.deep_pass);
	}

	#[test]
	fn test_nullified_play_is_not_live() {
		let tags = PlayTags::classify("T.Brady pass complete short left to M.Evans for 12 yards (no play).");
		assert!(!tags.is_live);
		assert!(!tags.pass_play, "pass tag requires a live play");
		assert!(!tags.rush);
	}

	#[test]
	fn test_two_point_attempt_excludes_pass() {
		let tags = PlayTags::classify("Two Point Attempt: J.Hurts pass complete to D.Smith, ATTEMPT SUCCEEDS.");
		assert!(tags.two_point_attempt);
		assert!(!tags.pass_play);
	}

	#[test]
	fn test_sack_is_not_rush() {
		let tags = PlayTags::classify("L.Jackson sacked at BAL 18 for -7 yards (T.Watt).");
		assert!(tags.sack);
		assert!(!tags.rush);
	}

	#[test]
	fn test_special_teams_tags() {
		let test_cases: Vec<(&str, fn(&PlayTags) -> bool)> = vec![
			("J.Tucker kicks off 65 yards, touchback.", |t: &PlayTags| t.kickoff && t.touchback),
			("S.Koch punts 45 yards to PIT 15, Center-N.Moore.", |t: &PlayTags| t.punt && !t.touchback),
			("J.Tucker extra point is GOOD, Center-N.Moore.", |t: &PlayTags| t.extra_point),
			("J.Tucker kicks the extra point.", |t: &PlayTags| !t.extra_point),
			("H.Butker 45 yard field goal good.", |t: &PlayTags| t.field_goal && t.field_goal_good),
			("H.Butker 52 yard field goal no good.", |t: &PlayTags| t.field_goal && !t.field_goal_good),
		];

		for (input, check) in test_cases {
			let tags = PlayTags::classify(input);
			assert!(check(&tags), "Failed for input: {input}");
		}
	}

	#[test]
	fn test_kneel_and_spike() {
		assert!(PlayTags::classify("P.Mahomes kneels for -1 yards.").kneel);
		assert!(PlayTags::classify("J.Goff spiked the ball to stop the clock.").spike);
	}
}
