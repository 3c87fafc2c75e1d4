use once_cell::sync::Lazy;
use regex::Regex;

static YARDAGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(-?\d+) yard").expect("yardage regex"));

/// Integer immediately preceding the first ` yard` marker, if any.
///
/// Matches both action yardage (`"... for 10 yards (M.Fitzpatrick)"`) and
/// attempted distances (`"... 45 yard field goal ..."`).
pub fn leading_yardage(text: &str) -> Option<i32> {
	YARDAGE_RE.captures(text).and_then(|caps| caps.get(1)).and_then(|m| m.as_str().parse().ok())
}

/// Yards gained on a play. `"for no gain"` and any parse failure resolve
/// to 0; this never errors.
pub fn gained_yards(description: &str) -> i32 {
	let before_marker = description.split(" yard").next().unwrap_or(description);
	if before_marker.contains("for no gain") {
		return 0;
	}
	leading_yardage(description).unwrap_or(0)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_gained_yards() {
		let test_cases = vec![
			("B.Robinson right tackle to ATL 32 for 2 yards (T.Smith, L.David).", 2),
			("B.Robinson right end to TB 18 for no gain (T.Smith).", 0),
			("R.White right end to ATL 23 for -1 yards (K.Elliss, Z.Harrison).", -1),
			("L.Jackson pass complete deep left to M.Brown for 47 yards.", 47),
			("H.Butker 45 yard field goal good.", 45),
			("B.Mayfield pass incomplete short left to C.Godwin.", 0),
			("Timeout #2 by BAL at 02:36.", 0),
			("", 0),
		];

		for (input, expected) in test_cases {
			assert_eq!(gained_yards(input), expected, "Failed for input: {input}");
		}
	}

	#[test]
	fn test_leading_yardage() {
		assert_eq!(leading_yardage("S.Koch punts 45 yards to PIT 15."), Some(45));
		assert_eq!(leading_yardage("Holding, 10 yards, enforced at BAL 32."), Some(10));
		assert_eq!(leading_yardage("no distance here"), None);
	}
}
