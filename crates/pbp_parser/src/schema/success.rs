use crate::error::DownError;
use crate::schema::play_tags::PlayTags;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Down {
	First,
	Second,
	Third,
	Fourth,
}

impl Down {
	pub fn is_early(self) -> bool {
		matches!(self, Down::First | Down::Second)
	}
}

impl FromStr for Down {
	type Err = DownError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"1" => Ok(Down::First),
			"2" => Ok(Down::Second),
			"3" => Ok(Down::Third),
			"4" => Ok(Down::Fourth),
			other => Err(DownError::InvalidDown(other.to_string())),
		}
	}
}

/// Down column is blank on kickoffs, conversions and header rows.
pub fn parse_down(s: &str) -> Option<Down> {
	Down::from_str(s).ok()
}

/// An unparsable yards-to-go column reads as 100, which makes every
/// distance-based success test fail rather than spuriously pass.
pub fn parse_to_go(s: &str) -> i32 {
	s.trim().parse().unwrap_or(100)
}

/// Down 1 needs 40% of the distance, down 2 needs 60%.
pub fn early_down_success(down: Option<Down>, yards: i32, to_go: i32) -> bool {
	match down {
		Some(Down::First) => f64::from(yards) >= 0.4 * f64::from(to_go),
		Some(Down::Second) => f64::from(yards) >= 0.6 * f64::from(to_go),
		_ => false,
	}
}

/// Gaining the full distance converts, inclusive of exactly the line.
pub fn first_down_success(yards: i32, to_go: i32) -> bool {
	yards >= to_go
}

/// A rush of 12+ or a completion of 16+, counted only on an early down or
/// when the play reached the line to gain.
pub fn explosive_play(tags: &PlayTags, down: Option<Down>, yards: i32, to_go: i32) -> bool {
	let qualifying_situation = down.is_some_and(Down::is_early) || yards >= to_go;
	let big_rush = tags.rush && yards >= 12;
	let big_completion = tags.completion && yards >= 16;
	qualifying_situation && (big_rush || big_completion)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_down() {
		assert_eq!(parse_down("1"), Some(Down::First));
		assert_eq!(parse_down("4"), Some(Down::Fourth));
		assert_eq!(parse_down(""), None);
		assert_eq!(parse_down("nan"), None);
	}

	#[test]
	fn test_parse_to_go_default() {
		assert_eq!(parse_to_go("7"), 7);
		assert_eq!(parse_to_go(""), 100);
		assert_eq!(parse_to_go("Goal"), 100);
	}

	#[test]
	fn test_early_down_success_thresholds() {
		// 0.4 * 10 = 4: exactly 4 succeeds on first down
		assert!(early_down_success(Some(Down::First), 4, 10));
		assert!(!early_down_success(Some(Down::First), 3, 10));
		// 0.6 * 10 = 6 on second down
		assert!(early_down_success(Some(Down::Second), 6, 10));
		assert!(!early_down_success(Some(Down::Second), 5, 10));
		assert!(!early_down_success(Some(Down::Third), 15, 10));
		assert!(!early_down_success(None, 15, 10));
	}

	#[test]
	fn test_no_gain_uses_zero() {
		// "for no gain" extracts as 0, so success requires to_go of 0
		assert!(!early_down_success(Some(Down::First), 0, 10));
		assert!(early_down_success(Some(Down::First), 0, 0));
	}

	#[test]
	fn test_first_down_success_inclusive() {
		assert!(first_down_success(10, 10));
		assert!(!first_down_success(9, 10));
	}

	#[test]
	fn test_explosive_play() {
		let rush = PlayTags {
			is_live: true,
			rush: true,
			..PlayTags::default()
		};
		let completion = PlayTags {
			is_live: true,
			pass_play: true,
			completion: true,
			..PlayTags::default()
		};

		assert!(explosive_play(&rush, Some(Down::First), 12, 10));
		assert!(!explosive_play(&rush, Some(Down::First), 11, 10));
		// 15-yard completion is not explosive even though it converted
		assert!(!explosive_play(&completion, Some(Down::Third), 15, 10));
		assert!(explosive_play(&completion, Some(Down::Third), 16, 10));
		// late down, short of the line: situation does not qualify
		assert!(!explosive_play(&rush, Some(Down::Third), 14, 20));
	}
}
