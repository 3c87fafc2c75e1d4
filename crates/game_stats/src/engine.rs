use crate::aggregate::SituationalTotals;
use crate::drives::{DriveChart, RedZoneTracker};
use crate::error::GameStatsError;
use crate::possession::{resolve_offense, TeamSide};
use crate::reconcile;
use crate::record::GameRecord;
use crate::roster::{RosterAnswer, RosterLookup};
use crate::tables::{GameSheet, PlayRow};
use pbp_parser::schema::{explosive_play, gained_yards, parse_down, parse_to_go, seconds_remaining};
use pbp_parser::schema::{early_down_success, first_down_success, Down, PenaltyText, PlayTags, TeamCode};
use tracing::{debug, warn};

/// One forward pass over the play-by-play, then reconciliation against the
/// box-score tables. Everything is scoped to this call; nothing is shared
/// across games.
pub fn compute_game(sheet: &GameSheet, roster: &dyn RosterLookup) -> Result<GameRecord, GameStatsError> {
	sheet.validate()?;

	let home_code = TeamCode::for_name(&sheet.scorebox.home_team)?;
	let away_code = TeamCode::for_name(&sheet.scorebox.away_team)?;

	let home_chart = DriveChart::new(&sheet.home_drives)?;
	let away_chart = DriveChart::new(&sheet.away_drives)?;
	let mut home_rz = RedZoneTracker::new(home_chart.len());
	let mut away_rz = RedZoneTracker::new(away_chart.len());

	let mut totals = SituationalTotals::default();
	let mut clock = 5 * 900;

	for row in &sheet.plays {
		// Stale carry-forward: an unparsable clock keeps the previous
		// play's value rather than erroring upward.
		match seconds_remaining(&row.quarter, &row.clock) {
			Ok(secs) => clock = secs,
			Err(_) if !row.is_quarter_header() => debug!(clock = %row.clock, "unparsable play clock, carrying previous value"),
			Err(_) => {}
		}

		// Possession is re-resolved from drive progress on every row,
		// which covers the forced recomputation at the third/fourth
		// quarter boundary and at the start of overtime.
		let home_index = home_chart.index_at(clock);
		let away_index = away_chart.index_at(clock);
		let offense = resolve_offense(&home_chart, &away_chart, home_index, away_index);
		let offense_code = match offense {
			TeamSide::Home => &home_code,
			TeamSide::Away => &away_code,
		};

		let tags = PlayTags::classify(&row.detail);

		let penalty = PenaltyText::parse(&row.detail).filter(|p| p.enforced);
		let (pen_yards, pen_side) = match &penalty {
			Some(p) => (p.yards, attribute_penalty(p, row, roster, sheet, &home_code, &away_code, offense)),
			None => (0, None),
		};
		if let Some(side) = pen_side {
			// Special-teams penalties always charge the kicking team's
			// offensive bucket.
			if side == offense || (tags.is_live && (tags.kickoff || tags.punt)) {
				totals.off_pen_yds[side.index()] += pen_yards;
			} else {
				totals.def_pen_yds[side.index()] += pen_yards;
			}
		} else if penalty.is_some() {
			warn!(detail = %row.detail, "penalty attribution unknown, yardage discarded");
		}

		let yd_line = field_position(&row.location, offense_code);

		if tags.is_live && !tags.extra_point && !tags.kickoff && !tags.two_point_attempt && yd_line > 80 && yd_line < 100 {
			let (tracker, index) = match offense {
				TeamSide::Home => (&mut home_rz, home_index),
				TeamSide::Away => (&mut away_rz, away_index),
			};
			if index > 0 {
				tracker.mark(index - 1);
			}
		}

		let mut yds = gained_yards(&row.detail);
		if pen_side == Some(offense) {
			yds -= pen_yards;
		}
		let down = parse_down(&row.down);
		let to_go = parse_to_go(&row.to_go);

		if tags.is_live && tags.kickoff {
			if let Some(RosterAnswer::Team(kicking)) = row.player_ref.as_deref().map(|r| roster.team_for(r, sheet.scorebox.date)) {
				if kicking == home_code {
					totals.kickoffs_received[TeamSide::Away.index()] += 1;
				} else if kicking == away_code {
					totals.kickoffs_received[TeamSide::Home.index()] += 1;
				}
			}
		}

		accumulate(&mut totals, offense, &tags, down, yds, to_go, yd_line);
	}

	reconcile::build_record(
		sheet,
		&totals,
		&home_chart,
		&away_chart,
		&home_rz,
		&away_rz,
		&home_code,
		&away_code,
	)
}

/// Resolution chain: explicit team-code token, then roster lookup of the
/// row's player reference, then offensive/defensive keywords against the
/// current offense, else unknown (yardage discarded by the caller). The
/// keyword step only runs when the roster could not answer; an
/// affirmative no-team answer resolves as unknown.
fn attribute_penalty(
	penalty: &PenaltyText,
	row: &PlayRow,
	roster: &dyn RosterLookup,
	sheet: &GameSheet,
	home_code: &TeamCode,
	away_code: &TeamCode,
	offense: TeamSide,
) -> Option<TeamSide> {
	if penalty.team_token.contains(home_code.as_str()) {
		return Some(TeamSide::Home);
	}
	if penalty.team_token.contains(away_code.as_str()) {
		return Some(TeamSide::Away);
	}

	let answer = row
		.player_ref
		.as_deref()
		.map_or(RosterAnswer::Unknown, |r| roster.team_for(r, sheet.scorebox.date));
	match answer {
		RosterAnswer::Team(code) if code == *home_code => Some(TeamSide::Home),
		RosterAnswer::Team(code) if code == *away_code => Some(TeamSide::Away),
		// rostered elsewhere or affirmatively teamless: unknown, not a guess
		RosterAnswer::Team(_) | RosterAnswer::NoTeam => None,
		RosterAnswer::Unknown if penalty.offensive => Some(offense),
		RosterAnswer::Unknown if penalty.defensive => Some(offense.opponent()),
		RosterAnswer::Unknown => None,
	}
}

/// Yard line on the 0-100 scale toward the opponent's goal; tokens on the
/// defense's side of the field read as the complement from 100. Parse
/// failures sit at 100, outside every threshold window.
fn field_position(location: &str, offense_code: &TeamCode) -> i32 {
	let Some((team, yard)) = location.split_once(' ') else {
		return 100;
	};
	let Ok(yard) = yard.trim().parse::<i32>() else {
		return 100;
	};
	if *offense_code == team {
		yard
	} else {
		100 - yard
	}
}

#[allow(clippy::similar_names)]
fn accumulate(totals: &mut SituationalTotals, offense: TeamSide, tags: &PlayTags, down: Option<Down>, yds: i32, to_go: i32, yd_line: i32) {
	let o = offense.index();
	let live = tags.is_live;
	let early = down.is_some_and(Down::is_early);

	totals.qb_kneels[o] += i32::from(live && tags.kneel);
	if live && tags.kneel {
		totals.qb_kneel_yds[o] += yds;
	}
	totals.rush_first_downs[o] += i32::from(tags.rush && first_down_success(yds, to_go));
	totals.early_down_rush_att[o] += i32::from(tags.rush && early);
	totals.early_down_rush_successes[o] += i32::from(tags.rush && early_down_success(down, yds, to_go));
	totals.rushes_ends[o] += i32::from(tags.rush && tags.end_run);
	totals.qb_spikes[o] += i32::from(live && tags.spike);
	totals.pass_first_downs[o] += i32::from(tags.completion && first_down_success(yds, to_go));
	totals.early_down_pass_att[o] += i32::from(tags.pass_play && early);
	totals.early_down_pass_successes[o] += i32::from(tags.completion && early_down_success(down, yds, to_go));
	totals.pass_att_middle[o] += i32::from(tags.pass_play && tags.middle_pass);
	totals.completions_middle[o] += i32::from(tags.completion && tags.middle_pass);
	totals.short_pass_att[o] += i32::from(tags.pass_play && tags.short_pass);
	totals.short_completions[o] += i32::from(tags.completion && tags.short_pass);
	totals.deep_pass_att[o] += i32::from(tags.pass_play && tags.deep_pass);
	totals.deep_completions[o] += i32::from(tags.completion && tags.deep_pass);
	totals.explosive_plays[o] += i32::from(explosive_play(tags, down, yds, to_go));
	totals.fourth_downs[o] += i32::from(live && down == Some(Down::Fourth));

	let fg_attempt = live && tags.field_goal;
	totals.fga_39[o] += i32::from(fg_attempt && yds > 0 && yds <= 39);
	totals.fgm_39[o] += i32::from(fg_attempt && yds > 0 && yds <= 39 && tags.field_goal_good);
	totals.fga_40_49[o] += i32::from(fg_attempt && (40..=49).contains(&yds));
	totals.fgm_40_49[o] += i32::from(fg_attempt && (40..=49).contains(&yds) && tags.field_goal_good);
	totals.fga_50[o] += i32::from(fg_attempt && yds >= 50);
	totals.fgm_50[o] += i32::from(fg_attempt && yds >= 50 && tags.field_goal_good);

	totals.punts_inside_20[o] += i32::from(live && tags.punt && yd_line + yds > 80 && !tags.touchback);
}
