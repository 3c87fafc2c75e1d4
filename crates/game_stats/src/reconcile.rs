use crate::aggregate::SituationalTotals;
use crate::drives::{DriveChart, RedZoneTracker};
use crate::error::GameStatsError;
use crate::record::GameRecord;
use crate::tables::{GameSheet, KickingRow, LabeledRow, ReturnRow, ScoringRow, TeamStatRow};
use pbp_parser::schema::TeamCode;
use tracing::warn;

const DEFAULT_WEATHER: &str = "70 degrees, relative humidity 45%, no wind";

const RUSH_YDS_TDS: &str = "Rush-Yds-TDs";
const SACKED_YARDS: &str = "Sacked-Yards";
const CMP_ATT_YD_TD_INT: &str = "Cmp-Att-Yd-TD-INT";
const THIRD_DOWN_CONV: &str = "Third Down Conv.";
const FOURTH_DOWN_CONV: &str = "Fourth Down Conv.";
const FUMBLES_LOST: &str = "Fumbles-Lost";
const TURNOVERS: &str = "Turnovers";
const TIME_OF_POSSESSION: &str = "Time of Possession";

/// Merge the accumulated play-level state with the authoritative box-score
/// tables into the final per-game record.
#[allow(clippy::too_many_arguments, clippy::too_many_lines)]
pub fn build_record(
	sheet: &GameSheet,
	totals: &SituationalTotals,
	home_chart: &DriveChart,
	away_chart: &DriveChart,
	home_rz: &RedZoneTracker,
	away_rz: &RedZoneTracker,
	home_code: &TeamCode,
	away_code: &TeamCode,
) -> Result<GameRecord, GameStatsError> {
	let sb = &sheet.scorebox;

	let rush = stat_row(sheet, RUSH_YDS_TDS)?;
	let sacked = stat_row(sheet, SACKED_YARDS)?;
	let passing = stat_row(sheet, CMP_ATT_YD_TD_INT)?;
	let third_down = stat_row(sheet, THIRD_DOWN_CONV)?;
	let fourth_down = stat_row(sheet, FOURTH_DOWN_CONV)?;
	let fumbles = stat_row(sheet, FUMBLES_LOST)?;
	let turnovers = stat_row(sheet, TURNOVERS)?;
	let possession = stat_row(sheet, TIME_OF_POSSESSION)?;

	let (home_kicking, away_kicking) = split_two_team(&sheet.kicking_punting, |r: &KickingRow| r.player == "Player", |r| r.team.as_str(), away_code.as_str());
	let (home_returns, away_returns) = split_two_team(&sheet.kick_punt_returns, |r: &ReturnRow| r.player == "Player", |r| r.team.as_str(), away_code.as_str());

	let conversions = scoring_conversions(&sheet.scoring, &sb.home_team, &sb.away_team);

	Ok(GameRecord {
		game_date: sb.date,
		game_time: sb.start_time.clone(),
		stadium: sb.stadium.clone(),
		weather: info_value(&sheet.game_info, "Weather").unwrap_or(DEFAULT_WEATHER).to_string(),
		referee: info_value(&sheet.officials, "Referee").unwrap_or_default().to_string(),
		vegas_o_u: info_value(&sheet.game_info, "Over/Under")
			.and_then(|v| v.split(' ').next())
			.unwrap_or_default()
			.to_string(),
		vegas_spread: info_value(&sheet.game_info, "Vegas Line").unwrap_or_default().to_string(),
		home_team: sb.home_team.clone(),
		away_team: sb.away_team.clone(),
		home_team_code: home_code.to_string(),
		away_team_code: away_code.to_string(),
		home_coach: sb.home_coach.clone(),
		away_coach: sb.away_coach.clone(),
		home_pts: sb.home_pts,
		away_pts: sb.away_pts,
		home_q1_pts: sb.home_linescore[0],
		away_q1_pts: sb.away_linescore[0],
		home_q2_pts: sb.home_linescore[1],
		away_q2_pts: sb.away_linescore[1],
		home_q3_pts: sb.home_linescore[2],
		away_q3_pts: sb.away_linescore[2],
		home_q4_pts: sb.home_linescore[3],
		away_q4_pts: sb.away_linescore[3],
		// rushing totals with kneel-downs backed out
		home_rush_yds: dash_part(rush, Col::Home, 1)? - totals.qb_kneel_yds[0],
		away_rush_yds: dash_part(rush, Col::Away, 1)? - totals.qb_kneel_yds[1],
		home_rush_plays: dash_part(rush, Col::Home, 0)? - totals.qb_kneels[0],
		away_rush_plays: dash_part(rush, Col::Away, 0)? - totals.qb_kneels[1],
		home_rush_tds: dash_part(rush, Col::Home, 2)?,
		away_rush_tds: dash_part(rush, Col::Away, 2)?,
		home_rush_first_downs: totals.rush_first_downs[0],
		away_rush_first_downs: totals.rush_first_downs[1],
		home_early_down_rush_att: totals.early_down_rush_att[0],
		away_early_down_rush_att: totals.early_down_rush_att[1],
		home_early_down_rush_successes: totals.early_down_rush_successes[0],
		away_early_down_rush_successes: totals.early_down_rush_successes[1],
		home_rushes_ends: totals.rushes_ends[0],
		away_rushes_ends: totals.rushes_ends[1],
		home_gross_pass_yds: dash_part(passing, Col::Home, 2)?,
		away_gross_pass_yds: dash_part(passing, Col::Away, 2)?,
		// spikes are not real attempts
		home_pass_att: dash_part(passing, Col::Home, 1)? - totals.qb_spikes[0],
		away_pass_att: dash_part(passing, Col::Away, 1)? - totals.qb_spikes[1],
		home_pass_compl: dash_part(passing, Col::Home, 0)?,
		away_pass_compl: dash_part(passing, Col::Away, 0)?,
		home_pass_tds: dash_part(passing, Col::Home, 3)?,
		away_pass_tds: dash_part(passing, Col::Away, 3)?,
		home_ints_thrown: dash_part(passing, Col::Home, 4)?,
		away_ints_thrown: dash_part(passing, Col::Away, 4)?,
		home_pass_first_downs: totals.pass_first_downs[0],
		away_pass_first_downs: totals.pass_first_downs[1],
		home_sacks_taken: dash_part(sacked, Col::Home, 0)?,
		away_sacks_taken: dash_part(sacked, Col::Away, 0)?,
		home_sack_yds_taken: dash_part(sacked, Col::Home, 1)?,
		away_sack_yds_taken: dash_part(sacked, Col::Away, 1)?,
		home_early_down_pass_att: totals.early_down_pass_att[0],
		away_early_down_pass_att: totals.early_down_pass_att[1],
		home_early_down_pass_successes: totals.early_down_pass_successes[0],
		away_early_down_pass_successes: totals.early_down_pass_successes[1],
		home_pass_att_middle: totals.pass_att_middle[0],
		away_pass_att_middle: totals.pass_att_middle[1],
		home_completions_middle: totals.completions_middle[0],
		away_completions_middle: totals.completions_middle[1],
		home_short_pass_att: totals.short_pass_att[0],
		away_short_pass_att: totals.short_pass_att[1],
		home_short_completions: totals.short_completions[0],
		away_short_completions: totals.short_completions[1],
		home_deep_pass_att: totals.deep_pass_att[0],
		away_deep_pass_att: totals.deep_pass_att[1],
		home_deep_completions: totals.deep_completions[0],
		away_deep_completions: totals.deep_completions[1],
		home_explosive_plays: totals.explosive_plays[0],
		away_explosive_plays: totals.explosive_plays[1],
		home_third_down_att: dash_part(third_down, Col::Home, 1)?,
		away_third_down_att: dash_part(third_down, Col::Away, 1)?,
		home_third_down_suc: dash_part(third_down, Col::Home, 0)?,
		away_third_down_suc: dash_part(third_down, Col::Away, 0)?,
		home_fourth_downs: totals.fourth_downs[0],
		away_fourth_downs: totals.fourth_downs[1],
		home_fourth_down_att: dash_part(fourth_down, Col::Home, 1)?,
		away_fourth_down_att: dash_part(fourth_down, Col::Away, 1)?,
		home_fourth_down_suc: dash_part(fourth_down, Col::Home, 0)?,
		away_fourth_down_suc: dash_part(fourth_down, Col::Away, 0)?,
		home_2pt_att: conversions.two_pt_att[0],
		away_2pt_att: conversions.two_pt_att[1],
		home_2pt_conv_suc: conversions.two_pt_suc[0],
		away_2pt_conv_suc: conversions.two_pt_suc[1],
		home_rz_trips: home_rz.trips(),
		away_rz_trips: away_rz.trips(),
		home_rz_tds: home_rz.touchdowns(home_chart),
		away_rz_tds: away_rz.touchdowns(away_chart),
		home_fumbles_lost: dash_part(fumbles, Col::Home, 1)?,
		away_fumbles_lost: dash_part(fumbles, Col::Away, 1)?,
		home_turnovers: whole_number(turnovers, Col::Home)?,
		away_turnovers: whole_number(turnovers, Col::Away)?,
		home_punts: sum_cells(home_kicking, |r| &r.punts),
		away_punts: sum_cells(away_kicking, |r| &r.punts),
		home_punt_yds: sum_cells(home_kicking, |r| &r.punt_yds),
		away_punt_yds: sum_cells(away_kicking, |r| &r.punt_yds),
		home_punts_inside_20: totals.punts_inside_20[0],
		away_punts_inside_20: totals.punts_inside_20[1],
		home_punt_returns: sum_cells(home_returns, |r| &r.punt_returns),
		away_punt_returns: sum_cells(away_returns, |r| &r.punt_returns),
		home_punt_return_yds: sum_cells(home_returns, |r| &r.punt_return_yds),
		away_punt_return_yds: sum_cells(away_returns, |r| &r.punt_return_yds),
		home_kickoffs_received: totals.kickoffs_received[0],
		away_kickoffs_received: totals.kickoffs_received[1],
		home_kickoff_returns: sum_cells(home_returns, |r| &r.kick_returns),
		away_kickoff_returns: sum_cells(away_returns, |r| &r.kick_returns),
		home_kickoff_return_yds: sum_cells(home_returns, |r| &r.kick_return_yds),
		away_kickoff_return_yds: sum_cells(away_returns, |r| &r.kick_return_yds),
		home_pos_time: home_chart.possession_minutes(),
		home_total_pos_time: clock_minutes(possession, Col::Home)?,
		away_pos_time: away_chart.possession_minutes(),
		away_total_pos_time: clock_minutes(possession, Col::Away)?,
		home_avg_sfp: home_chart.average_start_position(home_code.as_str()),
		away_avg_sfp: away_chart.average_start_position(away_code.as_str()),
		home_pat_a: conversions.pat_att[0],
		away_pat_a: conversions.pat_att[1],
		home_pat_m: conversions.pat_made[0],
		away_pat_m: conversions.pat_made[1],
		home_fga_39: totals.fga_39[0],
		away_fga_39: totals.fga_39[1],
		home_fgm_39: totals.fgm_39[0],
		away_fgm_39: totals.fgm_39[1],
		home_fga_40_49: totals.fga_40_49[0],
		away_fga_40_49: totals.fga_40_49[1],
		home_fgm_40_49: totals.fgm_40_49[0],
		away_fgm_40_49: totals.fgm_40_49[1],
		home_fga_50: totals.fga_50[0],
		away_fga_50: totals.fga_50[1],
		home_fgm_50: totals.fgm_50[0],
		away_fgm_50: totals.fgm_50[1],
		home_off_pen_yds: totals.off_pen_yds[0],
		away_off_pen_yds: totals.off_pen_yds[1],
		home_def_pen_yds: totals.def_pen_yds[0],
		away_def_pen_yds: totals.def_pen_yds[1],
	})
}

#[derive(Clone, Copy)]
enum Col {
	Home,
	Away,
}

fn stat_row<'a>(sheet: &'a GameSheet, label: &'static str) -> Result<&'a TeamStatRow, GameStatsError> {
	sheet
		.team_stats
		.iter()
		.find(|row| row.label == label)
		.ok_or_else(|| GameStatsError::missing_stat_row(label))
}

fn col_value(row: &TeamStatRow, col: Col) -> &str {
	match col {
		Col::Home => &row.home,
		Col::Away => &row.away,
	}
}

/// One segment of a dash-joined stat value, e.g. index 1 of `"26-112-1"`.
fn dash_part(row: &TeamStatRow, col: Col, index: usize) -> Result<i32, GameStatsError> {
	let value = col_value(row, col);
	value
		.split('-')
		.nth(index)
		.and_then(|part| part.trim().parse().ok())
		.ok_or_else(|| GameStatsError::bad_stat_row(static_label(&row.label), value))
}

fn whole_number(row: &TeamStatRow, col: Col) -> Result<i32, GameStatsError> {
	let value = col_value(row, col);
	value.trim().parse().map_err(|_| GameStatsError::bad_stat_row(static_label(&row.label), value))
}

/// Possession `"MM:SS"` as fractional minutes.
fn clock_minutes(row: &TeamStatRow, col: Col) -> Result<f64, GameStatsError> {
	let value = col_value(row, col);
	let parsed = value
		.split_once(':')
		.and_then(|(mm, ss)| Some((mm.trim().parse::<i32>().ok()?, ss.trim().parse::<i32>().ok()?)));
	match parsed {
		Some((mm, ss)) => Ok(f64::from(mm) + f64::from(ss) / 60.0),
		None => Err(GameStatsError::bad_stat_row(static_label(&row.label), value)),
	}
}

// Error labels are 'static; row labels come from a small fixed vocabulary.
fn static_label(label: &str) -> &'static str {
	match label {
		RUSH_YDS_TDS => RUSH_YDS_TDS,
		SACKED_YARDS => SACKED_YARDS,
		CMP_ATT_YD_TD_INT => CMP_ATT_YD_TD_INT,
		THIRD_DOWN_CONV => THIRD_DOWN_CONV,
		FOURTH_DOWN_CONV => FOURTH_DOWN_CONV,
		FUMBLES_LOST => FUMBLES_LOST,
		TURNOVERS => TURNOVERS,
		TIME_OF_POSSESSION => TIME_OF_POSSESSION,
		_ => "team stats",
	}
}

/// Split a combined two-team table at its repeated header row into
/// `(home, away)` blocks. Without a header row the whole table belongs to
/// whichever team matches the first data row's code and the other side is
/// left empty (summing to all zeros).
fn split_two_team<'a, T>(rows: &'a [T], is_header: impl Fn(&T) -> bool, team: impl Fn(&T) -> &str, away_code: &str) -> (&'a [T], &'a [T]) {
	let first_is_away = rows.first().map(|r| team(r) == away_code).unwrap_or(false);
	match rows.iter().position(is_header) {
		Some(sep) => {
			let first = &rows[..sep.saturating_sub(1)];
			let second = &rows[sep + 1..];
			if first_is_away {
				(second, first)
			} else {
				(first, second)
			}
		}
		None if first_is_away => (&[], rows),
		None => (rows, &[]),
	}
}

/// Non-numeric cells (blanks, header leftovers) coerce to zero.
fn sum_cells<T>(rows: &[T], cell: impl Fn(&T) -> &str) -> i32 {
	rows.iter().map(|row| cell(row).trim().parse::<i32>().unwrap_or(0)).sum()
}

fn info_value<'a>(rows: &'a [LabeledRow], label: &str) -> Option<&'a str> {
	let value = rows.iter().find(|row| row.label == label).map(|row| row.value.as_str());
	if value.is_none() {
		warn!(label, "game info row missing, using default");
	}
	value
}

#[derive(Debug, Default)]
struct Conversions {
	pat_att: [i32; 2],
	pat_made: [i32; 2],
	two_pt_att: [i32; 2],
	two_pt_suc: [i32; 2],
}

/// PAT and two-point tries from the scoring summary: the parenthesized
/// suffix of each scoring description names the conversion type, and
/// `"failed"` marks a miss. Teams are matched by nickname containment in
/// the full franchise name.
fn scoring_conversions(rows: &[ScoringRow], home_team: &str, away_team: &str) -> Conversions {
	let mut conv = Conversions::default();

	for row in rows {
		let Some((_, suffix)) = row.description.split_once('(') else { continue };
		if row.team.is_empty() {
			continue;
		}
		let side = if home_team.contains(&row.team) {
			0
		} else if away_team.contains(&row.team) {
			1
		} else {
			continue;
		};

		let made = !suffix.contains("failed");
		if suffix.contains("kick") {
			conv.pat_att[side] += 1;
			conv.pat_made[side] += i32::from(made);
		} else if suffix.contains("pass") || suffix.contains("run") {
			conv.two_pt_att[side] += 1;
			conv.two_pt_suc[side] += i32::from(made);
		}
	}

	conv
}
