use chrono::NaiveDate;
use serde::Serialize;

/// The single output record for one game: game metadata plus every derived
/// and reconciled per-team figure. Field names follow the downstream
/// dataset's column names; home/away pairs are kept flat so the record
/// serializes directly to one CSV row.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
	pub game_date: NaiveDate,
	pub game_time: String,
	pub stadium: String,
	pub weather: String,
	pub referee: String,
	pub vegas_o_u: String,
	pub vegas_spread: String,
	pub home_team: String,
	pub away_team: String,
	pub home_team_code: String,
	pub away_team_code: String,
	pub home_coach: String,
	pub away_coach: String,
	pub home_pts: i32,
	pub away_pts: i32,
	pub home_q1_pts: i32,
	pub away_q1_pts: i32,
	pub home_q2_pts: i32,
	pub away_q2_pts: i32,
	pub home_q3_pts: i32,
	pub away_q3_pts: i32,
	pub home_q4_pts: i32,
	pub away_q4_pts: i32,
	pub home_rush_yds: i32,
	pub away_rush_yds: i32,
	pub home_rush_plays: i32,
	pub away_rush_plays: i32,
	pub home_rush_tds: i32,
	pub away_rush_tds: i32,
	pub home_rush_first_downs: i32,
	pub away_rush_first_downs: i32,
	pub home_early_down_rush_att: i32,
	pub away_early_down_rush_att: i32,
	pub home_early_down_rush_successes: i32,
	pub away_early_down_rush_successes: i32,
	pub home_rushes_ends: i32,
	pub away_rushes_ends: i32,
	pub home_gross_pass_yds: i32,
	pub away_gross_pass_yds: i32,
	pub home_pass_att: i32,
	pub away_pass_att: i32,
	pub home_pass_compl: i32,
	pub away_pass_compl: i32,
	pub home_pass_tds: i32,
	pub away_pass_tds: i32,
	pub home_ints_thrown: i32,
	pub away_ints_thrown: i32,
	pub home_pass_first_downs: i32,
	pub away_pass_first_downs: i32,
	pub home_sacks_taken: i32,
	pub away_sacks_taken: i32,
	pub home_sack_yds_taken: i32,
	pub away_sack_yds_taken: i32,
	pub home_early_down_pass_att: i32,
	pub away_early_down_pass_att: i32,
	pub home_early_down_pass_successes: i32,
	pub away_early_down_pass_successes: i32,
	pub home_pass_att_middle: i32,
	pub away_pass_att_middle: i32,
	pub home_completions_middle: i32,
	pub away_completions_middle: i32,
	pub home_short_pass_att: i32,
	pub away_short_pass_att: i32,
	pub home_short_completions: i32,
	pub away_short_completions: i32,
	pub home_deep_pass_att: i32,
	pub away_deep_pass_att: i32,
	pub home_deep_completions: i32,
	pub away_deep_completions: i32,
	pub home_explosive_plays: i32,
	pub away_explosive_plays: i32,
	pub home_third_down_att: i32,
	pub away_third_down_att: i32,
	pub home_third_down_suc: i32,
	pub away_third_down_suc: i32,
	pub home_fourth_downs: i32,
	pub away_fourth_downs: i32,
	pub home_fourth_down_att: i32,
	pub away_fourth_down_att: i32,
	pub home_fourth_down_suc: i32,
	pub away_fourth_down_suc: i32,
	pub home_2pt_att: i32,
	pub away_2pt_att: i32,
	pub home_2pt_conv_suc: i32,
	pub away_2pt_conv_suc: i32,
	pub home_rz_trips: i32,
	pub away_rz_trips: i32,
	pub home_rz_tds: i32,
	pub away_rz_tds: i32,
	pub home_fumbles_lost: i32,
	pub away_fumbles_lost: i32,
	pub home_turnovers: i32,
	pub away_turnovers: i32,
	pub home_punts: i32,
	pub away_punts: i32,
	pub home_punt_yds: i32,
	pub away_punt_yds: i32,
	pub home_punts_inside_20: i32,
	pub away_punts_inside_20: i32,
	pub home_punt_returns: i32,
	pub away_punt_returns: i32,
	pub home_punt_return_yds: i32,
	pub away_punt_return_yds: i32,
	pub home_kickoffs_received: i32,
	pub away_kickoffs_received: i32,
	pub home_kickoff_returns: i32,
	pub away_kickoff_returns: i32,
	pub home_kickoff_return_yds: i32,
	pub away_kickoff_return_yds: i32,
	pub home_pos_time: f64,
	pub home_total_pos_time: f64,
	pub away_pos_time: f64,
	pub away_total_pos_time: f64,
	pub home_avg_sfp: f64,
	pub away_avg_sfp: f64,
	pub home_pat_a: i32,
	pub away_pat_a: i32,
	pub home_pat_m: i32,
	pub away_pat_m: i32,
	pub home_fga_39: i32,
	pub away_fga_39: i32,
	pub home_fgm_39: i32,
	pub away_fgm_39: i32,
	pub home_fga_40_49: i32,
	pub away_fga_40_49: i32,
	pub home_fgm_40_49: i32,
	pub away_fgm_40_49: i32,
	pub home_fga_50: i32,
	pub away_fga_50: i32,
	pub home_fgm_50: i32,
	pub away_fgm_50: i32,
	pub home_off_pen_yds: i32,
	pub away_off_pen_yds: i32,
	pub home_def_pen_yds: i32,
	pub away_def_pen_yds: i32,
}
