/// Per-team situational counters accumulated over the single play pass.
/// Index 0 is the home slot, 1 the away slot (`TeamSide::index`). Every
/// field is strictly additive: written counters are never decremented or
/// recomputed.
#[derive(Debug, Clone, Default)]
pub struct SituationalTotals {
	pub qb_kneels: [i32; 2],
	pub qb_kneel_yds: [i32; 2],
	pub rush_first_downs: [i32; 2],
	pub early_down_rush_att: [i32; 2],
	pub early_down_rush_successes: [i32; 2],
	pub rushes_ends: [i32; 2],
	pub qb_spikes: [i32; 2],
	pub pass_first_downs: [i32; 2],
	pub early_down_pass_att: [i32; 2],
	pub early_down_pass_successes: [i32; 2],
	pub pass_att_middle: [i32; 2],
	pub completions_middle: [i32; 2],
	pub short_pass_att: [i32; 2],
	pub short_completions: [i32; 2],
	pub deep_pass_att: [i32; 2],
	pub deep_completions: [i32; 2],
	pub explosive_plays: [i32; 2],
	pub fourth_downs: [i32; 2],
	pub kickoffs_received: [i32; 2],
	pub fga_39: [i32; 2],
	pub fgm_39: [i32; 2],
	pub fga_40_49: [i32; 2],
	pub fgm_40_49: [i32; 2],
	pub fga_50: [i32; 2],
	pub fgm_50: [i32; 2],
	pub punts_inside_20: [i32; 2],
	pub off_pen_yds: [i32; 2],
	pub def_pen_yds: [i32; 2],
}
