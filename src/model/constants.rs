// Prior for players seen for the first time
pub const PRIOR_MU: f64 = 0.0;
pub const PRIOR_SIGMA: f64 = 25.0;
// TrueSkill environment
pub const TRUESKILL_BETA: f64 = 25.0 / 6.0;
pub const TRUESKILL_TAU: f64 = 25.0 / 300.0;
pub const TRUESKILL_DRAW_PROBABILITY: f64 = 0.1;
// Plackett-Luce model
pub const PLACKETT_LUCE_BETA: f64 = 25.0 / 6.0;
pub const KAPPA: f64 = 0.0001;
// Inactivity penalty
pub const MISSED_GAMES: usize = 10;
pub const PENALTY_FRACTION: f64 = 0.10;
// Largest win count accepted in a single result row
pub const MAX_WINS_PER_ROW: u32 = 1000;
// Rank encodings, lower is better
pub const DRAW: [usize; 2] = [0, 0];
pub const TEAM1_WINS: [usize; 2] = [0, 1];
pub const TEAM2_WINS: [usize; 2] = [1, 0];
pub const FULL_TIMELINE_LABEL: &str = "Full Timeline";
