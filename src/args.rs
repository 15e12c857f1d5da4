use crate::model::{
    config::{PenaltyConfig, RatingConfig},
    constants,
    structures::{
        options::{LegendOrder, ModelKind, ProcessingMode},
        rating::Rating
    }
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "Kicker Rating",
    long_about = "Rates table football players from tab-separated result files and exports their skill history"
)]
pub struct Args {
    /// Directory holding the result files. Every line of a result file looks like
    /// `A,B<TAB>C,D<TAB>2,1`: team one, team two and the games each team won.
    #[arg(short, long, env = "KICKER_INPUT_DIR", default_value = ".")]
    pub input_dir: PathBuf,

    /// Only files with this extension are read, in filename order
    #[arg(short, long, default_value = "txt")]
    pub extension: String,

    /// Where the JSON plot data is written. Without it only the standings are printed.
    #[arg(short, long, env = "KICKER_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Look-back window of the inactivity penalty, in games
    #[arg(long, env = "KICKER_MISSED_GAMES", default_value_t = constants::MISSED_GAMES)]
    pub missed_games: usize,

    /// Share of an idle player's mean handed to active players
    #[arg(long, env = "KICKER_PENALTY_FRACTION", default_value_t = constants::PENALTY_FRACTION)]
    pub penalty_fraction: f64,

    #[arg(long, default_value_t = constants::PRIOR_MU, allow_negative_numbers = true)]
    pub prior_mean: f64,

    #[arg(long, default_value_t = constants::PRIOR_SIGMA)]
    pub prior_sigma: f64,

    #[arg(short, long, default_value_t = ModelKind::TrueSkill)]
    pub model: ModelKind,

    #[arg(long, default_value_t = ProcessingMode::PerSource)]
    pub mode: ProcessingMode,

    #[arg(long, default_value_t = LegendOrder::Name)]
    pub legend_order: LegendOrder,

    /// Only plot the most recent games of every timeline
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}

impl Args {
    pub fn rating_config(&self) -> RatingConfig {
        RatingConfig {
            prior: Rating::new(self.prior_mean, self.prior_sigma),
            model: self.model,
            penalty: PenaltyConfig {
                missed_games: self.missed_games,
                penalty_fraction: self.penalty_fraction
            }
        }
    }
}
