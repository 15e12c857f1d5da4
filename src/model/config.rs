use crate::{
    error::{KickerError, Result},
    model::{
        constants,
        structures::{options::ModelKind, rating::Rating}
    }
};

/// Parameters of the inactivity penalty pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenaltyConfig {
    /// Length of the look-back window, in snapshots
    pub missed_games: usize,
    /// Share of an idle player's mean moved to active players
    pub penalty_fraction: f64
}

impl PenaltyConfig {
    pub fn new(missed_games: usize, penalty_fraction: f64) -> Result<PenaltyConfig> {
        let config = PenaltyConfig {
            missed_games,
            penalty_fraction
        };
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.missed_games < 1 {
            return Err(KickerError::Configuration(format!(
                "missed games must be at least 1, got {}",
                self.missed_games
            )));
        }

        if !(0.0..1.0).contains(&self.penalty_fraction) {
            return Err(KickerError::Configuration(format!(
                "penalty fraction must be in [0, 1), got {}",
                self.penalty_fraction
            )));
        }

        Ok(())
    }
}

impl Default for PenaltyConfig {
    fn default() -> Self {
        PenaltyConfig {
            missed_games: constants::MISSED_GAMES,
            penalty_fraction: constants::PENALTY_FRACTION
        }
    }
}

/// Everything the timeline engine needs besides the events themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingConfig {
    /// Rating given to a player the first time they appear
    pub prior: Rating,
    pub model: ModelKind,
    pub penalty: PenaltyConfig
}

impl RatingConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.prior.mean.is_finite() {
            return Err(KickerError::Configuration(format!(
                "prior mean must be finite, got {}",
                self.prior.mean
            )));
        }

        if !self.prior.std_dev.is_finite() || self.prior.std_dev <= 0.0 {
            return Err(KickerError::Configuration(format!(
                "prior sigma must be positive, got {}",
                self.prior.std_dev
            )));
        }

        self.penalty.validate()
    }
}

impl Default for RatingConfig {
    fn default() -> Self {
        RatingConfig {
            prior: Rating::new(constants::PRIOR_MU, constants::PRIOR_SIGMA),
            model: ModelKind::default(),
            penalty: PenaltyConfig::default()
        }
    }
}
