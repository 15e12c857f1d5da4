/// Gaussian belief over a player's skill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating {
    pub mean: f64,
    pub std_dev: f64
}

impl Rating {
    pub fn new(mean: f64, std_dev: f64) -> Rating {
        Rating { mean, std_dev }
    }

    /// Returns a copy with a different mean. Uncertainty is kept.
    pub fn with_mean(&self, mean: f64) -> Rating {
        Rating {
            mean,
            std_dev: self.std_dev
        }
    }
}

impl From<openskill::rating::Rating> for Rating {
    fn from(rating: openskill::rating::Rating) -> Self {
        Rating::new(rating.mu, rating.sigma)
    }
}

impl From<Rating> for openskill::rating::Rating {
    fn from(rating: Rating) -> Self {
        openskill::rating::Rating {
            mu: rating.mean,
            sigma: rating.std_dev
        }
    }
}

impl From<skillratings::trueskill::TrueSkillRating> for Rating {
    fn from(rating: skillratings::trueskill::TrueSkillRating) -> Self {
        Rating::new(rating.rating, rating.uncertainty)
    }
}

impl From<Rating> for skillratings::trueskill::TrueSkillRating {
    fn from(rating: Rating) -> Self {
        skillratings::trueskill::TrueSkillRating {
            rating: rating.mean,
            uncertainty: rating.std_dev
        }
    }
}
