use crate::model::{
    constants,
    structures::{options::ModelKind, rating::Rating}
};
use openskill::{
    model::{model::Model, plackett_luce::PlackettLuce},
    rating::default_gamma
};
use skillratings::{
    trueskill::{trueskill_two_teams, TrueSkillConfig, TrueSkillRating},
    Outcomes
};
use std::cmp::Ordering;

/// A two-team Bayesian skill update.
///
/// Both teams are rated as groups: the team performance is the sum of its members'
/// performances, and each member's share of the update grows with their uncertainty.
/// `ranks` uses placement semantics: lower is better, equal ranks are a draw.
/// The returned vectors are in the same order as the inputs.
pub trait RatingModel {
    fn rate(&self, team1: &[Rating], team2: &[Rating], ranks: [usize; 2]) -> (Vec<Rating>, Vec<Rating>);
}

pub fn create_model(kind: ModelKind) -> Box<dyn RatingModel> {
    match kind {
        ModelKind::TrueSkill => Box::new(TrueSkillModel::default()),
        ModelKind::PlackettLuce => Box::new(PlackettLuceModel::default())
    }
}

/// Two-team TrueSkill factor graph.
pub struct TrueSkillModel {
    config: TrueSkillConfig
}

impl TrueSkillModel {
    pub fn new(beta: f64, tau: f64, draw_probability: f64) -> TrueSkillModel {
        TrueSkillModel {
            config: TrueSkillConfig {
                draw_probability,
                beta,
                default_dynamics: tau
            }
        }
    }
}

impl Default for TrueSkillModel {
    fn default() -> Self {
        TrueSkillModel::new(
            constants::TRUESKILL_BETA,
            constants::TRUESKILL_TAU,
            constants::TRUESKILL_DRAW_PROBABILITY
        )
    }
}

impl RatingModel for TrueSkillModel {
    fn rate(&self, team1: &[Rating], team2: &[Rating], ranks: [usize; 2]) -> (Vec<Rating>, Vec<Rating>) {
        let outcome = match ranks[0].cmp(&ranks[1]) {
            Ordering::Less => Outcomes::WIN,
            Ordering::Greater => Outcomes::LOSS,
            Ordering::Equal => Outcomes::DRAW
        };

        let team_one: Vec<TrueSkillRating> = team1.iter().map(|r| (*r).into()).collect();
        let team_two: Vec<TrueSkillRating> = team2.iter().map(|r| (*r).into()).collect();

        let (new_one, new_two) = trueskill_two_teams(&team_one, &team_two, &outcome, &self.config);

        (
            new_one.into_iter().map(Rating::from).collect(),
            new_two.into_iter().map(Rating::from).collect()
        )
    }
}

/// Weng-Lin Plackett-Luce model from openskill.
pub struct PlackettLuceModel {
    model: PlackettLuce
}

impl PlackettLuceModel {
    pub fn new(beta: f64, kappa: f64) -> PlackettLuceModel {
        PlackettLuceModel {
            model: PlackettLuce::new(beta, kappa, default_gamma)
        }
    }
}

impl Default for PlackettLuceModel {
    fn default() -> Self {
        PlackettLuceModel::new(constants::PLACKETT_LUCE_BETA, constants::KAPPA)
    }
}

impl RatingModel for PlackettLuceModel {
    fn rate(&self, team1: &[Rating], team2: &[Rating], ranks: [usize; 2]) -> (Vec<Rating>, Vec<Rating>) {
        let teams = vec![
            team1.iter().map(|r| (*r).into()).collect(),
            team2.iter().map(|r| (*r).into()).collect(),
        ];

        let mut results = self.model.rate(teams, ranks.to_vec()).into_iter();
        let new_one = results.next().unwrap_or_default();
        let new_two = results.next().unwrap_or_default();

        (
            new_one.into_iter().map(Rating::from).collect(),
            new_two.into_iter().map(Rating::from).collect()
        )
    }
}
