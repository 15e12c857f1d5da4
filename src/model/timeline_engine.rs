use std::collections::HashSet;

use crate::{
    error::{KickerError, Result},
    model::{
        config::RatingConfig,
        penalty::apply_inactivity_penalty,
        rating_model::{create_model, RatingModel},
        structures::{
            match_event::MatchEvent,
            rating::Rating,
            snapshot::{Snapshot, Timeline}
        }
    },
    utils::progress_utils::progress_bar
};
use tracing::{debug, trace};

pub struct TimelineEngine {
    model: Box<dyn RatingModel>,
    config: RatingConfig,
    // Ratings after the most recent event, penalty included
    state: Snapshot,
    timeline: Timeline
}

impl TimelineEngine {
    pub fn new(config: RatingConfig) -> Result<TimelineEngine> {
        Self::with_model(create_model(config.model), config)
    }

    pub fn with_model(model: Box<dyn RatingModel>, config: RatingConfig) -> Result<TimelineEngine> {
        config.validate()?;

        Ok(TimelineEngine {
            model,
            config,
            state: Snapshot::new(),
            timeline: Timeline::new()
        })
    }

    pub fn process(&mut self, events: &[MatchEvent]) -> Result<()> {
        let bar = progress_bar(events.len() as u64, "Processing match events".to_string());
        for event in events {
            self.process_event(event)?;
            bar.inc(1);
        }
        bar.finish_and_clear();

        Ok(())
    }

    /// # Event processing
    ///
    /// Steps:
    /// 1. Give every player seen for the first time the configured prior.
    /// 2. Rate both teams with the model and write the results back. Players outside
    ///     the event keep their ratings.
    /// 3. Append a copy of the state to the timeline.
    /// 4. Re-run the inactivity penalty over the whole timeline. The next event starts
    ///     from the penalised last snapshot, so penalties compound event by event.
    pub fn process_event(&mut self, event: &MatchEvent) -> Result<()> {
        validate_event(event)?;

        for player in event.players() {
            if self.state.insert_if_absent(player, self.config.prior) {
                debug!(player = player.as_str(), "New player");
            }
        }

        let team1 = gather_ratings(&self.state, &event.team1)?;
        let team2 = gather_ratings(&self.state, &event.team2)?;

        let (new_team1, new_team2) = self.model.rate(&team1, &team2, event.ranks);
        check_team_size(team1.len(), new_team1.len())?;
        check_team_size(team2.len(), new_team2.len())?;

        for (player, rating) in event.team1.iter().zip(new_team1) {
            self.state.insert(player.as_str(), rating);
        }
        for (player, rating) in event.team2.iter().zip(new_team2) {
            self.state.insert(player.as_str(), rating);
        }

        self.timeline.push(self.state.clone());
        apply_inactivity_penalty(&mut self.timeline, &self.config.penalty);

        if let Some(last) = self.timeline.last() {
            self.state = last.clone();
        }

        trace!(
            index = self.timeline.len() - 1,
            team1 = ?event.team1,
            team2 = ?event.team2,
            ranks = ?event.ranks,
            "Processed match event"
        );

        Ok(())
    }

    pub fn state(&self) -> &Snapshot {
        &self.state
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn into_timeline(self) -> Timeline {
        self.timeline
    }
}

/// Folds `events` into a timeline, one snapshot per event.
/// Either every event is processed or an error is returned.
pub fn build_timeline(events: &[MatchEvent], config: RatingConfig) -> Result<Timeline> {
    let mut engine = TimelineEngine::new(config)?;
    engine.process(events)?;

    Ok(engine.into_timeline())
}

/// Ratings of `team` in team order.
pub fn gather_ratings(snapshot: &Snapshot, team: &[String]) -> Result<Vec<Rating>> {
    team.iter().map(|player| snapshot.rating(player)).collect()
}

fn check_team_size(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(KickerError::ModelOutput { expected, actual });
    }

    Ok(())
}

/// Rejects events the rating model cannot express: an empty team, or a player
/// listed twice anywhere in the event.
fn validate_event(event: &MatchEvent) -> Result<()> {
    if event.team1.is_empty() || event.team2.is_empty() {
        return Err(KickerError::EmptyTeam);
    }

    let mut seen = HashSet::new();
    for player in event.players() {
        if !seen.insert(player.as_str()) {
            return Err(KickerError::DuplicatePlayer { player: player.clone() });
        }
    }

    Ok(())
}
