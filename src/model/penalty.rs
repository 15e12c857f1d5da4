use crate::model::{
    config::PenaltyConfig,
    structures::snapshot::{Snapshot, Timeline}
};
use tracing::debug;

/// What a single penalty application did to one snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PenaltyApplication {
    pub index: usize,
    pub idle: Vec<String>,
    pub active: Vec<String>,
    /// Sum of the deltas taken from idle players (signed)
    pub removed: f64,
    /// Mass actually handed to active players
    pub redistributed: f64
}

impl PenaltyApplication {
    /// Mass that left the snapshot because nobody was active to receive it.
    pub fn discarded(&self) -> f64 {
        if self.active.is_empty() {
            self.removed
        } else {
            0.0
        }
    }
}

/// # How this works
/// - Every snapshot from index `missed_games + 1` onwards is inspected in order.
/// - A player is active at index i when, somewhere in the `missed_games - 1`
///     snapshots before i, they were missing or had a different mean.
/// - Every other player at i is idle and loses `mean * penalty_fraction`.
/// - The absolute value of each idle player's loss is shared evenly between the
///     active players of the same snapshot. Without active players it is lost.
///
/// # Rules
/// - Standard deviations are never touched.
/// - Snapshots are edited in place, so later indices see the penalised values
///     of earlier ones.
/// - Running the pass twice over the same span is not a no-op: a penalised player
///     looks active to the second run.
///
/// Returns one entry per snapshot that had idle players.
pub fn apply_inactivity_penalty(timeline: &mut Timeline, config: &PenaltyConfig) -> Vec<PenaltyApplication> {
    let mut applications = Vec::new();

    for index in (config.missed_games + 1)..timeline.len() {
        if let Some(application) = penalize_snapshot(timeline, index, config) {
            applications.push(application);
        }
    }

    applications
}

/// Applies the penalty to the snapshot at `index` only.
/// Returns `None` when the index is out of range or nobody is idle.
pub fn penalize_snapshot(
    timeline: &mut Timeline,
    index: usize,
    config: &PenaltyConfig
) -> Option<PenaltyApplication> {
    let snapshot = timeline.get(index)?;

    let (active, idle): (Vec<String>, Vec<String>) = snapshot
        .players()
        .cloned()
        .partition(|player| is_active(timeline, index, player, config.missed_games));

    if idle.is_empty() {
        return None;
    }

    let snapshot = timeline.get_mut(index)?;
    let mut removed = 0.0;
    let mut redistributed = 0.0;

    for player in &idle {
        let delta = penalize_player(snapshot, player, config.penalty_fraction);
        removed += delta;

        if !active.is_empty() {
            let share = delta.abs() / active.len() as f64;
            for receiver in &active {
                reward_player(snapshot, receiver, share);
            }
            redistributed += delta.abs();
        }
    }

    debug!(
        index,
        idle = idle.len(),
        active = active.len(),
        removed,
        redistributed,
        "Applied inactivity penalty"
    );

    Some(PenaltyApplication {
        index,
        idle,
        active,
        removed,
        redistributed
    })
}

/// Returns true if the player was missing, or had a different mean, in any of the
/// `missed_games - 1` snapshots preceding `index`.
fn is_active(timeline: &Timeline, index: usize, player: &str, missed_games: usize) -> bool {
    let current = match timeline.get(index).and_then(|s| s.get(player)) {
        Some(rating) => rating.mean,
        None => return false
    };

    (1..missed_games).any(|j| {
        match index.checked_sub(j).and_then(|k| timeline.get(k)).and_then(|s| s.get(player)) {
            Some(previous) => previous.mean != current,
            None => true
        }
    })
}

/// Lowers the player's mean by `fraction` of itself and returns the delta.
fn penalize_player(snapshot: &mut Snapshot, player: &str, fraction: f64) -> f64 {
    match snapshot.get(player).copied() {
        Some(rating) => {
            let delta = rating.mean * fraction;
            snapshot.insert(player, rating.with_mean(rating.mean - delta));
            delta
        }
        None => 0.0
    }
}

fn reward_player(snapshot: &mut Snapshot, player: &str, amount: f64) {
    if let Some(rating) = snapshot.get(player).copied() {
        snapshot.insert(player, rating.with_mean(rating.mean + amount));
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        model::{
            config::PenaltyConfig,
            penalty::{apply_inactivity_penalty, penalize_snapshot},
            structures::{
                rating::Rating,
                snapshot::{Snapshot, Timeline}
            }
        },
        utils::test_utils::timeline_from_means
    };
    use approx::assert_abs_diff_eq;

    fn config(missed_games: usize, penalty_fraction: f64) -> PenaltyConfig {
        PenaltyConfig::new(missed_games, penalty_fraction).unwrap()
    }

    fn mean(timeline: &Timeline, index: usize, player: &str) -> f64 {
        timeline[index].get(player).unwrap().mean
    }

    #[test]
    fn test_no_penalty_inside_the_first_window() {
        // missed_games + 1 snapshots: the first inspected index does not exist yet
        let mut timeline = timeline_from_means(&[("A", &[10.0; 4]), ("B", &[20.0; 4])]);
        let original = timeline.clone();

        let applications = apply_inactivity_penalty(&mut timeline, &config(3, 0.1));

        assert!(applications.is_empty());
        assert_eq!(timeline, original);
    }

    #[test]
    fn test_first_application_is_at_missed_games_plus_one() {
        let mut timeline = timeline_from_means(&[("A", &[10.0; 5]), ("B", &[1.0, 2.0, 3.0, 4.0, 5.0])]);

        let applications = apply_inactivity_penalty(&mut timeline, &config(3, 0.1));

        assert_eq!(applications.len(), 1);
        assert_eq!(applications[0].index, 4);
        for index in 0..4 {
            assert_eq!(mean(&timeline, index, "A"), 10.0);
        }
    }

    #[test]
    fn test_idle_player_loses_exactly_the_fraction() {
        let mut timeline = timeline_from_means(&[("A", &[10.0; 5]), ("B", &[1.0, 2.0, 3.0, 4.0, 5.0])]);

        let applications = apply_inactivity_penalty(&mut timeline, &config(3, 0.1));

        assert_eq!(applications[0].idle, vec!["A".to_string()]);
        assert_eq!(applications[0].active, vec!["B".to_string()]);
        assert_abs_diff_eq!(mean(&timeline, 4, "A"), 10.0 - 10.0 * 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(mean(&timeline, 4, "B"), 5.0 + 10.0 * 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_std_dev_is_never_changed() {
        let mut timeline = timeline_from_means(&[("A", &[10.0; 5]), ("B", &[1.0, 2.0, 3.0, 4.0, 5.0])]);

        apply_inactivity_penalty(&mut timeline, &config(3, 0.1));

        for snapshot in &timeline {
            for (_, rating) in snapshot.iter() {
                assert_eq!(rating.std_dev, 1.0);
            }
        }
    }

    #[test]
    fn test_mass_is_conserved_with_active_players() {
        let mut timeline = timeline_from_means(&[
            ("A", &[10.0; 5]),
            ("B", &[7.0; 5]),
            ("C", &[1.0, 2.0, 3.0, 4.0, 5.0]),
            ("D", &[3.0, 1.0, 4.0, 1.0, 5.0])
        ]);
        let before = timeline[4].total_mean();

        let application = penalize_snapshot(&mut timeline, 4, &config(3, 0.1)).unwrap();

        assert_eq!(application.idle.len(), 2);
        assert_eq!(application.active.len(), 2);
        assert_abs_diff_eq!(application.removed, 1.7, epsilon = 1e-12);
        assert_abs_diff_eq!(application.redistributed, 1.7, epsilon = 1e-12);
        assert_eq!(application.discarded(), 0.0);
        assert_abs_diff_eq!(timeline[4].total_mean(), before, epsilon = 1e-9);
    }

    #[test]
    fn test_mass_is_discarded_without_active_players() {
        let mut timeline = timeline_from_means(&[("A", &[10.0; 5]), ("B", &[20.0; 5])]);
        let before = timeline[4].total_mean();

        let application = penalize_snapshot(&mut timeline, 4, &config(3, 0.25)).unwrap();

        assert!(application.active.is_empty());
        assert_eq!(application.redistributed, 0.0);
        assert_eq!(application.discarded(), 7.5);
        assert_eq!(timeline[4].total_mean(), before - 7.5);
    }

    #[test]
    fn test_newly_seen_player_counts_as_active() {
        let mut timeline = timeline_from_means(&[("A", &[8.0; 5])]);
        timeline.get_mut(3).unwrap().insert("C", Rating::new(2.0, 1.0));
        timeline.get_mut(4).unwrap().insert("C", Rating::new(2.0, 1.0));

        let application = penalize_snapshot(&mut timeline, 4, &config(3, 0.25)).unwrap();

        // C did not exist at index 2, so it is still inside its activity window
        assert_eq!(application.active, vec!["C".to_string()]);
        assert_eq!(mean(&timeline, 4, "C"), 4.0);
        assert_eq!(mean(&timeline, 4, "A"), 6.0);
    }

    #[test]
    fn test_change_anywhere_in_window_keeps_player_active() {
        // Only index 2 differs; it is within missed_games - 1 = 2 of index 4
        let mut timeline = timeline_from_means(&[("A", &[8.0, 8.0, 9.0, 8.0, 8.0]), ("B", &[4.0; 5])]);

        let application = penalize_snapshot(&mut timeline, 4, &config(3, 0.25)).unwrap();

        assert_eq!(application.active, vec!["A".to_string()]);
        assert_eq!(application.idle, vec!["B".to_string()]);
    }

    #[test]
    fn test_change_outside_window_is_ignored() {
        // Index 1 is j = 3 away from index 4, outside the window for missed_games = 3
        let mut timeline = timeline_from_means(&[("A", &[8.0, 9.0, 8.0, 8.0, 8.0]), ("B", &[4.0; 5])]);

        let application = penalize_snapshot(&mut timeline, 4, &config(3, 0.25)).unwrap();

        assert!(application.active.is_empty());
        assert_eq!(application.idle.len(), 2);
    }

    #[test]
    fn test_single_missed_game_marks_everyone_idle() {
        let mut timeline = timeline_from_means(&[("A", &[1.0, 2.0, 3.0]), ("B", &[4.0, 6.0, 8.0])]);

        let applications = apply_inactivity_penalty(&mut timeline, &config(1, 0.25));

        assert_eq!(applications.len(), 1);
        assert_eq!(applications[0].index, 2);
        assert!(applications[0].active.is_empty());
        assert_eq!(mean(&timeline, 2, "A"), 2.25);
        assert_eq!(mean(&timeline, 2, "B"), 6.0);
    }

    #[test]
    fn test_negative_mean_shrinks_towards_zero() {
        let mut timeline = timeline_from_means(&[("A", &[-8.0; 5]), ("B", &[1.0, 2.0, 3.0, 4.0, 5.0])]);

        let application = penalize_snapshot(&mut timeline, 4, &config(3, 0.25)).unwrap();

        assert_eq!(application.removed, -2.0);
        assert_eq!(mean(&timeline, 4, "A"), -6.0);
        // The active side still receives the absolute value
        assert_eq!(mean(&timeline, 4, "B"), 7.0);
    }

    #[test]
    fn test_out_of_range_index() {
        let mut timeline = timeline_from_means(&[("A", &[1.0; 3])]);

        assert!(penalize_snapshot(&mut timeline, 3, &config(1, 0.1)).is_none());
    }

    #[test]
    fn test_pass_is_not_idempotent() {
        let mut timeline = timeline_from_means(&[("A", &[8.0; 4]), ("B", &[0.0, 0.0, 5.0, 3.0])]);
        let penalty = config(2, 0.25);

        apply_inactivity_penalty(&mut timeline, &penalty);
        assert_eq!(mean(&timeline, 3, "A"), 6.0);
        assert_eq!(mean(&timeline, 3, "B"), 5.0);
        let once = timeline.clone();

        // B now equals its previous mean and A differs from its own, so the roles swap
        let applications = apply_inactivity_penalty(&mut timeline, &penalty);

        assert_ne!(timeline, once);
        assert_eq!(applications[0].idle, vec!["B".to_string()]);
        assert_eq!(mean(&timeline, 3, "B"), 3.75);
        assert_eq!(mean(&timeline, 3, "A"), 7.25);
    }

    #[test]
    fn test_later_indices_see_penalised_values() {
        // B reaches 5.0 at index 3 only after the penalty, which makes it idle at index 4
        let mut timeline = timeline_from_means(&[("A", &[8.0, 8.0, 8.0, 8.0, 7.0]), ("B", &[0.0, 0.0, 1.0, 3.0, 5.0])]);

        let applications = apply_inactivity_penalty(&mut timeline, &config(2, 0.25));

        assert_eq!(applications.len(), 2);
        assert_eq!(applications[1].index, 4);
        assert_eq!(applications[1].idle, vec!["B".to_string()]);
    }

    #[test]
    fn test_player_missing_from_snapshot_is_ignored() {
        let mut timeline = Timeline::from(vec![Snapshot::new(); 4]);

        assert!(apply_inactivity_penalty(&mut timeline, &config(1, 0.1)).is_empty());
    }
}
