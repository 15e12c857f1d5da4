use crate::model::structures::{
    match_event::MatchEvent,
    rating::Rating,
    snapshot::{Snapshot, Timeline}
};
use rand::{seq::IndexedRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Builds a timeline where snapshot i holds `means[i]` for every listed player.
/// All standard deviations are 1.0.
pub fn timeline_from_means(players: &[(&str, &[f64])]) -> Timeline {
    let len = players.iter().map(|(_, means)| means.len()).max().unwrap_or(0);
    let mut timeline = Timeline::new();

    for i in 0..len {
        let mut snapshot = Snapshot::new();
        for (player, means) in players {
            if let Some(mean) = means.get(i) {
                snapshot.insert(*player, Rating::new(*mean, 1.0));
            }
        }
        timeline.push(snapshot);
    }

    timeline
}

pub fn team(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// Generates `n_events` 2v2 games between players drawn from a pool of `n_players`.
/// Seeded so results are reproducible.
pub fn generate_events(n_events: usize, n_players: usize, seed: u64) -> Vec<MatchEvent> {
    if n_players < 4 {
        panic!("At least 4 players are needed for 2v2 games");
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let pool: Vec<String> = (0..n_players).map(|i| format!("Player{}", i)).collect();
    let mut events = Vec::with_capacity(n_events);

    for _ in 0..n_events {
        let picked: Vec<String> = pool.choose_multiple(&mut rng, 4).cloned().collect();
        let ranks = match rng.random_range(0..10) {
            0 => [0, 0],
            1..=5 => [0, 1],
            _ => [1, 0]
        };

        events.push(MatchEvent::new(picked[0..2].to_vec(), picked[2..4].to_vec(), ranks));
    }

    events
}
