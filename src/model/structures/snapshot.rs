use crate::{
    error::{KickerError, Result},
    model::structures::rating::Rating
};
use indexmap::IndexMap;
use itertools::Itertools;
use std::ops::Index;

/// Ratings of every known player after one match event.
///
/// Players are kept in first-appearance order. Anything that needs a stable
/// alphabetical order (legends, reports) goes through [`Snapshot::sorted_players`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    ratings: IndexMap<String, Rating>
}

impl Snapshot {
    pub fn new() -> Snapshot {
        Snapshot {
            ratings: IndexMap::new()
        }
    }

    pub fn get(&self, player: &str) -> Option<&Rating> {
        self.ratings.get(player)
    }

    /// Same as [`Snapshot::get`] but a missing player is an error.
    pub fn rating(&self, player: &str) -> Result<Rating> {
        self.ratings
            .get(player)
            .copied()
            .ok_or_else(|| KickerError::UnknownPlayer(player.to_string()))
    }

    pub fn contains(&self, player: &str) -> bool {
        self.ratings.contains_key(player)
    }

    pub fn insert(&mut self, player: impl Into<String>, rating: Rating) {
        self.ratings.insert(player.into(), rating);
    }

    /// Inserts `prior` for the player unless they already have a rating.
    /// Returns true when the player was new.
    pub fn insert_if_absent(&mut self, player: &str, prior: Rating) -> bool {
        if self.ratings.contains_key(player) {
            return false;
        }

        self.ratings.insert(player.to_string(), prior);
        true
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    pub fn players(&self) -> impl Iterator<Item = &String> {
        self.ratings.keys()
    }

    pub fn sorted_players(&self) -> Vec<&String> {
        self.ratings.keys().sorted().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Rating)> {
        self.ratings.iter()
    }

    /// Sum of all means, the quantity moved around by the inactivity penalty.
    pub fn total_mean(&self) -> f64 {
        self.ratings.values().map(|r| r.mean).sum()
    }
}

impl<const N: usize> From<[(&str, Rating); N]> for Snapshot {
    fn from(entries: [(&str, Rating); N]) -> Self {
        let mut snapshot = Snapshot::new();
        for (player, rating) in entries {
            snapshot.insert(player, rating);
        }

        snapshot
    }
}

/// Snapshots in event order. Index 0 is the state after the first event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    snapshots: Vec<Snapshot>
}

impl Timeline {
    pub fn new() -> Timeline {
        Timeline { snapshots: Vec::new() }
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Snapshot> {
        self.snapshots.get_mut(index)
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn extend(&mut self, other: Timeline) {
        self.snapshots.extend(other.snapshots);
    }
}

impl From<Vec<Snapshot>> for Timeline {
    fn from(snapshots: Vec<Snapshot>) -> Self {
        Timeline { snapshots }
    }
}

impl Index<usize> for Timeline {
    type Output = Snapshot;

    fn index(&self, index: usize) -> &Self::Output {
        &self.snapshots[index]
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}

/// One source's timeline, e.g. the games of a single result file.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceTimeline {
    pub label: String,
    pub timeline: Timeline
}

impl SourceTimeline {
    pub fn new(label: impl Into<String>, timeline: Timeline) -> SourceTimeline {
        SourceTimeline {
            label: label.into(),
            timeline
        }
    }
}
