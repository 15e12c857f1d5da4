use crate::model::constants::{DRAW, TEAM1_WINS, TEAM2_WINS};

pub type Team = Vec<String>;

/// A single game between two teams.
///
/// `ranks` follows the placement convention of the rating models: the lower rank
/// placed better, equal ranks are a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEvent {
    pub team1: Team,
    pub team2: Team,
    pub ranks: [usize; 2]
}

impl MatchEvent {
    pub fn new(team1: Team, team2: Team, ranks: [usize; 2]) -> MatchEvent {
        MatchEvent { team1, team2, ranks }
    }

    pub fn draw(team1: Team, team2: Team) -> MatchEvent {
        MatchEvent::new(team1, team2, DRAW)
    }

    pub fn team1_wins(team1: Team, team2: Team) -> MatchEvent {
        MatchEvent::new(team1, team2, TEAM1_WINS)
    }

    pub fn team2_wins(team1: Team, team2: Team) -> MatchEvent {
        MatchEvent::new(team1, team2, TEAM2_WINS)
    }

    pub fn is_draw(&self) -> bool {
        self.ranks[0] == self.ranks[1]
    }

    /// All players of both teams, team1 first.
    pub fn players(&self) -> impl Iterator<Item = &String> {
        self.team1.iter().chain(self.team2.iter())
    }
}
