use crate::{
    error::{KickerError, Result},
    model::{
        constants::MAX_WINS_PER_ROW,
        structures::match_event::{MatchEvent, Team}
    }
};
use std::cmp::Ordering;

/// One reported result: `team1 \t team2 \t N1,N2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub team1: Team,
    pub team2: Team,
    pub team1_wins: u32,
    pub team2_wins: u32
}

impl ResultRow {
    /// Expands the reported result into single games.
    ///
    /// The games both teams won are paired up and recorded as draws, the remaining
    /// difference as decisive games for the team with more wins. A `2,1` row therefore
    /// yields one draw and one win for team1.
    pub fn expand(&self) -> Vec<MatchEvent> {
        let draws = self.team1_wins.min(self.team2_wins);
        let decisive = self.team1_wins.abs_diff(self.team2_wins);
        let mut events = Vec::with_capacity((draws + decisive) as usize);

        for _ in 0..draws {
            events.push(MatchEvent::draw(self.team1.clone(), self.team2.clone()));
        }

        for _ in 0..decisive {
            let event = match self.team1_wins.cmp(&self.team2_wins) {
                Ordering::Greater => MatchEvent::team1_wins(self.team1.clone(), self.team2.clone()),
                _ => MatchEvent::team2_wins(self.team1.clone(), self.team2.clone())
            };
            events.push(event);
        }

        events
    }
}

/// Parses a single tab-separated line. Blank lines and lines starting with `#` yield `None`.
/// `line_number` is 1-based and only used for error messages.
pub fn parse_row(line: &str, line_number: usize) -> Result<Option<ResultRow>> {
    let columns: Vec<&str> = line.split('\t').collect();

    // Only a '#' in the very first character marks a comment
    if columns[0].trim().is_empty() || columns[0].starts_with('#') {
        return Ok(None);
    }

    if columns.len() < 3 {
        return Err(KickerError::parse(
            line_number,
            format!("expected 3 tab-separated columns, found {}", columns.len())
        ));
    }

    let team1 = parse_team(columns[0], line_number)?;
    let team2 = parse_team(columns[1], line_number)?;
    let (team1_wins, team2_wins) = parse_win_counts(columns[2], line_number)?;

    Ok(Some(ResultRow {
        team1,
        team2,
        team1_wins,
        team2_wins
    }))
}

/// Splits a comma-separated list of player names. Names are trimmed; an empty
/// name means the field is malformed.
pub fn parse_team(field: &str, line_number: usize) -> Result<Team> {
    field
        .split(',')
        .map(|name| {
            let name = name.trim();
            if name.is_empty() {
                Err(KickerError::parse(line_number, format!("empty player name in team '{}'", field)))
            } else {
                Ok(name.to_string())
            }
        })
        .collect()
}

/// Parses `N1,N2` into the win counts of both teams. Counts above
/// [`MAX_WINS_PER_ROW`] are rejected.
pub fn parse_win_counts(field: &str, line_number: usize) -> Result<(u32, u32)> {
    let counts: Vec<&str> = field.split(',').map(str::trim).collect();
    if counts.len() != 2 {
        return Err(KickerError::parse(
            line_number,
            format!("expected win counts as 'N1,N2', found '{}'", field.trim())
        ));
    }

    let parse = |value: &str| -> Result<u32> {
        let wins = value.parse::<u32>().map_err(|_| {
            KickerError::parse(
                line_number,
                format!("win count '{}' is not a non-negative integer", value)
            )
        })?;

        if wins > MAX_WINS_PER_ROW {
            return Err(KickerError::parse(
                line_number,
                format!("win count {} exceeds the limit of {} per row", wins, MAX_WINS_PER_ROW)
            ));
        }

        Ok(wins)
    };

    Ok((parse(counts[0])?, parse(counts[1])?))
}

/// Builds the match events of a whole result file, in file order.
pub fn build_events(input: &str) -> Result<Vec<MatchEvent>> {
    let mut events = Vec::new();

    for (i, line) in input.lines().enumerate() {
        if let Some(row) = parse_row(line, i + 1)? {
            events.extend(row.expand());
        }
    }

    Ok(events)
}
