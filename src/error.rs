use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KickerError {
    #[error("Failed to parse line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Player {0} has no rating in the current snapshot")]
    UnknownPlayer(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Player {player} appears more than once in a single match")]
    DuplicatePlayer { player: String },

    #[error("Match event contains an empty team")]
    EmptyTeam,

    #[error("Rating model returned {actual} ratings for a team of {expected}")]
    ModelOutput { expected: usize, actual: usize },

    #[error("Segment lengths cover {actual} snapshots but the timeline has {expected}")]
    SegmentMismatch { expected: usize, actual: usize },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error
    },

    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No result files found in {}", .0.display())]
    NoResultFiles(PathBuf)
}

impl KickerError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        KickerError::Parse {
            line,
            message: message.into()
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        KickerError::Io {
            path: path.into(),
            source
        }
    }
}

pub type Result<T> = std::result::Result<T, KickerError>;
