use crate::{
    error::{KickerError, Result},
    model::structures::match_event::MatchEvent,
    results::parser::build_events
};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf}
};
use tracing::{debug, info};

/// Match events of one result file.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceEvents {
    pub label: String,
    pub events: Vec<MatchEvent>
}

pub fn load_events(path: &Path) -> Result<Vec<MatchEvent>> {
    let content = fs::read_to_string(path).map_err(|e| KickerError::io(path, e))?;
    let events = build_events(&content)?;
    debug!(path = %path.display(), events = events.len(), "Loaded result file");

    Ok(events)
}

/// Lists the files in `dir` with the given extension, sorted by path.
pub fn result_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| KickerError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| KickerError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path);
        }
    }
    files.sort();

    info!("Found {} result files in {}", files.len(), dir.display());
    Ok(files)
}

/// Builds the events of every file. Files are parsed in parallel but the result
/// keeps the order of `files`; each entry fails or succeeds on its own.
pub fn load_sources(files: &[PathBuf]) -> Vec<Result<SourceEvents>> {
    files
        .par_iter()
        .map(|path| {
            load_events(path).map(|events| SourceEvents {
                label: source_label(path),
                events
            })
        })
        .collect()
}

/// File stem, or the whole path if there is none.
pub fn source_label(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
