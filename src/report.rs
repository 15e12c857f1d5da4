use crate::{
    error::{KickerError, Result},
    model::{
        plot::{extract_plot_data, PlotSeries},
        structures::{options::LegendOrder, snapshot::SourceTimeline}
    }
};
use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf}
};
use tracing::info;

/// Plot data of one timeline, as handed to an external renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotReport {
    pub label: String,
    pub generated_at: DateTime<Utc>,
    pub games: usize,
    pub series: Vec<PlotSeries>
}

impl PlotReport {
    pub fn new(source: &SourceTimeline, window: Option<usize>, order: LegendOrder) -> PlotReport {
        let series = extract_plot_data(&source.timeline, window, order);
        let games = series.first().map_or(0, |s| s.points.len());

        PlotReport {
            label: source.label.clone(),
            generated_at: Utc::now(),
            games,
            series
        }
    }

    /// File name derived from the label, e.g. `Full_Timeline.json`.
    pub fn file_name(&self) -> String {
        let stem: String = self
            .label
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();

        format!("{}.json", stem)
    }
}

pub fn write_report(dir: &Path, report: &PlotReport) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| KickerError::io(dir, e))?;

    let path = dir.join(report.file_name());
    let json = serde_json::to_string_pretty(report)?;
    fs::write(&path, json).map_err(|e| KickerError::io(&path, e))?;

    info!("Wrote {}", path.display());
    Ok(path)
}

/// Final standings of a report, best first.
pub fn render_summary(report: &PlotReport) -> String {
    let header = format!("{} ({} games)", report.label, report.games);
    let rows = report
        .series
        .iter()
        .sorted_by(|a, b| b.final_mean.total_cmp(&a.final_mean))
        .enumerate()
        .map(|(i, series)| {
            let std_dev = series.points.last().map_or(0.0, |p| p.std_dev);
            format!("{:>3}. {:<20} {:>7.1} ± {:.1}", i + 1, series.player, series.final_mean, std_dev)
        });

    std::iter::once(header).chain(rows).join("\n")
}
