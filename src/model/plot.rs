use crate::model::structures::{options::LegendOrder, snapshot::Timeline};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    /// 1-based position inside the plotted window
    pub game: usize,
    pub mean: f64,
    pub std_dev: f64
}

/// Skill history of one player, ready to be drawn as an error-bar line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSeries {
    pub player: String,
    /// Legend entry: name followed by the final mean
    pub label: String,
    pub final_mean: f64,
    pub points: Vec<PlotPoint>
}

/// Extracts one series per player of the final snapshot.
///
/// `window` restricts the output to the most recent snapshots (used to plot a single
/// source out of a joined timeline); `None` plots the whole history. Snapshots in which
/// a player does not exist yet are plotted as zero mean and zero deviation.
pub fn extract_plot_data(timeline: &Timeline, window: Option<usize>, order: LegendOrder) -> Vec<PlotSeries> {
    let last = match timeline.last() {
        Some(last) => last,
        None => return Vec::new()
    };

    let len = window.map_or(timeline.len(), |w| w.min(timeline.len()));
    let plotted = &timeline.snapshots()[timeline.len() - len..];

    let series = last.sorted_players().into_iter().map(|player| {
        let final_mean = last.get(player).map_or(0.0, |r| r.mean);
        let points = plotted
            .iter()
            .enumerate()
            .map(|(i, snapshot)| {
                let (mean, std_dev) = snapshot.get(player).map_or((0.0, 0.0), |r| (r.mean, r.std_dev));
                PlotPoint {
                    game: i + 1,
                    mean,
                    std_dev
                }
            })
            .collect();

        PlotSeries {
            player: player.clone(),
            label: legend_label(player, final_mean),
            final_mean,
            points
        }
    });

    match order {
        LegendOrder::Name => series.collect(),
        LegendOrder::Skill => series
            .sorted_by(|a, b| b.final_mean.total_cmp(&a.final_mean))
            .collect()
    }
}

pub fn legend_label(player: &str, final_mean: f64) -> String {
    format!("{} {:.1}", player, final_mean)
}
