use crate::{
    error::Result,
    model::{
        config::RatingConfig,
        join::{join, split, Segment},
        structures::{options::ProcessingMode, snapshot::SourceTimeline},
        timeline_engine::{build_timeline, TimelineEngine}
    },
    results::loader::SourceEvents
};
use tracing::info;

/// Timelines of one run: one per source plus their concatenation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedRun {
    pub sources: Vec<SourceTimeline>,
    pub full: SourceTimeline
}

/// Rates every source in order.
///
/// In [`ProcessingMode::PerSource`] each source starts from nobody. In
/// [`ProcessingMode::Continuous`] one engine runs over all sources, so ratings and the
/// inactivity look-back cross file boundaries; its timeline is split back per source.
pub fn process_sources(sources: &[SourceEvents], config: RatingConfig, mode: ProcessingMode) -> Result<ProcessedRun> {
    let timelines = match mode {
        ProcessingMode::PerSource => sources
            .iter()
            .map(|source| {
                info!("Rating {} ({} games)", source.label, source.events.len());
                build_timeline(&source.events, config).map(|t| SourceTimeline::new(source.label.as_str(), t))
            })
            .collect::<Result<Vec<_>>>()?,
        ProcessingMode::Continuous => {
            let mut engine = TimelineEngine::new(config)?;
            let mut segments = Vec::with_capacity(sources.len());

            for source in sources {
                info!("Rating {} ({} games)", source.label, source.events.len());
                engine.process(&source.events)?;
                segments.push(Segment {
                    label: source.label.clone(),
                    len: source.events.len()
                });
            }

            split(engine.timeline(), &segments)?
        }
    };

    let full = join(&timelines);
    info!("Processed {} sources, {} games in total", timelines.len(), full.timeline.len());

    Ok(ProcessedRun {
        sources: timelines,
        full
    })
}
