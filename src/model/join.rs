use crate::{
    error::{KickerError, Result},
    model::{
        constants::FULL_TIMELINE_LABEL,
        structures::snapshot::{SourceTimeline, Timeline}
    }
};

/// Label and length of one source's part of a joined timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub label: String,
    pub len: usize
}

/// Concatenates the timelines in source order.
pub fn join(sources: &[SourceTimeline]) -> SourceTimeline {
    let mut timeline = Timeline::new();
    for source in sources {
        timeline.extend(source.timeline.clone());
    }

    SourceTimeline::new(FULL_TIMELINE_LABEL, timeline)
}

pub fn segments(sources: &[SourceTimeline]) -> Vec<Segment> {
    sources
        .iter()
        .map(|source| Segment {
            label: source.label.clone(),
            len: source.timeline.len()
        })
        .collect()
}

/// Cuts a joined timeline back into its sources. The segment lengths must add up
/// to the length of the joined timeline.
pub fn split(joined: &Timeline, segments: &[Segment]) -> Result<Vec<SourceTimeline>> {
    let covered: usize = segments.iter().map(|s| s.len).sum();
    if covered != joined.len() {
        return Err(KickerError::SegmentMismatch {
            expected: joined.len(),
            actual: covered
        });
    }

    let mut start = 0;
    let mut sources = Vec::with_capacity(segments.len());
    for segment in segments {
        let end = start + segment.len;
        let timeline = Timeline::from(joined.snapshots()[start..end].to_vec());
        sources.push(SourceTimeline::new(segment.label.clone(), timeline));
        start = end;
    }

    Ok(sources)
}
