//! Source tag presentation: flat, or bucketed into fixed categories.

use strum::IntoEnumIterator;

use crate::config::{RENDER, SourceLayout};
use crate::models::{SourceBucket, SourceGroup, SourcesView};

/// Which bucket a tag belongs to, and the text to show for it.
/// `None` means the tag matches no category and is dropped.
pub(crate) fn classify_source(source: &str) -> Option<(SourceBucket, String)> {
    if source.contains(RENDER.sr_zone_marker) {
        return Some((SourceBucket::SrZones, source.to_string()));
    }
    if RENDER
        .key_level_markers
        .iter()
        .any(|marker| source.contains(marker))
    {
        return Some((SourceBucket::KeyLevels, source.to_string()));
    }
    RENDER
        .timeframe_buckets
        .iter()
        .find(|(tf, _)| source.starts_with(tf))
        .map(|(tf, bucket)| (*bucket, source.replacen(&format!("{} ", tf), "", 1)))
}

/// Buckets in fixed display order, empty ones omitted.
pub(crate) fn group_sources(sources: &[String]) -> Vec<SourceGroup> {
    let mut groups: Vec<SourceGroup> = SourceBucket::iter()
        .map(|bucket| SourceGroup {
            bucket,
            items: Vec::new(),
        })
        .collect();

    for source in sources {
        match classify_source(source) {
            Some((bucket, text)) => {
                if let Some(group) = groups.iter_mut().find(|g| g.bucket == bucket) {
                    group.items.push(text);
                }
            }
            None => log::trace!("Dropping uncategorised source tag {:?}", source),
        }
    }

    groups.retain(|g| !g.items.is_empty());
    groups
}

pub(crate) fn sources_view(sources: &[String], layout: SourceLayout) -> SourcesView {
    match layout {
        SourceLayout::Flat => SourcesView::Flat(sources.to_vec()),
        SourceLayout::Grouped => SourcesView::Grouped(group_sources(sources)),
    }
}
