mod snapshot;
mod tab;
mod view;

pub use snapshot::{Confidence, Sentiment, Snapshot, SnapshotError, ZoneEntry};
pub use tab::Tab;
pub use view::{
    ConfidenceBadge, DashboardView, PriceCard, PriceMove, SourceBucket, SourceGroup, SourcesView,
    TextCard, Tone, ToneSet, ZoneCardView, ZoneContainer, ZoneDirection, ZoneListView,
};
