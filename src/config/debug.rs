//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Emit a line for every snapshot the feed thread delivers or rejects.
    pub log_feed: bool,

    /// One-line summary after each render pass (price move, card counts).
    pub log_render: bool,

    /// Tab switches from the tab bar.
    pub log_tabs: bool,

    /// Persisted UI state on save/restore.
    pub log_persistence: bool,
}

pub const DF: LogFlags = LogFlags {
    log_feed: true,
    log_render: false,
    log_tabs: false,
    log_persistence: false,
};
