use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Channels known to the formatter, keyed by channel name.
///
/// Keys are matched case-sensitively and must be unique. The map is read-only
/// input for the duration of one formatting call.
pub type ChannelNameMap = HashMap<String, ChannelInfo>;

/// Descriptor for a channel that message text may reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelInfo {
    /// Human-readable label shown in place of the raw channel name. May
    /// contain HTML-special characters; rendering escapes them.
    pub display_name: String,
}

impl ChannelInfo {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }
}

/// The team whose channels mention links point into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// URL slug for the team, used as the leading path segment of links.
    pub name: String,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
