use super::scan::NameAlphabet;
use crate::models::{ChannelNameMap, Team};

/// Options for one [`format_text`](super::format_text) call.
///
/// The default value formats everything as plain text: no channels, no team,
/// no basename, conventional name alphabet.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Channels that may be referenced from message text, keyed by name.
    pub channel_names: ChannelNameMap,
    /// Team whose channels mentions link to. When absent, mentions stay
    /// literal text.
    pub team: Option<Team>,
    /// URL prefix for deployments served from a sub-path, prepended to every
    /// generated href.
    pub basename: Option<String>,
    /// Characters legal inside a channel name.
    pub alphabet: NameAlphabet,
}
