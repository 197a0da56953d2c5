//! # Channel mention formatting
//!
//! Rewrites `~channel` tokens in message text into HTML mention anchors.
//!
//! ## Architecture
//!
//! Formatting is two passes over the message:
//!
//! - **`scan`**: a lexical cursor scan producing [`ScanNode`]s, plain text
//!   runs and candidate mention tokens, as byte spans into the input.
//! - **resolve/emit** (this module): candidate names are looked up in the
//!   channel map (exact, case-sensitive) and rewritten as anchors. Trailing
//!   punctuation is peeled and retried, so `~p2c.` links `p2c` and keeps the
//!   `.` outside the anchor. Unknown names, and every mention when no team
//!   is configured, stay literal text.
//!
//! The formatter is total: it never fails, whatever the input.

pub mod html;
pub mod options;
pub mod scan;

pub use options::FormatOptions;

use crate::models::{ChannelInfo, ChannelNameMap};
use scan::{ScanNode, Span, scan};

/// Formats message text as an HTML fragment.
///
/// Known `~channel` tokens become mention anchors; everything else passes
/// through verbatim. The input is trimmed of surrounding whitespace and the
/// result is wrapped in one `<p>...</p>` element.
pub fn format_text(text: &str, options: &FormatOptions) -> String {
    let text = text.trim();
    let mut inner = String::with_capacity(text.len());

    for node in scan(text, &options.alphabet) {
        match node {
            ScanNode::Text(span) => inner.push_str(span.slice(text)),
            ScanNode::Mention { full, name } => push_mention(&mut inner, text, full, name, options),
        }
    }

    html::paragraph(&inner)
}

/// Emits one mention token: an anchor when it resolves, the literal token
/// text otherwise.
fn push_mention(out: &mut String, text: &str, full: Span, name: Span, options: &FormatOptions) {
    let Some(team) = &options.team else {
        out.push_str(full.slice(text));
        return;
    };

    let candidate = name.slice(text);
    match resolve(candidate, &options.channel_names) {
        Some((channel_name, info)) => {
            let path = html::channel_path(options.basename.as_deref(), team, channel_name);
            out.push_str(&html::mention_anchor(&path, channel_name, &info.display_name));
            // Peeled trailing punctuation stays outside the anchor.
            out.push_str(&candidate[channel_name.len()..]);
        }
        None => out.push_str(full.slice(text)),
    }
}

/// Resolves a candidate name against the channel map.
///
/// Tries the exact name first, then peels trailing punctuation one character
/// at a time and retries, stopping at the first alphanumeric. Returns the
/// resolved name (a prefix of `candidate`) and its descriptor.
fn resolve<'t, 'm>(
    candidate: &'t str,
    channels: &'m ChannelNameMap,
) -> Option<(&'t str, &'m ChannelInfo)> {
    if let Some(info) = channels.get(candidate) {
        return Some((candidate, info));
    }

    let bytes = candidate.as_bytes();
    let mut end = candidate.len();
    while end > 0 {
        if bytes[end - 1].is_ascii_alphanumeric() {
            break;
        }
        end -= 1;
        if let Some(info) = channels.get(&candidate[..end]) {
            return Some((&candidate[..end], info));
        }
    }

    None
}
