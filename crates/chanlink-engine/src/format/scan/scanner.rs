use super::{
    cursor::Cursor,
    mention::{ChannelMention, NameAlphabet},
    types::{ScanNode, Span},
};

/// Scans message text into a sequence of [`ScanNode`]s.
///
/// # Arguments
/// - `text`: The message text to scan
/// - `alphabet`: Characters legal inside a channel name
///
/// # Returns
/// A vector of nodes covering the entire input. Text between mention tokens
/// is emitted as `ScanNode::Text`.
pub fn scan(text: &str, alphabet: &NameAlphabet) -> Vec<ScanNode> {
    let mut cur = Cursor::new(text);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<ScanNode>, start: usize, end: usize) {
        if end > start {
            out.push(ScanNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if let Some(node) = try_scan_mention(&mut cur, alphabet) {
            flush_text(&mut out, text_start, node.span().start);
            text_start = node.span().end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to scan a mention token starting at the current position.
///
/// Returns `None` when not at a sigil, when the sigil sits inside a word, or
/// when no name characters follow. On failure, cursor position is restored.
fn try_scan_mention(cur: &mut Cursor<'_>, alphabet: &NameAlphabet) -> Option<ScanNode> {
    if cur.peek() != Some(ChannelMention::SIGIL) {
        return None;
    }
    if !ChannelMention::opens_after(cur.prev()) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // ~
    let name_start = cur.pos();

    while let Some(b) = cur.peek() {
        if !alphabet.contains(b) {
            break;
        }
        cur.bump();
    }
    let name_end = cur.pos();

    if name_end == name_start {
        // Bare sigil, restore cursor
        *cur = saved;
        return None;
    }

    Some(ScanNode::Mention {
        full: Span {
            start,
            end: name_end,
        },
        name: Span {
            start: name_start,
            end: name_end,
        },
    })
}
