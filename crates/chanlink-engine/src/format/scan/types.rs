/// A byte range `[start, end)` into the message text being scanned.
///
/// Scan nodes store spans rather than copied text; slicing the input with any
/// node's span reproduces the exact source substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Extracts the text for this span from the input it was produced over.
    #[must_use]
    pub fn slice(self, text: &str) -> &str {
        &text[self.start..self.end]
    }
}

/// A scanned run of message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanNode {
    /// Plain text that isn't part of any mention token.
    Text(Span),
    /// A `~name` channel mention token.
    Mention {
        /// Full span including the sigil.
        full: Span,
        /// Span of the candidate channel name (sigil excluded).
        name: Span,
    },
}

impl ScanNode {
    /// The full span covered by this node.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            ScanNode::Text(sp) => *sp,
            ScanNode::Mention { full, .. } => *full,
        }
    }
}
