//! # Mention scanning
//!
//! Cursor-based lexical scan for `~channel` mention tokens.
//!
//! ## Modules
//!
//! - **`types`**: `Span` and the `ScanNode` enum (Text, Mention)
//! - **`mention`**: mention syntax: the sigil constant, the word-boundary
//!   rule, and the configurable [`NameAlphabet`]
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`scanner`**: `scan()` main entry point with its `try_scan_*` helper
//!
//! ## Scope
//!
//! The scan is purely lexical: it recognizes token shape only. Whether a
//! candidate name resolves to a known channel is the formatter's concern,
//! decided after the scan.

pub mod cursor;
pub mod mention;
pub mod scanner;
pub mod types;

pub use mention::{ChannelMention, NameAlphabet};
pub use scanner::scan;
pub use types::{ScanNode, Span};
