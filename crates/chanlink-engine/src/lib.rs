pub mod format;
pub mod models;

// Re-export key types for easier usage
pub use format::{FormatOptions, format_text, scan::NameAlphabet};
pub use models::channel::*;
