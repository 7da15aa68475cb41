//! Markdown display and source highlighting
//!
//! - [`render`]: comrak-parsed README and blog bodies drawn with egui widgets
//! - [`syntax`]: syntect highlighting for source-style file bodies

pub mod render;
pub mod syntax;

pub use render::{parse_blocks, show_blocks, Block};
pub use syntax::{highlight_code, HighlightCache, HighlightedLine};
