//! # Block Parsing
//!
//! Splits a document into blocks, classifies each one, and lowers it to an
//! HTML subtree.
//!
//! ## Phases
//!
//! 1. **Splitting** (`split`): blank lines separate blocks; fenced code is a
//!    raw zone that blank lines cannot split
//! 2. **Classification** (`classify`): each block gets exactly one `BlockType`,
//!    by fixed precedence with paragraph as the catch-all
//! 3. **Lowering** (`lower`): each block becomes a parent node, running the
//!    inline parser over everything except code
//!
//! ## Modules
//!
//! - **`types`**: `BlockType`, `Block`
//! - **`kinds`**: Block-specific types with owned markers (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList)
//! - **`split`**, **`classify`**, **`lower`**: the three phases above

pub mod classify;
pub mod kinds;
pub mod lower;
pub mod split;
pub mod types;

pub use classify::classify;
pub use lower::lower;
pub use split::split_blocks;
pub use types::{Block, BlockType};

use crate::{html::HtmlNode, parsing::error::MarkdownError};

/// Splits and classifies a document.
pub fn parse_blocks(doc: &str) -> Vec<Block<'_>> {
    split_blocks(doc)
        .into_iter()
        .map(|text| Block {
            text,
            kind: classify(text),
        })
        .collect()
}

impl Block<'_> {
    pub fn lower(&self) -> Result<HtmlNode, MarkdownError> {
        lower(self.text, self.kind)
    }
}
