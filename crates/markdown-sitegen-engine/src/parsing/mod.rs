//! # Markdown Pipeline
//!
//! raw text → blocks → (block type, inline tokens) → HTML subtrees → document.
//!
//! Every stage is a pure function over owned or borrowed strings; nothing is
//! shared between documents, so separate documents can be processed on
//! separate threads without coordination.

pub mod blocks;
pub mod error;
pub mod inline;

use log::debug;

use crate::html::{HtmlNode, tags};

use blocks::parse_blocks;
use error::MarkdownError;

/// Builds the HTML tree for a whole markdown document.
///
/// The root is a `div` whose children are the per-block subtrees in document
/// order.
///
/// # Errors
/// [`MarkdownError::EmptyDocument`] when the text holds no blocks; otherwise
/// the first error raised by any block aborts the whole document.
pub fn build_document(markdown: &str) -> Result<HtmlNode, MarkdownError> {
    let blocks = parse_blocks(markdown);
    if blocks.is_empty() {
        return Err(MarkdownError::EmptyDocument);
    }

    let children = blocks
        .iter()
        .map(|block| {
            debug!("lowering {} block ({} bytes)", block.kind, block.text.len());
            block.lower()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HtmlNode::parent(tags::DOCUMENT, children))
}

/// Convenience: build and render in one step.
pub fn markdown_to_html(markdown: &str) -> Result<String, MarkdownError> {
    build_document(markdown)?.render()
}

#[cfg(test)]
mod tests;
