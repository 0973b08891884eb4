pub mod html;
pub mod parsing;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{Attributes, HtmlNode, LeafNode, ParentNode, prettify};
pub use parsing::{
    blocks::{Block, BlockType, classify, lower, split_blocks},
    build_document,
    error::MarkdownError,
    inline::{InlineToken, TokenKind, parse_inline, to_node},
    markdown_to_html,
};
pub use site::{SiteError, SiteLayout, SiteReport, build_site};
