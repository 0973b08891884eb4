use crate::html::{Attributes, HtmlNode, LeafNode, tags};

use super::types::InlineToken;

/// Lowers one inline token to a leaf node.
///
/// Plain text becomes an untagged leaf; images become an empty `img` leaf
/// with `src` then `alt`.
pub fn to_node(token: InlineToken) -> HtmlNode {
    let leaf = match token {
        InlineToken::Plain(text) => LeafNode::text(text),
        InlineToken::Bold(text) => LeafNode::new(tags::BOLD, text),
        InlineToken::Italic(text) => LeafNode::new(tags::ITALIC, text),
        InlineToken::Code(text) => LeafNode::new(tags::CODE, text),
        InlineToken::Link { text, url } => {
            LeafNode::new(tags::ANCHOR, text).with_attributes(Attributes::new().with("href", url))
        }
        InlineToken::Image { alt, url } => LeafNode::new(tags::IMAGE, "")
            .with_attributes(Attributes::new().with("src", url).with("alt", alt)),
    };
    leaf.into()
}

pub fn to_nodes(tokens: Vec<InlineToken>) -> Vec<HtmlNode> {
    tokens.into_iter().map(to_node).collect()
}
