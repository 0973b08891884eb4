use crate::{
    html::{HtmlNode, tags},
    parsing::{
        error::MarkdownError,
        inline::{parse_inline, to_nodes},
    },
};

use super::{
    kinds::{BlockQuote, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Lowers a classified block into its HTML subtree.
///
/// # Errors
/// Inline parse failures propagate. A block whose lines do not carry the
/// markers its kind requires, or whose inline content comes out empty,
/// fails with [`MarkdownError::MalformedBlock`].
pub fn lower(block: &str, kind: BlockType) -> Result<HtmlNode, MarkdownError> {
    match kind {
        BlockType::Paragraph => paragraph_to_node(block),
        BlockType::Heading { level } => heading_to_node(block, level),
        BlockType::Code => code_to_node(block),
        BlockType::Quote => quote_to_node(block),
        BlockType::UnorderedList => unordered_list_to_node(block),
        BlockType::OrderedList => ordered_list_to_node(block),
    }
}

fn paragraph_to_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    let text = block.lines().collect::<Vec<_>>().join(" ");
    let children = inline_children(&text, BlockType::Paragraph)?;
    Ok(HtmlNode::parent(tags::PARAGRAPH, children))
}

fn heading_to_node(block: &str, level: u8) -> Result<HtmlNode, MarkdownError> {
    let kind = BlockType::Heading { level };
    let text = Heading::strip(block, level)
        .ok_or_else(|| malformed(kind, format!("expected {level} '#' and a space")))?;
    let children = inline_children(text, kind)?;
    Ok(HtmlNode::parent(tags::heading(level), children))
}

/// Code content is verbatim: no inline parsing, wrapped as `<pre><code>`.
fn code_to_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    let lines: Vec<&str> = block.lines().collect();
    let [_, inner @ .., _] = lines.as_slice() else {
        return Err(malformed(BlockType::Code, "missing opening or closing fence"));
    };

    let mut code = inner.join("\n");
    if !code.is_empty() {
        code.push('\n');
    }

    let content = HtmlNode::text(code);
    Ok(HtmlNode::parent(
        tags::PREFORMATTED,
        vec![HtmlNode::parent(tags::CODE, vec![content])],
    ))
}

fn quote_to_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    let stripped = block
        .lines()
        .map(|line| {
            BlockQuote::strip_prefix(line)
                .ok_or_else(|| malformed(BlockType::Quote, format!("line {line:?} lacks '>'")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let children = inline_children(&stripped.join(" "), BlockType::Quote)?;
    Ok(HtmlNode::parent(tags::BLOCKQUOTE, children))
}

fn unordered_list_to_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    let kind = BlockType::UnorderedList;
    let items = block
        .lines()
        .map(|line| {
            let text = UnorderedList::strip(line)
                .ok_or_else(|| malformed(kind, format!("line {line:?} lacks '- '")))?;
            list_item(text, kind)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent(tags::UNORDERED_LIST, items))
}

fn ordered_list_to_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    let kind = BlockType::OrderedList;
    let items = block
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let number = i + 1;
            let text = OrderedList::strip(line, number)
                .ok_or_else(|| malformed(kind, format!("line {line:?} lacks '{number}. '")))?;
            list_item(text, kind)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent(tags::ORDERED_LIST, items))
}

fn list_item(text: &str, kind: BlockType) -> Result<HtmlNode, MarkdownError> {
    Ok(HtmlNode::parent(tags::LIST_ITEM, inline_children(text, kind)?))
}

/// Parses inline text into leaf nodes, rejecting an empty run since a parent
/// without children cannot render.
fn inline_children(text: &str, kind: BlockType) -> Result<Vec<HtmlNode>, MarkdownError> {
    let tokens = parse_inline(text)?;
    if tokens.is_empty() {
        return Err(malformed(kind, "no inline content"));
    }
    Ok(to_nodes(tokens))
}

fn malformed(kind: BlockType, reason: impl Into<String>) -> MarkdownError {
    MarkdownError::MalformedBlock {
        kind: kind.to_string(),
        reason: reason.into(),
    }
}
