use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Classifies a trimmed block.
///
/// Checks run in fixed precedence and the first match wins: heading, code,
/// quote, unordered list, ordered list. Anything else, including the empty
/// string, is a paragraph.
pub fn classify(block: &str) -> BlockType {
    if block.is_empty() {
        return BlockType::Paragraph;
    }
    let lines: Vec<&str> = block.lines().collect();

    if let [line] = lines.as_slice()
        && let Some(level) = Heading::level(line)
    {
        return BlockType::Heading { level };
    }

    if is_fenced_code(&lines) {
        return BlockType::Code;
    }

    if lines.iter().all(|line| BlockQuote::is_quoted(line)) {
        return BlockType::Quote;
    }

    if lines.iter().all(|line| UnorderedList::strip(line).is_some()) {
        return BlockType::UnorderedList;
    }

    if OrderedList::is_sequence(lines.iter().copied()) {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

fn is_fenced_code(lines: &[&str]) -> bool {
    match lines {
        [first, .., last] => CodeFence::is_fence(first) && CodeFence::is_fence(last),
        _ => false,
    }
}
