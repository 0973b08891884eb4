use std::fmt;

/// The kind of a block-level unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// Default when no other kind matches.
    Paragraph,
    /// `#` to `######` heading on a single line.
    Heading { level: u8 },
    /// Triple-backtick fenced code.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... without gaps.
    OrderedList,
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockType::Paragraph => f.write_str("paragraph"),
            BlockType::Heading { level } => write!(f, "heading (level {level})"),
            BlockType::Code => f.write_str("code"),
            BlockType::Quote => f.write_str("quote"),
            BlockType::UnorderedList => f.write_str("unordered list"),
            BlockType::OrderedList => f.write_str("ordered list"),
        }
    }
}

/// A trimmed, blank-line-delimited run of source text and its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub text: &'a str,
    pub kind: BlockType,
}
