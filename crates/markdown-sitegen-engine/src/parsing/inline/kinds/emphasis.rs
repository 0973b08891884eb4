/// Strong emphasis, `**text**`.
pub struct Bold;

impl Bold {
    pub const DELIMITER: &'static str = "**";
}

/// Emphasis, `_text_`.
pub struct Italic;

impl Italic {
    pub const DELIMITER: &'static str = "_";
}

/// Inline code, `` `text` ``.
pub struct CodeSpan;

impl CodeSpan {
    pub const DELIMITER: &'static str = "`";
}
