/// Fenced code block type with owned delimiter constant.
///
/// Only a bare triple-backtick line counts as a fence; info strings are not
/// recognized.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// True if `line` is exactly a fence, ignoring surrounding whitespace.
    pub fn is_fence(line: &str) -> bool {
        line.trim() == Self::BACKTICKS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_fence() {
        assert!(CodeFence::is_fence("```"));
        assert!(CodeFence::is_fence("```\r"));
        assert!(CodeFence::is_fence("   ```"));
    }

    #[test]
    fn info_strings_and_longer_runs_are_not_fences() {
        assert!(!CodeFence::is_fence("```rust"));
        assert!(!CodeFence::is_fence("````"));
        assert!(!CodeFence::is_fence("``"));
        assert!(!CodeFence::is_fence(" ```x"));
    }
}
