/// Unordered list item marker, `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::MARKER)
    }
}

/// Ordered list item marker, `N. ` with N counting up from 1.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    /// Strips the marker expected for the 1-based item `number`.
    ///
    /// `"2. b"` strips as item 2 but not as item 1 or 3.
    pub fn strip(line: &str, number: usize) -> Option<&str> {
        let digits = number.to_string();
        line.strip_prefix(digits.as_str())?
            .strip_prefix(Self::SEPARATOR)
    }

    /// True if every line carries the marker for its position, starting at 1.
    pub fn is_sequence<'a>(lines: impl IntoIterator<Item = &'a str>) -> bool {
        lines
            .into_iter()
            .enumerate()
            .all(|(i, line)| Self::strip(line, i + 1).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered_marker() {
        assert_eq!(UnorderedList::strip("- item"), Some("item"));
        assert_eq!(UnorderedList::strip("-item"), None);
        assert_eq!(UnorderedList::strip("* item"), None);
    }

    #[test]
    fn ordered_marker_must_match_position() {
        assert_eq!(OrderedList::strip("1. first", 1), Some("first"));
        assert_eq!(OrderedList::strip("2. b", 2), Some("b"));
        assert_eq!(OrderedList::strip("2. b", 1), None);
        assert_eq!(OrderedList::strip("10. ten", 10), Some("ten"));
        assert_eq!(OrderedList::strip("10. ten", 1), None);
        assert_eq!(OrderedList::strip("1.no space", 1), None);
    }

    #[test]
    fn sequence_requires_increments_from_one() {
        assert!(OrderedList::is_sequence(["1. a", "2. b", "3. c"]));
        assert!(!OrderedList::is_sequence(["1. a", "3. b"]));
        assert!(!OrderedList::is_sequence(["2. a", "3. b"]));
        assert!(!OrderedList::is_sequence(["1. a", "1. b"]));
    }
}
