/// ATX heading type with owned marker constants.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Returns the heading level if `line` opens with 1 to 6 `#` followed by
    /// a space.
    pub fn level(line: &str) -> Option<u8> {
        let hashes = line.bytes().take_while(|&b| b == Self::MARKER as u8).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL as usize {
            return None;
        }
        if line.as_bytes().get(hashes) != Some(&b' ') {
            return None;
        }
        u8::try_from(hashes).ok()
    }

    /// Strips the `#` marker run and the single space after it.
    pub fn strip(line: &str, level: u8) -> Option<&str> {
        line.get(level as usize..)?.strip_prefix(' ')
    }
}
