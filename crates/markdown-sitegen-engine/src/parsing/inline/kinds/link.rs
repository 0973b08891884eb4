/// Link syntax `[text](url)`.
///
/// The text may not contain brackets and the url may not contain parens.
pub struct Link;

impl Link {
    pub const TEXT_OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';

    pub fn is_text_byte(b: u8) -> bool {
        b != Self::TEXT_OPEN && b != Self::TEXT_CLOSE
    }

    pub fn is_url_byte(b: u8) -> bool {
        b != Self::URL_OPEN && b != Self::URL_CLOSE
    }
}

/// Image syntax: link syntax directly preceded by `!`.
pub struct Image;

impl Image {
    pub const MARKER: u8 = b'!';
    pub const OPEN: &'static [u8; 2] = b"![";
}
