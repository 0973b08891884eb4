use serde::Serialize;

/// The semantic kind of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A span of inline text tagged with its kind.
///
/// Links and images carry their URL in the variant itself, so a URL exists
/// exactly when the kind is `Link` or `Image`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineToken {
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

impl InlineToken {
    pub fn kind(&self) -> TokenKind {
        match self {
            InlineToken::Plain(_) => TokenKind::Plain,
            InlineToken::Bold(_) => TokenKind::Bold,
            InlineToken::Italic(_) => TokenKind::Italic,
            InlineToken::Code(_) => TokenKind::Code,
            InlineToken::Link { .. } => TokenKind::Link,
            InlineToken::Image { .. } => TokenKind::Image,
        }
    }

    /// The token's text: link text for links, alt text for images.
    pub fn text(&self) -> &str {
        match self {
            InlineToken::Plain(text)
            | InlineToken::Bold(text)
            | InlineToken::Italic(text)
            | InlineToken::Code(text)
            | InlineToken::Link { text, .. }
            | InlineToken::Image { alt: text, .. } => text,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            InlineToken::Link { url, .. } | InlineToken::Image { url, .. } => Some(url),
            _ => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, InlineToken::Plain(_))
    }
}
