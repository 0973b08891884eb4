use thiserror::Error;

/// Errors raised while turning a markdown document into an HTML tree or
/// rendering that tree.
///
/// Every variant is terminal for the document being processed; nothing is
/// retried or patched over internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkdownError {
    #[error("Invalid markdown: no closing delimiter '{delimiter}' found in {text:?}")]
    UnbalancedDelimiter {
        delimiter: &'static str,
        text: String,
    },

    #[error("Leaf node <{}> has no content", tag.as_deref().unwrap_or("text"))]
    MissingContent { tag: Option<String> },

    #[error("Parent node has no tag")]
    MissingTag,

    #[error("Parent node <{tag}> has no children")]
    EmptyChildren { tag: String },

    #[error("Document contains no blocks")]
    EmptyDocument,

    #[error("Malformed {kind} block: {reason}")]
    MalformedBlock { kind: String, reason: String },
}
