//! # HTML Tree
//!
//! A typed HTML node tree and its renderer.
//!
//! - **`node`**: `HtmlNode` sum type (`Leaf` / `Parent`) and rendering
//! - **`attributes`**: insertion-ordered attribute mapping
//! - **`pretty`**: indenting formatter over rendered HTML strings
//! - **`tags`**: element names emitted by the markdown pipeline

pub mod attributes;
pub mod node;
pub mod pretty;

pub use attributes::Attributes;
pub use node::{HtmlNode, LeafNode, ParentNode};
pub use pretty::prettify;

/// Element names emitted by the markdown pipeline.
pub mod tags {
    pub const DOCUMENT: &str = "div";
    pub const PARAGRAPH: &str = "p";
    pub const BLOCKQUOTE: &str = "blockquote";
    pub const UNORDERED_LIST: &str = "ul";
    pub const ORDERED_LIST: &str = "ol";
    pub const LIST_ITEM: &str = "li";
    pub const PREFORMATTED: &str = "pre";
    pub const CODE: &str = "code";
    pub const BOLD: &str = "b";
    pub const ITALIC: &str = "i";
    pub const ANCHOR: &str = "a";
    pub const IMAGE: &str = "img";

    /// `h1` through `h6`.
    pub fn heading(level: u8) -> String {
        format!("h{level}")
    }
}
