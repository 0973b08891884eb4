//! # Inline Parsing
//!
//! Turns the text of a paragraph, heading, quote or list item into a flat
//! sequence of [`InlineToken`]s, then into leaf [`HtmlNode`](crate::html::HtmlNode)s.
//!
//! ## Modules
//!
//! - **`types`**: `InlineToken` enum (Plain, Bold, Italic, Code, Link, Image)
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte scanning of link and image syntax
//! - **`parser`**: `parse_inline()` delimiter-pass pipeline
//! - **`to_node`**: token to leaf node mapping
//!
//! ## Pass Order
//!
//! `**` then `_` then `` ` `` then images then links. A later pass only sees
//! text no earlier pass claimed, so `**a_b**` is bold text containing a
//! literal underscore. Nested emphasis is not supported.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod to_node;
pub mod types;

pub use parser::parse_inline;
pub use to_node::{to_node, to_nodes};
pub use types::{InlineToken, TokenKind};
