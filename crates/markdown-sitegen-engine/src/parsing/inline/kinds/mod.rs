//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters. The parser reads
//! these constants; it never hardcodes `**`, `_`, `` ` `` or bracket bytes.
//!
//! - **`Bold`**, **`Italic`**, **`CodeSpan`**: paired delimiters split in one pass each
//! - **`Link`**: `[text](url)` punctuation
//! - **`Image`**: `!` marker in front of link syntax

pub mod emphasis;
pub mod link;

pub use emphasis::{Bold, CodeSpan, Italic};
pub use link::{Image, Link};
