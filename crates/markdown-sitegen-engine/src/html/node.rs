use crate::parsing::error::MarkdownError;

use super::attributes::Attributes;

/// A renderable HTML tree node.
///
/// Trees are built bottom-up and never mutated afterwards; each parent owns
/// its children outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

/// A node with text content and no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    /// `None` renders the content bare, with no wrapping element.
    pub tag: Option<String>,
    /// Required at render time.
    pub content: Option<String>,
    pub attributes: Attributes,
}

/// A node with an ordered list of children and no text of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    /// Required at render time.
    pub tag: Option<String>,
    /// Must be non-empty at render time.
    pub children: Vec<HtmlNode>,
    pub attributes: Attributes,
}

impl LeafNode {
    pub fn new(tag: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            content: Some(content.into()),
            attributes: Attributes::new(),
        }
    }

    /// Bare text with no wrapping element.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: None,
            content: Some(content.into()),
            attributes: Attributes::new(),
        }
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Renders `<tag attrs>content</tag>`, or the bare content when untagged.
    ///
    /// Content is emitted verbatim; no escaping is performed.
    pub fn render(&self) -> Result<String, MarkdownError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), MarkdownError> {
        let content = self
            .content
            .as_deref()
            .ok_or_else(|| MarkdownError::MissingContent {
                tag: self.tag.clone(),
            })?;

        match &self.tag {
            None => out.push_str(content),
            Some(tag) => {
                open_tag(out, tag, &self.attributes);
                out.push_str(content);
                close_tag(out, tag);
            }
        }
        Ok(())
    }
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.into()),
            children,
            attributes: Attributes::new(),
        }
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Renders `<tag attrs>` followed by each child in order and `</tag>`.
    ///
    /// No whitespace is inserted between children.
    pub fn render(&self) -> Result<String, MarkdownError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), MarkdownError> {
        let tag = self.tag.as_deref().ok_or(MarkdownError::MissingTag)?;
        if self.children.is_empty() {
            return Err(MarkdownError::EmptyChildren {
                tag: tag.to_string(),
            });
        }

        open_tag(out, tag, &self.attributes);
        for child in &self.children {
            child.render_into(out)?;
        }
        close_tag(out, tag);
        Ok(())
    }
}

impl HtmlNode {
    /// Convenience constructor for a tagged leaf.
    pub fn leaf(tag: impl Into<String>, content: impl Into<String>) -> Self {
        LeafNode::new(tag, content).into()
    }

    /// Convenience constructor for an untagged text leaf.
    pub fn text(content: impl Into<String>) -> Self {
        LeafNode::text(content).into()
    }

    /// Convenience constructor for a parent.
    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        ParentNode::new(tag, children).into()
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf(leaf) => &leaf.attributes,
            HtmlNode::Parent(parent) => &parent.attributes,
        }
    }

    /// Children of a parent node; leaves have none.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => &parent.children,
        }
    }

    pub fn as_leaf(&self) -> Option<&LeafNode> {
        match self {
            HtmlNode::Leaf(leaf) => Some(leaf),
            HtmlNode::Parent(_) => None,
        }
    }

    /// Renders the subtree to an HTML string.
    ///
    /// Pure: the same tree always yields the same string.
    pub fn render(&self) -> Result<String, MarkdownError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), MarkdownError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.render_into(out),
            HtmlNode::Parent(parent) => parent.render_into(out),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

fn open_tag(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    attributes.write_to(out);
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
