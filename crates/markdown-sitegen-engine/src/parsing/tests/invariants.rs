use crate::html::HtmlNode;

/// Validates that a built tree can render.
///
/// Asserts that:
/// - Every parent has a tag and at least one child
/// - Every leaf has content
/// - Only image leaves carry `src`/`alt`, and only anchors carry `href`
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(node: &HtmlNode) {
    match node {
        HtmlNode::Leaf(leaf) => {
            assert!(leaf.content.is_some(), "leaf without content: {leaf:?}");
            let tag = leaf.tag.as_deref();
            for (name, _) in leaf.attributes.iter() {
                let allowed = match name {
                    "href" => tag == Some("a"),
                    "src" | "alt" => tag == Some("img"),
                    _ => false,
                };
                assert!(allowed, "unexpected attribute {name} on {tag:?}");
            }
        }
        HtmlNode::Parent(parent) => {
            assert!(parent.tag.is_some(), "parent without tag: {parent:?}");
            assert!(
                !parent.children.is_empty(),
                "parent <{}> without children",
                parent.tag.as_deref().unwrap_or_default()
            );
            parent.children.iter().for_each(check);
        }
    }
}
