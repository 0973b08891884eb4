//! Document-level tests for the markdown pipeline.

mod invariants;

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::html::HtmlNode;
use crate::parsing::{build_document, error::MarkdownError, markdown_to_html};

fn build(md: &str) -> HtmlNode {
    let doc = build_document(md).unwrap();
    invariants::check(&doc);
    doc
}

#[test]
fn heading_and_paragraph_round_trip() {
    let doc = build("# Welcome\n\nThis is **bold** and this is _italic_.");

    assert_eq!(doc.tag(), Some("div"));
    assert_eq!(doc.children().len(), 2);

    let heading = &doc.children()[0];
    assert_eq!(heading.tag(), Some("h1"));
    assert_eq!(heading.children(), &[HtmlNode::text("Welcome")]);

    let paragraph = &doc.children()[1];
    assert_eq!(paragraph.tag(), Some("p"));
    assert_eq!(
        paragraph.children(),
        &[
            HtmlNode::text("This is "),
            HtmlNode::leaf("b", "bold"),
            HtmlNode::text(" and this is "),
            HtmlNode::leaf("i", "italic"),
            HtmlNode::text("."),
        ]
    );
}

#[test]
fn lone_image_is_a_paragraph_with_one_leaf() {
    let doc = build("![photo](images/p.png)");
    let paragraph = &doc.children()[0];
    assert_eq!(paragraph.tag(), Some("p"));
    assert_eq!(paragraph.children().len(), 1);

    let image = paragraph.children()[0].as_leaf().unwrap();
    assert_eq!(image.tag.as_deref(), Some("img"));
    assert_eq!(image.content.as_deref(), Some(""));
    assert_eq!(image.attributes.get("src"), Some("images/p.png"));
    assert_eq!(image.attributes.get("alt"), Some("photo"));
}

#[test]
fn full_document_renders() {
    let md = r#"
# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> "I am in fact a Hobbit in all but size."
>
> -- J.R.R. Tolkien

## Reasons I like Tolkien

- You can spend years studying the legendarium
- It's got a [map](/map)

1. Gandalf
2. Bilbo
3. Sam
"#;
    insta::assert_snapshot!(markdown_to_html(md).unwrap(), @r#"<div><h1>Tolkien Fan Club</h1><p><img src="/images/tolkien.png" alt="JRR Tolkien sitting"></img></p><p>Here's the deal, <b>I like Tolkien</b>.</p><blockquote>"I am in fact a Hobbit in all but size."  -- J.R.R. Tolkien</blockquote><h2>Reasons I like Tolkien</h2><ul><li>You can spend years studying the legendarium</li><li>It's got a <a href="/map">map</a></li></ul><ol><li>Gandalf</li><li>Bilbo</li><li>Sam</li></ol></div>"#);
}

#[rstest]
#[case("")]
#[case("\n\n")]
#[case("   \n\t\n")]
fn empty_documents_fail(#[case] md: &str) {
    assert_eq!(build_document(md), Err(MarkdownError::EmptyDocument));
}

#[test]
fn first_error_aborts_the_document() {
    let md = "# Fine\n\nbroken **bold\n\nalso _broken";
    assert!(matches!(
        build_document(md),
        Err(MarkdownError::UnbalancedDelimiter { delimiter: "**", .. })
    ));
}

#[test]
fn gap_in_ordered_list_falls_back_to_paragraph() {
    let html = markdown_to_html("1. a\n3. b").unwrap();
    assert_eq!(html, "<div><p>1. a 3. b</p></div>");
}

#[test]
fn render_is_pure() {
    let doc = build("# T\n\n- a\n- b\n\n> q");
    assert_eq!(doc.render().unwrap(), doc.render().unwrap());
}

#[test]
fn documents_build_independently_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || markdown_to_html(&format!("# Page {i}\n\nbody {i}")))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(
            handle.join().unwrap().unwrap(),
            format!("<div><h1>Page {i}</h1><p>body {i}</p></div>")
        );
    }
}
