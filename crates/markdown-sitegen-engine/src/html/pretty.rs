//! Indenting formatter for rendered HTML.
//!
//! Consumes the compact output of [`HtmlNode::render`](super::HtmlNode::render)
//! (or a full templated page) and puts every tag and text run on its own
//! line, one space of indent per nesting level. `<pre>` content is copied
//! verbatim.

/// Elements that never have content and so never open a nesting level.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

const INDENT: &str = " ";

#[derive(Debug, PartialEq, Eq)]
enum Piece<'a> {
    Open { name: String, raw: &'a str },
    Close { name: String, raw: &'a str },
    /// Declarations, comments and self-closing tags.
    Standalone(&'a str),
    Text(&'a str),
}

/// Re-indents an HTML string. Non-empty output ends with a newline.
pub fn prettify(html: &str) -> String {
    let mut out = String::with_capacity(html.len() + html.len() / 4);
    let mut depth = 0usize;
    let mut rest = html;

    while !rest.is_empty() {
        let (piece, consumed) = next_piece(rest);
        let after = &rest[consumed..];
        rest = after;

        match piece {
            Piece::Text(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    push_line(&mut out, depth, text);
                }
            }
            Piece::Standalone(raw) => push_line(&mut out, depth, raw),
            Piece::Open { name, raw } if is_void(&name) => push_line(&mut out, depth, raw),
            Piece::Open { name, raw } if name == "pre" => {
                let (inner, close, skip) = split_preformatted(after);
                let mut line = String::with_capacity(raw.len() + inner.len() + close.len());
                line.push_str(raw);
                line.push_str(inner);
                line.push_str(close);
                push_line(&mut out, depth, &line);
                rest = &after[skip..];
            }
            Piece::Open { raw, .. } => {
                push_line(&mut out, depth, raw);
                depth += 1;
            }
            Piece::Close { name, .. } if is_void(&name) => {}
            Piece::Close { raw, .. } => {
                depth = depth.saturating_sub(1);
                push_line(&mut out, depth, raw);
            }
        }
    }

    out
}

fn push_line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// Splits the text following a `<pre ...>` tag into (verbatim content,
/// closing tag, bytes consumed). An unclosed `<pre>` swallows the rest.
fn split_preformatted(after: &str) -> (&str, &str, usize) {
    match find_ignore_case(after, "</pre") {
        Some(start) => {
            let end = after[start..]
                .find('>')
                .map(|i| start + i + 1)
                .unwrap_or(after.len());
            (&after[..start], &after[start..end], end)
        }
        None => (after, "", after.len()),
    }
}

fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let hay = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.len() > hay.len() {
        return None;
    }
    (0..=hay.len() - needle.len()).find(|&i| hay[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

/// Returns the next piece at the start of `s` and how many bytes it spans.
fn next_piece(s: &str) -> (Piece<'_>, usize) {
    if !s.starts_with('<') {
        let end = s.find('<').unwrap_or(s.len());
        return (Piece::Text(&s[..end]), end);
    }

    if s.starts_with("<!--") {
        let end = s.find("-->").map(|i| i + 3).unwrap_or(s.len());
        return (Piece::Standalone(&s[..end]), end);
    }

    let Some(close) = find_tag_end(s) else {
        // A lone `<` with no closing bracket is just text.
        return (Piece::Text(s), s.len());
    };
    let end = close + 1;
    let raw = &s[..end];

    if s.starts_with("<!") || s.starts_with("<?") {
        return (Piece::Standalone(raw), end);
    }
    if let Some(body) = s.strip_prefix("</") {
        return (
            Piece::Close {
                name: tag_name(body),
                raw,
            },
            end,
        );
    }

    let name = tag_name(&s[1..]);
    if name.is_empty() {
        return (Piece::Text(raw), end);
    }
    if raw.ends_with("/>") {
        return (Piece::Standalone(raw), end);
    }
    (Piece::Open { name, raw }, end)
}

/// Index of the `>` closing the tag that opens `s`. A `>` inside a quoted
/// attribute value does not count.
fn find_tag_end(s: &str) -> Option<usize> {
    let mut quote = None;
    for (i, b) in s.bytes().enumerate().skip(1) {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => return Some(i),
            None => {}
        }
    }
    None
}

fn tag_name(s: &str) -> String {
    s.chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_ascii_lowercase()
}
