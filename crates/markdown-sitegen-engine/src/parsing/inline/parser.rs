use crate::parsing::error::MarkdownError;

use super::{
    cursor::Cursor,
    kinds::{Bold, CodeSpan, Image, Italic, Link},
    types::InlineToken,
};

/// Parses inline markdown into an ordered sequence of [`InlineToken`]s.
///
/// Runs a fixed pipeline of passes: `**`, `_`, `` ` ``, images, links. Each
/// pass only subdivides tokens that are still `Plain`, so delimiters never
/// nest. Empty segments are dropped, which means empty input (or `****`)
/// yields no tokens at all.
///
/// # Errors
/// [`MarkdownError::UnbalancedDelimiter`] when a plain run holds an odd number
/// of any paired delimiter.
pub fn parse_inline(text: &str) -> Result<Vec<InlineToken>, MarkdownError> {
    let tokens = vec![InlineToken::Plain(text.to_string())];
    let tokens = split_delimiter(tokens, Bold::DELIMITER, InlineToken::Bold)?;
    let tokens = split_delimiter(tokens, Italic::DELIMITER, InlineToken::Italic)?;
    let tokens = split_delimiter(tokens, CodeSpan::DELIMITER, InlineToken::Code)?;
    let tokens = split_matches(tokens, try_parse_image);
    Ok(split_matches(tokens, try_parse_link))
}

/// Splits every plain token on `delimiter`, wrapping odd-numbered sections
/// with `make`.
pub fn split_delimiter(
    tokens: Vec<InlineToken>,
    delimiter: &'static str,
    make: fn(String) -> InlineToken,
) -> Result<Vec<InlineToken>, MarkdownError> {
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        let InlineToken::Plain(text) = token else {
            out.push(token);
            continue;
        };

        let sections: Vec<&str> = text.split(delimiter).collect();
        // n delimiters produce n + 1 sections; balanced pairs leave an odd count.
        if sections.len() % 2 == 0 {
            return Err(MarkdownError::UnbalancedDelimiter {
                delimiter,
                text: text.clone(),
            });
        }

        for (i, section) in sections.into_iter().enumerate() {
            if section.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(InlineToken::Plain(section.to_string()));
            } else {
                out.push(make(section.to_string()));
            }
        }
    }
    Ok(out)
}

/// Splits every plain token around the matches found by `try_parse`,
/// scanning left to right without overlap.
fn split_matches(
    tokens: Vec<InlineToken>,
    try_parse: fn(&mut Cursor<'_>) -> Option<InlineToken>,
) -> Vec<InlineToken> {
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        let InlineToken::Plain(text) = &token else {
            out.push(token);
            continue;
        };

        let mut cur = Cursor::new(text);
        let mut text_start = 0;
        let mut found = false;
        while !cur.eof() {
            let start = cur.pos();
            if let Some(matched) = try_parse(&mut cur) {
                push_plain(&mut out, cur.slice(text_start, start));
                out.push(matched);
                text_start = cur.pos();
                found = true;
                continue;
            }
            cur.bump();
        }

        if found {
            push_plain(&mut out, cur.slice(text_start, text.len()));
        } else {
            out.push(token);
        }
    }
    out
}

fn push_plain(out: &mut Vec<InlineToken>, text: &str) {
    if !text.is_empty() {
        out.push(InlineToken::Plain(text.to_string()));
    }
}

/// Attempts to parse `![alt](url)` at the cursor. Restores the cursor on failure.
fn try_parse_image(cur: &mut Cursor<'_>) -> Option<InlineToken> {
    if !cur.starts_with(Image::OPEN) {
        return None;
    }
    let saved = cur.clone();
    cur.bump(); // !
    match parse_bracket_pair(cur) {
        Some((alt, url)) => Some(InlineToken::Image { alt, url }),
        None => {
            *cur = saved;
            None
        }
    }
}

/// Attempts to parse `[text](url)` at the cursor. A `[` directly after `!`
/// belongs to image syntax and is never taken as a link.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineToken> {
    if cur.peek() != Some(Link::TEXT_OPEN) || cur.prev() == Some(Image::MARKER) {
        return None;
    }
    let saved = cur.clone();
    match parse_bracket_pair(cur) {
        Some((text, url)) => Some(InlineToken::Link { text, url }),
        None => {
            *cur = saved;
            None
        }
    }
}

/// Parses `[text](url)` starting at `[`, leaving the cursor after `)`.
fn parse_bracket_pair(cur: &mut Cursor<'_>) -> Option<(String, String)> {
    if !cur.eat(Link::TEXT_OPEN) {
        return None;
    }
    let text_start = cur.pos();
    cur.bump_while(Link::is_text_byte);
    let text_end = cur.pos();
    if !cur.eat(Link::TEXT_CLOSE) || !cur.eat(Link::URL_OPEN) {
        return None;
    }

    let url_start = cur.pos();
    cur.bump_while(Link::is_url_byte);
    let url_end = cur.pos();
    if !cur.eat(Link::URL_CLOSE) {
        return None;
    }

    Some((
        cur.slice(text_start, text_end).to_string(),
        cur.slice(url_start, url_end).to_string(),
    ))
}
