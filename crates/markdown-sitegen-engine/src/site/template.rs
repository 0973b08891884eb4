use std::path::Path;

use super::SiteError;

/// Values substituted into a page template.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub base_path: &'a str,
}

/// An HTML page template with `{{ Title }}`, `{{ Content }}` and
/// `{{ BasePath }}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    pub const TITLE: &'static str = "{{ Title }}";
    pub const CONTENT: &'static str = "{{ Content }}";
    pub const BASE_PATH: &'static str = "{{ BasePath }}";

    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn load(path: &Path) -> Result<Self, SiteError> {
        if !path.exists() {
            return Err(SiteError::NotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(text))
    }

    /// Replaces every placeholder occurrence. Other `{{ ... }}` text is left
    /// as-is.
    ///
    /// Substitution is a single left-to-right pass: placeholder text inside a
    /// substituted value is never expanded.
    pub fn render(&self, ctx: &PageContext<'_>) -> String {
        let mut page = String::with_capacity(self.text.len() + ctx.content.len());
        let mut rest = self.text.as_str();
        while let Some((at, placeholder)) = next_placeholder(rest) {
            page.push_str(&rest[..at]);
            page.push_str(match placeholder {
                Self::TITLE => ctx.title,
                Self::CONTENT => ctx.content,
                _ => ctx.base_path,
            });
            rest = &rest[at + placeholder.len()..];
        }
        page.push_str(rest);
        page
    }
}

/// Earliest placeholder in `s` and its byte offset.
fn next_placeholder(s: &str) -> Option<(usize, &'static str)> {
    [Template::TITLE, Template::CONTENT, Template::BASE_PATH]
        .into_iter()
        .filter_map(|p| s.find(p).map(|at| (at, p)))
        .min_by_key(|(at, _)| *at)
}
