use crate::parsing::blocks::kinds::{CodeFence, Heading};

/// Finds the page title: the text of the first line starting with `# `,
/// trimmed.
///
/// Lines must start at column zero. Lines between code fences are skipped,
/// so a shell comment in an example is never mistaken for the title.
pub fn extract_title(markdown: &str) -> Option<String> {
    let mut in_fence = false;
    markdown
        .lines()
        .filter(|line| {
            if CodeFence::is_fence(line) {
                in_fence = !in_fence;
                return false;
            }
            !in_fence
        })
        .find(|line| Heading::level(line) == Some(1))
        .and_then(|line| Heading::strip(line, 1))
        .map(|title| title.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Hello", Some("Hello"))]
    #[case("# Hello  \n\nbody", Some("Hello"))]
    #[case("intro\n\n## Sub\n\n# Real Title", Some("Real Title"))]
    #[case("text line\n# Inside paragraph", Some("Inside paragraph"))]
    #[case("## Only h2\n\n### h3", None)]
    #[case("#NoSpace", None)]
    #[case("```\n# comment\n```\n\n# After", Some("After"))]
    #[case("   # Indented\n\n# Flush", Some("Flush"))]
    #[case("\n\n   # Indented only", None)]
    #[case("# Windows\r\n\r\nbody", Some("Windows"))]
    #[case("", None)]
    fn finds_first_h1(#[case] markdown: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_title(markdown).as_deref(), expected);
    }
}
