use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use relative_path::RelativePathBuf;

use crate::{html::prettify, parsing::markdown_to_html};

use super::{
    SiteError, io_error,
    template::{PageContext, Template},
    title::extract_title,
};

const MARKDOWN_EXTENSION: &str = "md";
const HTML_EXTENSION: &str = "html";

/// Turns markdown documents into finished pages using one template.
#[derive(Debug, Clone)]
pub struct PageGenerator {
    template: Template,
    base_path: String,
    prettify: bool,
}

impl PageGenerator {
    pub fn new(template: Template, base_path: impl Into<String>) -> Self {
        Self {
            template,
            base_path: base_path.into(),
            prettify: true,
        }
    }

    /// Whether finished pages go through the indenting formatter.
    #[must_use]
    pub fn with_prettify(mut self, prettify: bool) -> Self {
        self.prettify = prettify;
        self
    }

    /// Renders one markdown document into a full page.
    ///
    /// `source` only labels errors.
    pub fn render_page(&self, markdown: &str, source: &Path) -> Result<String, SiteError> {
        let content = markdown_to_html(markdown).map_err(|e| SiteError::Markdown {
            path: source.to_path_buf(),
            source: e,
        })?;
        let title = extract_title(markdown).ok_or_else(|| SiteError::MissingTitle {
            path: source.to_path_buf(),
        })?;

        let page = self.template.render(&PageContext {
            title: &title,
            content: &content,
            base_path: &self.base_path,
        });

        Ok(if self.prettify { prettify(&page) } else { page })
    }

    /// Reads `from`, renders it and writes the page to `dest`, creating parent
    /// directories as needed.
    pub fn generate_page(&self, from: &Path, dest: &Path) -> Result<(), SiteError> {
        info!("Generating page from {} to {}", from.display(), dest.display());

        let markdown = fs::read_to_string(from).map_err(io_error(from))?;
        let page = self.render_page(&markdown, from)?;

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }
        fs::write(dest, page).map_err(io_error(dest))
    }

    /// Generates a page for every `.md` file under `content_dir`, mirroring the
    /// directory layout under `dest_dir` with `.html` extensions.
    ///
    /// Returns the generated pages relative to `dest_dir`, sorted. The first
    /// failing page aborts the run.
    pub fn generate_pages_recursive(
        &self,
        content_dir: &Path,
        dest_dir: &Path,
    ) -> Result<Vec<RelativePathBuf>, SiteError> {
        let mut generated = vec![];
        for from in scan_markdown_files(content_dir)? {
            let page = output_path_for(content_dir, &from)?;
            self.generate_page(&from, &page.to_path(dest_dir))?;
            generated.push(page);
        }
        Ok(generated)
    }
}

/// Maps `content_dir/a/b.md` to the relative page path `a/b.html`.
pub fn output_path_for(content_dir: &Path, file: &Path) -> Result<RelativePathBuf, SiteError> {
    let relative = file
        .strip_prefix(content_dir)
        .ok()
        .and_then(|p| RelativePathBuf::from_path(p).ok())
        .ok_or_else(|| SiteError::InvalidPath(file.to_path_buf()))?;
    Ok(relative.with_extension(HTML_EXTENSION))
}

/// Recursively collects markdown files under `root`, sorted.
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, SiteError> {
    if !root.is_dir() {
        return Err(SiteError::NotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SiteError> {
    let entries = fs::read_dir(dir).map_err(io_error(dir))?;

    for entry in entries {
        let path = entry.map_err(io_error(dir))?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == MARKDOWN_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}
