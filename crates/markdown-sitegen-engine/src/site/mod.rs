//! # Site Generation
//!
//! File-system glue around the markdown pipeline: copies static assets,
//! walks the content tree and writes one templated page per markdown file.

pub mod copy;
pub mod pages;
pub mod template;
pub mod title;

use std::path::{Path, PathBuf};

use log::info;
use relative_path::RelativePathBuf;

use crate::parsing::error::MarkdownError;

pub use copy::copy_static;
pub use pages::{PageGenerator, output_path_for, scan_markdown_files};
pub use template::{PageContext, Template};
pub use title::extract_title;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Path not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Path is outside the content directory: {0}")]
    InvalidPath(PathBuf),
    #[error("No h1 heading found in {path}")]
    MissingTitle { path: PathBuf },
    #[error("Failed to convert {path}: {source}")]
    Markdown {
        path: PathBuf,
        source: MarkdownError,
    },
}

pub(crate) fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> SiteError {
    let path = path.to_path_buf();
    move |source| SiteError::Io { path, source }
}

/// Where a site build reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub public_dir: PathBuf,
    pub template_path: PathBuf,
    /// Substituted for `{{ BasePath }}`, e.g. `/` or `/repo-name/`.
    pub base_path: String,
    pub prettify: bool,
}

/// Summary of a finished build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteReport {
    pub static_files: usize,
    /// Generated pages relative to the public directory.
    pub pages: Vec<RelativePathBuf>,
}

/// Rebuilds the public directory: static assets first, then every page.
pub fn build_site(layout: &SiteLayout) -> Result<SiteReport, SiteError> {
    let static_files = copy_static(&layout.static_dir, &layout.public_dir)?;

    let template = Template::load(&layout.template_path)?;
    let generator =
        PageGenerator::new(template, layout.base_path.as_str()).with_prettify(layout.prettify);
    let pages = generator.generate_pages_recursive(&layout.content_dir, &layout.public_dir)?;

    info!(
        "Built {} pages and copied {} static files into {}",
        pages.len(),
        static_files,
        layout.public_dir.display()
    );
    Ok(SiteReport {
        static_files,
        pages,
    })
}
