use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use markdown_sitegen_config::SiteConfig;
use markdown_sitegen_engine::{SiteLayout, build_site};

#[derive(Parser)]
#[command(name = "markdown-sitegen")]
#[command(about = "Build a static HTML site from a tree of markdown files")]
struct Cli {
    /// URL prefix for generated links, e.g. /repo-name/ (defaults to the config value or /)
    base_path: Option<String>,

    /// Config file (defaults to ./markdown-sitegen.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of markdown pages
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory of static assets copied verbatim
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Output directory, wiped and rebuilt on every run
    #[arg(long)]
    public: Option<PathBuf>,

    /// HTML template with {{ Title }}, {{ Content }} and {{ BasePath }} placeholders
    #[arg(long)]
    template: Option<PathBuf>,

    /// Write pages exactly as rendered instead of indenting them
    #[arg(long)]
    no_prettify: bool,

    /// Log every block as it is lowered
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded config.
    fn layout(self, config: SiteConfig) -> SiteLayout {
        let config = match &self.base_path {
            Some(base_path) => config.with_base_path(base_path),
            None => config,
        };

        SiteLayout {
            content_dir: self.content.unwrap_or(config.content_dir),
            static_dir: self.static_dir.unwrap_or(config.static_dir),
            public_dir: self.public.unwrap_or(config.public_dir),
            template_path: self.template.unwrap_or(config.template_path),
            base_path: config.base_path,
            prettify: config.prettify && !self.no_prettify,
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<SiteConfig> {
    let config = match path {
        Some(path) => SiteConfig::load_from_path(path)?
            .with_context(|| format!("Config file {} not found", path.display()))?,
        None => match SiteConfig::load()? {
            Some(config) => config,
            None => {
                log::debug!(
                    "No {} found, using defaults",
                    SiteConfig::config_path().display()
                );
                SiteConfig::default()
            }
        },
    };
    Ok(config)
}

/// Info by default, Debug with `--verbose`; `RUST_LOG` is applied last and
/// overrides either.
fn logger_builder(verbose: bool) -> env_logger::Builder {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();
    builder
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger_builder(cli.verbose).init();

    let config = load_config(cli.config.as_ref())?;
    let layout = cli.layout(config);
    log::debug!("Site layout: {layout:?}");

    let report = build_site(&layout).with_context(|| {
        format!(
            "Failed to build site from {} into {}",
            layout.content_dir.display(),
            layout.public_dir.display()
        )
    })?;

    println!(
        "Generated {} pages and copied {} static files into {}",
        report.pages.len(),
        report.static_files,
        layout.public_dir.display()
    );
    Ok(())
}
