use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use gallerist::{GalleryConfig, Page, StaticPage};

/// Synthetic document used when no page file is given, so the renderer can
/// run with its usual policy and the bare fragment can be read back out.
const BARE_CONTAINER: &str = r#"<html><body><div id="gallery-root"></div></body></html>"#;
const BARE_SELECTOR: &str = "#gallery-root";

#[derive(Parser)]
#[command(name = "gallerist", version, about = "Render a project gallery from a JSON data source")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the gallery into an HTML page, or print the bare fragment
    Render {
        /// URL or local path of the projects JSON
        #[arg(long)]
        data: String,

        /// HTML page whose gallery container receives the markup; omit to
        /// emit the bare fragment
        #[arg(long)]
        page: Option<PathBuf>,

        /// CSS selector of the container element
        #[arg(long, default_value = "#gallery .gallery")]
        selector: String,

        /// Output file (defaults to stdout)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn is_http_url(data: &str) -> bool {
    data.starts_with("http://") || data.starts_with("https://")
}

/// Renders with whichever source fits the data argument. When no usable
/// source exists the page stays in its static form.
fn render_into(page: &mut StaticPage, data: &str, config: GalleryConfig) {
    if is_http_url(data) {
        render_http(page, data, config);
        return;
    }
    gallerist::new_file_gallery(data, config).render(page);
}

#[cfg(feature = "http")]
fn render_http(page: &mut StaticPage, data: &str, config: GalleryConfig) {
    match gallerist::new_gallery(data, config) {
        Ok(gallery) => gallery.render(page),
        Err(e) => {
            log::info!("Dynamic gallery not enabled ({}); keeping the static page", e);
        }
    }
}

#[cfg(not(feature = "http"))]
fn render_http(_page: &mut StaticPage, data: &str, _config: GalleryConfig) {
    log::info!(
        "Built without the `http` feature; cannot fetch {}. Keeping the static page",
        data
    );
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Render {
            data,
            page,
            selector,
            out,
        } => {
            let (mut target, fragment_only) = match &page {
                Some(path) => (
                    StaticPage::from_file(path)
                        .with_context(|| format!("Failed to load page {}", path.display()))?,
                    false,
                ),
                None => (StaticPage::new(BARE_CONTAINER), true),
            };

            let config = GalleryConfig {
                container_selector: if fragment_only {
                    BARE_SELECTOR.to_string()
                } else {
                    selector
                },
                ..Default::default()
            };
            render_into(&mut target, &data, config);

            let output = if fragment_only {
                target.content(BARE_SELECTOR).unwrap_or_default()
            } else {
                target.to_html()
            };

            match out {
                Some(path) => std::fs::write(&path, output)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => println!("{}", output),
            }
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("gallerist: {:#}", e);
        std::process::exit(1);
    }
}
