//! Gallerist
//!
//! A headless renderer for the data-driven "gallery" section of a static
//! website. It fetches a JSON list of project entries, validates and orders
//! them (newest first), promotes one entry to a featured slot, and installs
//! generated HTML (one large featured card plus a grid of thumbnail cards)
//! into a container region of a host page.
//!
//! # Behavior
//!
//! - **Untrusted input**: every piece of entry-supplied text is HTML-escaped
//!   before interpolation; entries missing a string `title` or `date` are
//!   dropped individually.
//! - **Absorbing failures**: [`Gallery::render`] never returns an error. A
//!   failed fetch leaves the page's existing content (and with it any static
//!   fallback gallery) untouched; an empty or invalid payload swaps in a
//!   short placeholder message.
//! - **No caching**: each render re-fetches, with a cache-busting query
//!   parameter on the HTTP source, and fully replaces the container content
//!   in one step.
//!
//! # Example
//!
//! ```no_run
//! use gallerist::{GalleryConfig, StaticPage};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GalleryConfig::default();
//! let gallery = gallerist::new_gallery("https://example.com/data/projects.json", config)?;
//!
//! let mut page = StaticPage::new("<html><body><div class=\"gallery\"></div></body></html>");
//! gallery.render(&mut page);
//! println!("{}", page.to_html());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod gallery;
pub mod markup;
pub mod model;
pub mod page;
pub mod source;

pub use gallery::Gallery;
pub use model::ProjectEntry;
pub use page::{Page, StaticPage};
#[cfg(feature = "http")]
pub use source::HttpSource;
pub use source::{FileSource, ProjectSource};

/// What to show in the container when the data source cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailurePolicy {
    /// Leave the container untouched so static fallback markup survives.
    PreserveStatic,
    /// Replace the container with the configured failure notice.
    ShowNotice,
}

/// Configuration for a gallery renderer.
///
/// The defaults match the conventional static-site layout: a `.gallery`
/// container inside a `#gallery` section, fetch failures preserving
/// whatever static markup is already on the page.
///
/// # Examples
///
/// ```
/// let cfg = gallerist::GalleryConfig::default();
/// assert_eq!(cfg.container_selector, "#gallery .gallery");
/// ```
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// CSS selector of the container element the markup is installed into
    pub container_selector: String,
    /// User agent sent by the HTTP source
    pub user_agent: String,
    /// What to do with the container when fetch or decode fails
    pub fetch_failure_policy: FetchFailurePolicy,
    /// Message shown when the payload holds no valid entries
    pub empty_message: String,
    /// Message shown on fetch failure under [`FetchFailurePolicy::ShowNotice`]
    pub failure_notice: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            container_selector: "#gallery .gallery".to_string(),
            user_agent: format!("gallerist/{}", env!("CARGO_PKG_VERSION")),
            fetch_failure_policy: FetchFailurePolicy::PreserveStatic,
            empty_message: "Nothing to show here yet. Check back soon!".to_string(),
            failure_notice: "The project gallery is unavailable right now.".to_string(),
        }
    }
}

/// Creates a gallery backed by the HTTP source.
#[cfg(feature = "http")]
pub fn new_gallery(data_url: &str, config: GalleryConfig) -> Result<Gallery<HttpSource>> {
    let source = HttpSource::new(data_url, &config.user_agent)?;
    Ok(Gallery::new(source, config))
}

/// Creates a gallery backed by a local JSON file.
pub fn new_file_gallery(
    path: impl Into<std::path::PathBuf>,
    config: GalleryConfig,
) -> Gallery<FileSource> {
    Gallery::new(FileSource::new(path), config)
}
