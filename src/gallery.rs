//! The gallery renderer.
//!
//! `render()` is the absorbing error boundary of the crate: whatever goes
//! wrong while fetching or decoding the payload is logged and handled here,
//! and nothing propagates to the caller. A failed render leaves the page's
//! existing content in place so a static fallback gallery survives.

use crate::markup::{self, escape_html};
use crate::model;
use crate::page::Page;
use crate::source::ProjectSource;
use crate::{FetchFailurePolicy, GalleryConfig};

/// Renders a project gallery into a container region of a host page.
pub struct Gallery<S: ProjectSource> {
    source: S,
    config: GalleryConfig,
}

impl<S: ProjectSource> Gallery<S> {
    pub fn new(source: S, config: GalleryConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Fetches the payload and replaces the container's content.
    ///
    /// Safe to call repeatedly: each call independently re-fetches and
    /// fully replaces the container. When the container selector matches
    /// nothing in `page`, the call is a silent no-op. Never returns an
    /// error; see the crate docs for the failure policy.
    pub fn render(&self, page: &mut dyn Page) {
        let selector = &self.config.container_selector;
        if !page.has_element(selector) {
            log::debug!("Gallery container {:?} not found; nothing to do", selector);
            return;
        }

        let payload = match self.source.fetch() {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!(
                    "Could not load gallery data from {}: {}",
                    self.source.describe(),
                    e
                );
                if self.config.fetch_failure_policy == FetchFailurePolicy::ShowNotice {
                    page.set_content(
                        selector,
                        &format!("<p>{}</p>", escape_html(&self.config.failure_notice)),
                    );
                }
                return;
            }
        };

        let mut entries = model::collect_valid(&payload);
        if entries.is_empty() {
            page.set_content(
                selector,
                &format!("<p>{}</p>", escape_html(&self.config.empty_message)),
            );
            return;
        }

        model::order_newest_first(&mut entries);
        let Some((featured, rest)) = model::select_featured(entries) else {
            return;
        };
        page.set_content(selector, &markup::gallery_fragment(&featured, &rest));
    }
}
