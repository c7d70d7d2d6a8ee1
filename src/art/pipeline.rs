//! Artwork loading pipeline: cache check, background fetch + decode, and
//! handoff of the transform/apply step to the UI-owning loop.
//!
//! Requests for an uncached URL each spawn their own blocking worker; there
//! is no de-duplication and no cancellation. Concurrent misses on one key
//! converge on equivalent cached content because decode is deterministic.

use std::sync::Arc;

use image::RgbaImage;

use crate::art::cache::ArtworkCache;
use crate::art::fetch::{ArtFetcher, decode};
use crate::art::transform::{RenderSpec, render};
use crate::ui::sched::UiScheduler;

/// What a load delivers to its requesting surface.
pub enum ArtUpdate {
    /// Transformed artwork at the requested target size.
    Image(Arc<RgbaImage>),
    /// No artwork for this request; show the placeholder.
    Placeholder,
}

/// One-shot apply callback, invoked on the UI thread (or synchronously on
/// the caller for the cache-hit and placeholder paths).
pub type ArtSink = Box<dyn FnOnce(ArtUpdate) + Send>;

/// Entry point for asynchronous artwork loading.
#[derive(Clone)]
pub struct ArtworkLoader {
    cache: Arc<ArtworkCache>,
    fetcher: Arc<dyn ArtFetcher>,
    ui: UiScheduler,
}

impl ArtworkLoader {
    pub fn new(cache: Arc<ArtworkCache>, fetcher: Arc<dyn ArtFetcher>, ui: UiScheduler) -> Self {
        Self { cache, fetcher, ui }
    }

    pub fn cache(&self) -> &Arc<ArtworkCache> {
        &self.cache
    }

    /// Load `url`, render it to `spec`, and apply it through `sink`.
    ///
    /// An empty URL applies the placeholder synchronously. A cache hit
    /// transforms and applies synchronously on the calling thread, which is
    /// assumed to be the UI thread for that path. A miss fetches and
    /// decodes on a blocking worker, inserts into the cache, and schedules
    /// the transform + apply onto the UI loop. Fetch and decode failures
    /// are logged and swallowed; the sink is never invoked for them.
    pub fn load(&self, url: &str, spec: RenderSpec, sink: ArtSink) {
        if url.is_empty() {
            sink(ArtUpdate::Placeholder);
            return;
        }

        if let Some(decoded) = self.cache.get(url) {
            sink(ArtUpdate::Image(Arc::new(render(&decoded, spec))));
            return;
        }

        let url = url.to_string();
        let cache = Arc::clone(&self.cache);
        let fetcher = Arc::clone(&self.fetcher);
        let ui = self.ui.clone();

        tokio::task::spawn_blocking(move || {
            let decoded = match fetcher.fetch(&url).and_then(|bytes| decode(&bytes)) {
                Ok(image) => Arc::new(image),
                Err(e) => {
                    log::warn!("failed to load artwork {}: {}", url, e);
                    return;
                }
            };

            cache.insert(url.clone(), Arc::clone(&decoded));
            log::debug!("artwork cached for {}", url);

            ui.schedule(move || {
                sink(ArtUpdate::Image(Arc::new(render(&decoded, spec))));
            });
        });
    }
}
