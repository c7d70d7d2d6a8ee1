//! Per-element artwork surface.
//!
//! A surface owns the rendered image for one UI element and guards against
//! late applies: every `load_url` bumps a generation, and a worker finishing
//! for an earlier generation is dropped instead of overwriting newer state.

use std::sync::{Arc, Mutex, PoisonError};

use image::RgbaImage;

use crate::art::pipeline::{ArtUpdate, ArtworkLoader};
use crate::art::transform::RenderSpec;

pub struct ArtSurface {
    loader: ArtworkLoader,
    spec: RenderSpec,
    state: Arc<Mutex<SurfaceState>>,
}

#[derive(Default)]
struct SurfaceState {
    /// None renders as the placeholder.
    image: Option<Arc<RgbaImage>>,
    generation: u64,
}

impl ArtSurface {
    pub fn new(loader: ArtworkLoader, spec: RenderSpec) -> Self {
        Self {
            loader,
            spec,
            state: Arc::new(Mutex::new(SurfaceState::default())),
        }
    }

    /// Point the surface at a new source URL. `None` or an empty string
    /// shows the placeholder immediately; anything an in-flight load for a
    /// previous URL later delivers is discarded.
    pub fn load_url(&self, url: Option<&str>) {
        let generation = {
            let mut state = lock(&self.state);
            state.generation += 1;
            state.generation
        };

        let state = Arc::clone(&self.state);
        let sink = Box::new(move |update: ArtUpdate| {
            let mut state = lock(&state);
            if state.generation != generation {
                log::debug!("discarding stale artwork apply");
                return;
            }
            state.image = match update {
                ArtUpdate::Image(image) => Some(image),
                ArtUpdate::Placeholder => None,
            };
        });

        self.loader.load(url.unwrap_or(""), self.spec, sink);
    }

    /// The currently applied artwork, or `None` for the placeholder.
    pub fn image(&self) -> Option<Arc<RgbaImage>> {
        lock(&self.state).image.clone()
    }

    pub fn is_placeholder(&self) -> bool {
        self.image().is_none()
    }
}

fn lock(state: &Arc<Mutex<SurfaceState>>) -> std::sync::MutexGuard<'_, SurfaceState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::art::cache::ArtworkCache;
    use crate::art::fetch::{ArtError, ArtFetcher};
    use crate::ui::sched::UiScheduler;
    use std::io::Cursor;

    struct PngFetcher(Vec<u8>);

    impl PngFetcher {
        fn new(w: u32, h: u32) -> Self {
            let image = RgbaImage::from_pixel(w, h, image::Rgba([50, 60, 70, 255]));
            let mut buf = Vec::new();
            image
                .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
                .unwrap();
            Self(buf)
        }
    }

    impl ArtFetcher for PngFetcher {
        fn fetch(&self, _url: &str) -> Result<Vec<u8>, ArtError> {
            Ok(self.0.clone())
        }
    }

    fn surface_fixture() -> (
        ArtSurface,
        tokio::sync::mpsc::UnboundedReceiver<crate::ui::sched::UiTask>,
    ) {
        let (ui, rx) = UiScheduler::new();
        let loader = ArtworkLoader::new(
            Arc::new(ArtworkCache::new()),
            Arc::new(PngFetcher::new(16, 8)),
            ui,
        );
        (ArtSurface::new(loader, RenderSpec::square(8)), rx)
    }

    #[tokio::test]
    async fn test_surface_applies_loaded_artwork() {
        let (surface, mut rx) = surface_fixture();
        assert!(surface.is_placeholder());

        surface.load_url(Some("https://img.example/cover"));
        rx.recv().await.unwrap()();

        assert_eq!(surface.image().unwrap().dimensions(), (8, 8));
    }

    #[tokio::test]
    async fn test_surface_none_url_shows_placeholder() {
        let (surface, mut rx) = surface_fixture();

        surface.load_url(Some("https://img.example/cover"));
        rx.recv().await.unwrap()();
        surface.load_url(None);

        assert!(surface.is_placeholder());
    }

    #[tokio::test]
    async fn test_stale_apply_is_discarded() {
        let (surface, mut rx) = surface_fixture();

        // First load is in flight when the surface is reassigned
        surface.load_url(Some("https://img.example/old"));
        surface.load_url(None);

        // The old worker's apply arrives afterwards and must not win
        rx.recv().await.unwrap()();
        assert!(surface.is_placeholder());
    }
}
