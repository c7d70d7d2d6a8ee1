use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;

pub use crate::app::main_loop::AppMainLoop;
use crate::app::config::Config;
use crate::art::{ArtworkCache, ArtworkLoader, HttpFetcher, RenderSpec};
use crate::track::{TrackInfo, upscale_thumbnail_url};
use crate::ui::{ArtSurface, LikeButton, Marquee, RatingBackend, UiScheduler, UiTask};

// Module declarations
pub mod cli;
pub mod config;
pub mod logging;
pub mod main_loop;

/// Columns available to the now-playing title line.
const TITLE_VIEWPORT_COLS: u16 = 40;

/// The UI-owning side of the client: the expanded player's square cover,
/// the mini-player thumbnail, a marquee title, and a like button, all fed
/// by background workers through the scheduler.
pub struct App {
    pub cache: Arc<ArtworkCache>,
    pub loader: ArtworkLoader,
    pub ui: UiScheduler,
    pub cover: ArtSurface,
    pub thumb: ArtSurface,
    pub title: Marquee,
    pub artist: String,
    pub like_btn: LikeButton,
    pub running: bool,
}

impl App {
    /// Build the app and hand back the task receiver the main loop drains.
    pub fn new(
        config: &Config,
        backend: Arc<dyn RatingBackend>,
    ) -> (Self, UnboundedReceiver<UiTask>) {
        let (ui, tasks) = UiScheduler::new();
        let cache = Arc::new(ArtworkCache::new());
        let loader = ArtworkLoader::new(
            Arc::clone(&cache),
            Arc::new(HttpFetcher::new()),
            ui.clone(),
        );

        let cover = ArtSurface::new(
            loader.clone(),
            RenderSpec::square(config.artwork.cover_size).with_square_crop(),
        );
        let thumb = ArtSurface::new(
            loader.clone(),
            RenderSpec::square(config.artwork.thumb_size),
        );
        let title = Marquee::new(TITLE_VIEWPORT_COLS);
        let like_btn = LikeButton::new(backend, ui.clone());

        let app = Self {
            cache,
            loader,
            ui,
            cover,
            thumb,
            title,
            artist: String::new(),
            like_btn,
            running: false,
        };
        (app, tasks)
    }

    /// Apply a metadata change: retitle the marquee, swap the cover art,
    /// and repoint the like button.
    pub fn set_now_playing(&mut self, track: &TrackInfo) {
        log::info!(
            "now playing: {} - {}",
            track.display_artist(),
            track.display_title()
        );

        self.title.set_text(track.display_title());
        self.artist = track.display_artist().to_string();

        // The mini-player uses the listing-sized rendition as-is; the
        // expanded cover requests the full-size one.
        self.thumb.load_url(track.best_thumbnail());
        match track.best_thumbnail() {
            Some(url) => self.cover.load_url(Some(&upscale_thumbnail_url(url))),
            None => self.cover.load_url(None),
        }

        self.like_btn.set_data(track.video_id.clone(), track.like_status);
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}
