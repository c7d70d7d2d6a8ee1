use std::io::Write;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;

use super::App;
use crate::ui::UiTask;

/// Interval between animation frames (~60 Hz)
const FRAME_INTERVAL_MS: u64 = 16;

/// Trait for main application loop
pub trait AppMainLoop {
    async fn run(self, tasks: UnboundedReceiver<UiTask>) -> color_eyre::Result<()>
    where
        Self: Sized;
}

impl AppMainLoop for App {
    /// Run the UI-owning event loop: drain worker handoffs, advance the
    /// marquee once per frame, and redraw the status line.
    async fn run(mut self, mut tasks: UnboundedReceiver<UiTask>) -> color_eyre::Result<()> {
        self.running = true;

        let frame_interval = tokio::time::interval(Duration::from_millis(FRAME_INTERVAL_MS));
        tokio::pin!(frame_interval);

        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        // The title is on screen for the whole session
        self.title.start();

        log::info!("Entering event-driven main loop");

        while self.running {
            tokio::select! {
                // Results handed over by fetch and confirmation workers
                Some(task) = tasks.recv() => {
                    task();
                }

                // Frame clock for the marquee and the status line
                _ = frame_interval.tick() => {
                    self.title.tick();
                    self.draw();
                }

                _ = &mut shutdown => {
                    log::info!("Received interrupt, shutting down gracefully");
                    self.quit();
                }
            }
        }

        // Apply whatever workers already handed over before exiting
        while let Ok(task) = tasks.try_recv() {
            task();
        }

        self.title.stop();
        self.cache.log_stats();
        println!();

        Ok(())
    }
}

impl App {
    fn draw(&self) {
        let like = if self.like_btn.is_visible() {
            self.like_btn.icon()
        } else {
            " "
        };
        // Show the thumbnail while the full-size cover is still loading
        let art = match (self.cover.image(), self.thumb.image()) {
            (Some(cover), _) => format!("{}x{}", cover.width(), cover.height()),
            (None, Some(thumb)) => format!("{}x{} thumb", thumb.width(), thumb.height()),
            (None, None) => "no art".to_string(),
        };

        print!(
            "\r{:40}  {}  {} [{}]\x1b[K",
            self.title.window(),
            like,
            self.artist,
            art
        );
        let _ = std::io::stdout().flush();
    }
}
