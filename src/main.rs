use std::sync::Arc;

use clap::Parser;

use lyrebird::app::cli::Args;
use lyrebird::app::config::Config;
use lyrebird::app::{App, AppMainLoop, logging};
use lyrebird::track::{Thumbnail, TrackInfo};
use lyrebird::ui::{LikeStatus, RatingBackend};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Parse command line arguments
    let args = Args::parse();

    // Handle --generate-config option
    if let Some(path) = &args.generate_config {
        let config_path = if path.is_dir() || path.to_str() == Some(".") {
            path.join("config.toml")
        } else {
            path.clone()
        };
        Config::generate_default(config_path)?;
        return Ok(());
    }

    // Load config first for logger initialization
    let config = Config::load(args.config.clone())?;

    if config.logging.enabled {
        logging::ensure_log_directory()?;
        logging::init_logger(&config.logging)?;
        logging::log_startup_info();
    }

    // The track to display: from a JSON payload file, or a built-in sample
    let track: TrackInfo = match &args.track {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => sample_track(),
    };

    let backend: Arc<dyn RatingBackend> = Arc::new(LoggingRatingBackend);
    let (mut app, tasks) = App::new(&config, backend);
    app.set_now_playing(&track);

    let logging_enabled = config.logging.enabled;
    let result = app.run(tasks).await;

    if logging_enabled {
        logging::log_shutdown_info();
    }

    result
}

/// Stand-in for the API client's rating endpoint: accepts everything and
/// logs what a real backend would receive.
struct LoggingRatingBackend;

impl RatingBackend for LoggingRatingBackend {
    fn rate(&self, track_id: &str, status: LikeStatus) -> color_eyre::Result<bool> {
        log::info!("rate {} -> {}", track_id, status.as_str());
        Ok(true)
    }
}

fn sample_track() -> TrackInfo {
    TrackInfo {
        video_id: Some("sample-track".to_string()),
        title: Some("The Quick Brown Fox Jumps Over The Lazy Dog (Extended Mix)".to_string()),
        artist: Some("Sample Artist".to_string()),
        album: None,
        thumbnails: vec![Thumbnail {
            url: "https://picsum.photos/640".to_string(),
            width: Some(640),
            height: Some(640),
        }],
        like_status: LikeStatus::Indifferent,
    }
}
