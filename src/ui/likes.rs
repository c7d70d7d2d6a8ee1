//! Optimistic like/dislike rating for the current track.
//!
//! A toggle flips the state in the UI immediately, then confirms with the
//! backend on a worker. A rejected or failed confirmation reverts to the
//! exact pre-toggle state on the UI loop.

use std::sync::{Arc, Mutex, PoisonError};

use serde::Deserialize;

use crate::ui::sched::UiScheduler;

/// Per-track rating as the backend reports it. `Disliked` is only ever
/// assigned from external data; toggling moves between `Liked` and
/// `Indifferent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum LikeStatus {
    #[serde(rename = "LIKE")]
    Liked,
    #[serde(rename = "DISLIKE")]
    Disliked,
    #[default]
    #[serde(rename = "INDIFFERENT")]
    Indifferent,
}

impl LikeStatus {
    /// The state a toggle moves to: liked tracks become indifferent,
    /// everything else becomes liked.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            LikeStatus::Liked => LikeStatus::Indifferent,
            LikeStatus::Disliked | LikeStatus::Indifferent => LikeStatus::Liked,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LikeStatus::Liked => "LIKE",
            LikeStatus::Disliked => "DISLIKE",
            LikeStatus::Indifferent => "INDIFFERENT",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            LikeStatus::Liked => "♥",
            LikeStatus::Disliked => "⊘",
            LikeStatus::Indifferent => "♡",
        }
    }

    fn tooltip(self) -> &'static str {
        match self {
            LikeStatus::Liked => "Unlike",
            LikeStatus::Disliked => "Disliked",
            LikeStatus::Indifferent => "Like",
        }
    }
}

/// Rating confirmation boundary, implemented over the API client. Blocking;
/// always invoked from a worker, never from the UI loop. `Ok(false)` means
/// the backend rejected the rating.
pub trait RatingBackend: Send + Sync {
    fn rate(&self, track_id: &str, status: LikeStatus) -> color_eyre::Result<bool>;
}

pub struct LikeButton {
    backend: Arc<dyn RatingBackend>,
    ui: UiScheduler,
    state: Arc<Mutex<ButtonState>>,
}

#[derive(Debug)]
struct ButtonState {
    track_id: Option<String>,
    status: LikeStatus,
    icon: &'static str,
    tooltip: &'static str,
    visible: bool,
}

impl ButtonState {
    fn refresh_icon(&mut self) {
        self.icon = self.status.icon();
        self.tooltip = self.status.tooltip();
    }
}

impl LikeButton {
    pub fn new(backend: Arc<dyn RatingBackend>, ui: UiScheduler) -> Self {
        let mut state = ButtonState {
            track_id: None,
            status: LikeStatus::Indifferent,
            icon: "",
            tooltip: "",
            visible: false,
        };
        state.refresh_icon();
        Self {
            backend,
            ui,
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Assign the button to a track with its externally reported status.
    /// The button is hidden while no track is assigned.
    pub fn set_data(&self, track_id: Option<String>, status: LikeStatus) {
        let mut state = lock(&self.state);
        state.visible = track_id.is_some();
        state.track_id = track_id;
        state.status = status;
        state.refresh_icon();
    }

    /// Flip the rating optimistically and confirm in the background.
    pub fn toggle(&self) {
        let (track_id, old_status, new_status) = {
            let mut state = lock(&self.state);
            let Some(track_id) = state.track_id.clone() else {
                return;
            };
            let old_status = state.status;
            state.status = old_status.toggled();
            state.refresh_icon();
            (track_id, old_status, state.status)
        };

        log::debug!("rating {} as {}", track_id, new_status.as_str());

        let backend = Arc::clone(&self.backend);
        let ui = self.ui.clone();
        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            let outcome =
                tokio::task::spawn_blocking(move || backend.rate(&track_id, new_status)).await;
            let confirmed = match outcome {
                Ok(Ok(confirmed)) => confirmed,
                Ok(Err(e)) => {
                    log::warn!("rating request failed: {}", e);
                    false
                }
                Err(e) => {
                    log::warn!("rating task aborted: {}", e);
                    false
                }
            };

            if !confirmed {
                log::warn!("rating not confirmed, reverting to {}", old_status.as_str());
                ui.schedule(move || {
                    let mut state = lock(&state);
                    state.status = old_status;
                    state.refresh_icon();
                });
            }
        });
    }

    pub fn status(&self) -> LikeStatus {
        lock(&self.state).status
    }

    pub fn icon(&self) -> &'static str {
        lock(&self.state).icon
    }

    pub fn tooltip(&self) -> &'static str {
        lock(&self.state).tooltip
    }

    pub fn is_visible(&self) -> bool {
        lock(&self.state).visible
    }
}

fn lock(state: &Arc<Mutex<ButtonState>>) -> std::sync::MutexGuard<'_, ButtonState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
