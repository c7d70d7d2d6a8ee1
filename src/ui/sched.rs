//! Worker-to-UI handoff: a task channel drained by the UI-owning loop.

use tokio::sync::mpsc;

pub type UiTask = Box<dyn FnOnce() + Send>;

/// Cloneable sending half handed to fetch workers and confirmation tasks.
/// Tasks from one caller are delivered in submission order; nothing is
/// promised across callers.
#[derive(Clone)]
pub struct UiScheduler {
    tx: mpsc::UnboundedSender<UiTask>,
}

impl UiScheduler {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<UiTask>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Queue a closure to run on the UI-owning loop. Sending is
    /// non-blocking so workers can call this from blocking contexts.
    pub fn schedule<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.tx.send(Box::new(task)).is_err() {
            log::debug!("dropping UI task: event loop has shut down");
        }
    }
}
