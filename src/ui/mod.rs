pub mod artwork;
pub mod likes;
pub mod marquee;
pub mod sched;

pub use artwork::ArtSurface;
pub use likes::{LikeButton, LikeStatus, RatingBackend};
pub use marquee::Marquee;
pub use sched::{UiScheduler, UiTask};
