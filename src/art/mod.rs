pub mod cache;
pub mod fetch;
pub mod pipeline;
pub mod transform;

pub use cache::ArtworkCache;
pub use fetch::{ArtError, ArtFetcher, HttpFetcher};
pub use pipeline::{ArtSink, ArtUpdate, ArtworkLoader};
pub use transform::RenderSpec;
