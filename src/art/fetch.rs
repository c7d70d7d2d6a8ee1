//! The fetch and decode boundary of the artwork pipeline.

use std::io::Cursor;

use image::RgbaImage;
use thiserror::Error;

/// Failures the pipeline logs and swallows; the requesting surface keeps
/// whatever it was showing before.
#[derive(Debug, Error)]
pub enum ArtError {
    #[error("artwork fetch failed: {0}")]
    Fetch(String),
    #[error("artwork decode failed: {0}")]
    Decode(#[from] image::ImageError),
}

/// Blocking byte source for artwork URLs. The seam exists so tests can
/// serve canned bytes without a network.
pub trait ArtFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ArtError>;
}

/// Plain blocking GET, no custom headers, no retries.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ArtError> {
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| ArtError::Fetch(e.to_string()))?;
        let bytes = response
            .bytes()
            .map_err(|e| ArtError::Fetch(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// Decode raw bytes into RGBA pixels, sniffing the format from the data.
pub fn decode(bytes: &[u8]) -> Result<RgbaImage, ArtError> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?;
    Ok(reader.decode()?.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_png(img: &RgbaImage) -> Vec<u8> {
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_decode_round_trips_png() {
        let src = RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
        let decoded = decode(&encode_png(&src)).unwrap();

        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded, src);
    }

    #[test]
    fn test_decode_rejects_malformed_bytes() {
        let result = decode(b"definitely not an image");
        assert!(matches!(result, Err(ArtError::Decode(_))));
    }
}
