use serde::Deserialize;

use crate::ui::likes::LikeStatus;

/// One thumbnail rendition of a track or artist image. The API reports
/// them smallest first, so the last entry is the largest available.
#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Typed track payload as delivered by the API client. Every field except
/// the title list is optional in practice; absence means the backend did
/// not report it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackInfo {
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,
    #[serde(default)]
    pub like_status: LikeStatus,
}

impl TrackInfo {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Unknown Title")
    }

    pub fn display_artist(&self) -> &str {
        self.artist.as_deref().unwrap_or("Unknown Artist")
    }

    /// URL of the largest reported thumbnail.
    pub fn best_thumbnail(&self) -> Option<&str> {
        self.thumbnails.last().map(|thumb| thumb.url.as_str())
    }
}

/// Rewrite a thumbnail URL to request the full-size rendition instead of
/// the listing-sized one the API hands out.
pub fn upscale_thumbnail_url(url: &str) -> String {
    url.replace("w120-h120", "w640-h640")
        .replace("sddefault", "maxresdefault")
}

/// Format a position or duration in seconds as `m:ss`.
pub fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_deserializes_camel_case_payload() {
        let track: TrackInfo = serde_json::from_str(
            r#"{
                "videoId": "dQw4w9WgXcQ",
                "title": "Some Song",
                "artist": "Some Artist",
                "likeStatus": "DISLIKE",
                "thumbnails": [
                    {"url": "https://img.example/small", "width": 60, "height": 60},
                    {"url": "https://img.example/large", "width": 544, "height": 544}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(track.video_id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(track.like_status, LikeStatus::Disliked);
        assert_eq!(track.best_thumbnail(), Some("https://img.example/large"));
    }

    #[test]
    fn test_track_defaults_for_sparse_payload() {
        let track: TrackInfo = serde_json::from_str(r#"{"title": "Only A Title"}"#).unwrap();

        assert_eq!(track.display_title(), "Only A Title");
        assert_eq!(track.display_artist(), "Unknown Artist");
        assert_eq!(track.like_status, LikeStatus::Indifferent);
        assert!(track.best_thumbnail().is_none());
    }

    #[test]
    fn test_display_title_falls_back() {
        let track = TrackInfo::default();
        assert_eq!(track.display_title(), "Unknown Title");
    }

    #[test]
    fn test_upscale_thumbnail_url() {
        assert_eq!(
            upscale_thumbnail_url("https://img.example/cover=w120-h120-rj"),
            "https://img.example/cover=w640-h640-rj"
        );
        assert_eq!(
            upscale_thumbnail_url("https://img.example/vi/abc/sddefault.jpg"),
            "https://img.example/vi/abc/maxresdefault.jpg"
        );
        assert_eq!(
            upscale_thumbnail_url("https://img.example/plain.png"),
            "https://img.example/plain.png"
        );
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(59.9), "0:59");
        assert_eq!(format_time(61.0), "1:01");
        assert_eq!(format_time(754.3), "12:34");
        assert_eq!(format_time(-3.0), "0:00");
    }
}
