use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::loader::{default_active, in_display_order, Ordered};

static YOUTUBE_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([^&\n?#]+)").expect("valid youtube pattern")
});

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VideoSamplesSection {
    pub id: String,
    pub section_title: String,
    #[serde(default)]
    pub section_subtitle: Option<String>,
    pub playlist_title: String,
    pub cta_button_text: String,
    pub cta_button_link: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VideoSample {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub youtube_url: String,
    pub duration: String,
    pub thumbnail_url: String,
    pub thumbnail_alt: String,
    pub order_index: i32,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Ordered for VideoSample {
    fn order_index(&self) -> i32 {
        self.order_index
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

impl VideoSample {
    pub fn embed_url(&self) -> Option<String> {
        embed_url(&self.youtube_url)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VideoSamplesContent {
    pub section: VideoSamplesSection,
    pub videos: Vec<VideoSample>,
}

impl VideoSamplesContent {
    pub fn new(section: VideoSamplesSection, videos: Vec<VideoSample>) -> Self {
        Self {
            section,
            videos: in_display_order(videos),
        }
    }

    pub fn fallback() -> Self {
        let section = VideoSamplesSection {
            id: "1".to_string(),
            section_title: "Samples of Explanation".to_string(),
            section_subtitle: Some("Watch our expert teachers demonstrate proper Quran recitation and Arabic pronunciation techniques".to_string()),
            playlist_title: "See More".to_string(),
            cta_button_text: "Join Us Now".to_string(),
            cta_button_link: "/free-trial".to_string(),
        };
        let videos = vec![
            VideoSample {
                id: "1".to_string(),
                title: "Common Mistake In Surah Al-Ikhlas".to_string(),
                description: Some("Learn to avoid common pronunciation mistakes".to_string()),
                youtube_url: "https://www.youtube.com/watch?v=sAV5AcKVEkQ".to_string(),
                duration: "1:33".to_string(),
                thumbnail_url: "/images/video-thumb-1.jpg".to_string(),
                thumbnail_alt: "Surah Al-Ikhlas lesson".to_string(),
                order_index: 1,
                active: true,
            },
            VideoSample {
                id: "2".to_string(),
                title: "Recitation of Surah Al-Ikhlas with proper Tajweed".to_string(),
                description: Some("Master the correct Tajweed rules".to_string()),
                youtube_url: "https://www.youtube.com/watch?v=tDB9zQ0lkvk".to_string(),
                duration: "1:33".to_string(),
                thumbnail_url: "/images/video-thumb-2.jpg".to_string(),
                thumbnail_alt: "Tajweed lesson".to_string(),
                order_index: 2,
                active: true,
            },
        ];
        Self::new(section, videos)
    }

    pub fn initial_video(&self) -> Option<String> {
        self.videos.first().map(|video| video.id.clone())
    }

    pub fn video(&self, id: &str) -> Option<&VideoSample> {
        self.videos.iter().find(|video| video.id == id)
    }
}

/// Rewrites a watch or short link into the embeddable player URL. Links
/// that are not YouTube videos get no player.
pub fn embed_url(source: &str) -> Option<String> {
    let id = YOUTUBE_ID.captures(source)?.get(1)?.as_str();
    Some(format!(
        "https://www.youtube.com/embed/{}?rel=0&showinfo=0&modestbranding=1",
        id
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_link_becomes_embed() {
        assert_eq!(
            embed_url("https://www.youtube.com/watch?v=sAV5AcKVEkQ").as_deref(),
            Some("https://www.youtube.com/embed/sAV5AcKVEkQ?rel=0&showinfo=0&modestbranding=1")
        );
    }

    #[test]
    fn short_link_and_extra_params() {
        assert_eq!(
            embed_url("https://youtu.be/tDB9zQ0lkvk?t=42").as_deref(),
            Some("https://www.youtube.com/embed/tDB9zQ0lkvk?rel=0&showinfo=0&modestbranding=1")
        );
        assert_eq!(
            embed_url("https://www.youtube.com/watch?v=abc123&list=PL1").as_deref(),
            Some("https://www.youtube.com/embed/abc123?rel=0&showinfo=0&modestbranding=1")
        );
    }

    #[test]
    fn other_links_have_no_player() {
        assert_eq!(embed_url("https://vimeo.com/12345"), None);
        assert_eq!(embed_url(""), None);
    }

    #[test]
    fn fallback_starts_on_first_video() {
        let content = VideoSamplesContent::fallback();
        let first = content.initial_video().unwrap();
        assert_eq!(content.video(&first).unwrap().title, "Common Mistake In Surah Al-Ikhlas");
    }
}
