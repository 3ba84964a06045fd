use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PressroomError, Result};

/// Where an interview's footage lives: an external YouTube video or a file
/// uploaded alongside the create request. Exactly one variant per interview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VideoSource {
    Youtube {
        #[serde(rename = "videoId")]
        video_id: String,
    },
    Local {
        path: String,
        #[serde(rename = "mimeType")]
        mime_type: String,
    },
}

static YOUTUBE_HOST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?(www\.)?(youtube\.com|youtu\.?be)/.+$").unwrap()
});

/// Ordered alternatives; the first one that matches wins. The generic form
/// covers embed/share paths, the later two the plain watch and short links.
static VIDEO_ID_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(
            r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
        )
        .unwrap(),
        Regex::new(r#"youtube\.com/watch\?v=([^"&?/\s]{11})"#).unwrap(),
        Regex::new(r#"youtu\.be/([^"&?/\s]{11})"#).unwrap(),
    ]
});

/// Whether the link points at a recognized video host at all.
pub fn is_video_host_link(link: &str) -> bool {
    YOUTUBE_HOST.is_match(link)
}

/// Extract the 11-character video identifier, trying each pattern in order.
pub fn extract_video_id(link: &str) -> Option<String> {
    VIDEO_ID_PATTERNS
        .iter()
        .find_map(|p| p.captures(link))
        .map(|c| c[1].to_string())
}

impl VideoSource {
    /// Build the external variant from a user-supplied link, rejecting links
    /// that are not YouTube or carry no extractable video id.
    pub fn from_link(link: &str) -> Result<Self> {
        if !is_video_host_link(link) {
            return Err(PressroomError::Validation(
                "Invalid YouTube link".to_string(),
            ));
        }
        let video_id = extract_video_id(link).ok_or_else(|| {
            PressroomError::Validation(
                "Could not extract a video id from the YouTube link".to_string(),
            )
        })?;
        Ok(VideoSource::Youtube { video_id })
    }

    pub fn from_upload(path: String, mime_type: String) -> Self {
        VideoSource::Local { path, mime_type }
    }
}
