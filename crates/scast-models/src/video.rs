//! Video submission and upload metadata models.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default YouTube title when the user does not provide one.
pub const DEFAULT_UPLOAD_TITLE: &str = "Titre par défaut";

/// Default YouTube description when the user does not provide one.
pub const DEFAULT_UPLOAD_DESCRIPTION: &str = "Description par défaut";

/// A slideshow-video submission: one MP3 track plus the images to cycle
/// through for its duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoForm {
    /// Output video name (extension is added server-side)
    pub video_name: String,
    /// Path to the MP3 audio track
    pub audio: PathBuf,
    /// Paths to the slideshow images, in display order
    pub images: Vec<PathBuf>,
}

impl VideoForm {
    /// Create a new submission.
    pub fn new(
        video_name: impl Into<String>,
        audio: impl Into<PathBuf>,
        images: Vec<PathBuf>,
    ) -> Self {
        Self {
            video_name: video_name.into(),
            audio: audio.into(),
            images,
        }
    }

    /// Check that the audio track carries an `.mp3` extension.
    ///
    /// The server rejects anything else, so the check runs client-side
    /// before any bytes are sent.
    pub fn has_mp3_audio(&self) -> bool {
        has_extension(&self.audio, "mp3")
    }
}

/// Metadata for publishing a rendered video to YouTube.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadMeta {
    /// Video title
    pub title: String,
    /// Video description
    pub description: String,
}

impl Default for UploadMeta {
    fn default() -> Self {
        Self {
            title: DEFAULT_UPLOAD_TITLE.to_string(),
            description: DEFAULT_UPLOAD_DESCRIPTION.to_string(),
        }
    }
}

impl UploadMeta {
    /// Create metadata, falling back to the defaults for absent fields.
    pub fn new(title: Option<String>, description: Option<String>) -> Self {
        Self {
            title: title.unwrap_or_else(|| DEFAULT_UPLOAD_TITLE.to_string()),
            description: description.unwrap_or_else(|| DEFAULT_UPLOAD_DESCRIPTION.to_string()),
        }
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_form_mp3_check() {
        let form = VideoForm::new("clip", "song.mp3", vec![PathBuf::from("a.png")]);
        assert!(form.has_mp3_audio());

        let form = VideoForm::new("clip", "song.MP3", vec![]);
        assert!(form.has_mp3_audio());

        let form = VideoForm::new("clip", "song.wav", vec![]);
        assert!(!form.has_mp3_audio());

        let form = VideoForm::new("clip", "song", vec![]);
        assert!(!form.has_mp3_audio());
    }

    #[test]
    fn test_upload_meta_defaults() {
        let meta = UploadMeta::default();
        assert_eq!(meta.title, "Titre par défaut");
        assert_eq!(meta.description, "Description par défaut");

        let meta = UploadMeta::new(Some("Ma vidéo".into()), None);
        assert_eq!(meta.title, "Ma vidéo");
        assert_eq!(meta.description, DEFAULT_UPLOAD_DESCRIPTION);
    }
}
