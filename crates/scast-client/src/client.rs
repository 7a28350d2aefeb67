//! Video service HTTP client.

use std::path::Path;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::debug;

use scast_models::{TaskId, TaskStatus, UploadMeta, VideoForm};

use crate::error::{ClientError, ClientResult};
use crate::types::CreateVideoResponse;

/// Configuration for the video service client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the video service
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("SLIDECAST_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            timeout: Duration::from_secs(
                std::env::var("SLIDECAST_HTTP_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }
}

/// Client for the video-creation service.
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a new client.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Submit a video creation form.
    ///
    /// Issues exactly one POST and returns the identifier of the queued
    /// task. The audio extension is checked before any bytes are sent.
    pub async fn create_video(&self, form: &VideoForm) -> ClientResult<TaskId> {
        if !form.has_mp3_audio() {
            return Err(ClientError::InvalidAudioFormat(form.audio.clone()));
        }

        let url = format!("{}/create_video", self.config.base_url);
        debug!("Submitting video '{}' to {}", form.video_name, url);

        let mut multipart = Form::new()
            .text("video_name", form.video_name.clone())
            .part("audio", file_part(&form.audio, "audio/mpeg").await?);

        for image in &form.images {
            let mime = image_mime(image);
            multipart = multipart.part("images", file_part(image, mime).await?);
        }

        let response = self.http.post(&url).multipart(multipart).send().await?;
        let response = check_status(response).await?;

        let created: CreateVideoResponse = response.json().await?;
        debug!("Video '{}' queued as task {}", form.video_name, created.task_id);

        Ok(created.task_id)
    }

    /// Fetch the current status snapshot of a task.
    ///
    /// The identifier is used verbatim in the request URL.
    pub async fn task_status(&self, task_id: &TaskId) -> ClientResult<TaskStatus> {
        let url = format!("{}/task_status/{}", self.config.base_url, task_id);

        let response = self.http.get(&url).send().await?;
        let response = check_status(response).await?;

        let status: TaskStatus = response.json().await?;
        Ok(status)
    }

    /// Publish an already-rendered video to YouTube.
    ///
    /// Returns the server's message; interpretation is left to the caller.
    pub async fn upload_youtube(
        &self,
        video_filename: &str,
        meta: &UploadMeta,
    ) -> ClientResult<String> {
        let url = format!("{}/upload_youtube/{}", self.config.base_url, video_filename);
        debug!("Uploading '{}' to YouTube via {}", video_filename, url);

        let response = self
            .http
            .post(&url)
            .form(&[("title", &meta.title), ("description", &meta.description)])
            .send()
            .await?;
        let response = check_status(response).await?;

        Ok(response.text().await?)
    }
}

/// Map a non-2xx response to `RequestFailed` with status and body.
async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::RequestFailed { status, body })
}

/// Build a multipart file part from a path.
async fn file_part(path: &Path, mime: &str) -> ClientResult<Part> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| ClientError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Part::bytes(bytes).file_name(file_name).mime_str(mime)?)
}

/// Content type for an image path, by extension.
fn image_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
