//! HTTP client for the Slidecast video-creation service.
//!
//! The service renders an MP3 track plus still images into a slideshow
//! video and publishes it to YouTube. Creation is asynchronous: the client
//! submits the form data, receives a task identifier, and reads status
//! snapshots from the status endpoint until the task finishes.

pub mod client;
pub mod error;
pub mod types;

pub use client::{ApiClient, ClientConfig};
pub use error::{ClientError, ClientResult};
pub use types::CreateVideoResponse;
