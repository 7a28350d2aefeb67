//! Shared data models for the Slidecast client.
//!
//! This crate provides Serde-serializable types for:
//! - Task handles and status snapshots returned by the video service
//! - Video submission forms (audio track + slideshow images)
//! - YouTube upload metadata

pub mod task;
pub mod video;

// Re-export common types
pub use task::{TaskId, TaskState, TaskStatus, VideoResult};
pub use video::{UploadMeta, VideoForm, DEFAULT_UPLOAD_DESCRIPTION, DEFAULT_UPLOAD_TITLE};
