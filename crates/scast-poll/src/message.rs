//! User-facing status lines.
//!
//! The product speaks French; the exact wording is part of the contract
//! with its users, so formatting is centralized here.

use scast_models::TaskStatus;

/// Line displayed when the video has been created and published.
pub fn success(video_id: &str) -> String {
    format!("Vidéo créée avec succès ! ID YouTube: {video_id}")
}

/// Line displayed when the task failed.
pub fn failure(error: &str) -> String {
    format!("Erreur: {error}")
}

/// Line displayed while the task is in progress.
pub fn progress(percent: u8) -> String {
    format!("Progression: {percent}%")
}

/// Status line for a snapshot, whatever its state.
pub fn status_line(status: &TaskStatus) -> String {
    use scast_models::TaskState;

    match status.state {
        TaskState::Success => success(
            status
                .result
                .as_ref()
                .map(|r| r.video_id.as_str())
                .unwrap_or_default(),
        ),
        TaskState::Failure => failure(status.error_message()),
        _ => progress(status.progress_or_zero()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scast_models::{TaskState, VideoResult};

    #[test]
    fn test_exact_wording() {
        assert_eq!(
            success("yt-42"),
            "Vidéo créée avec succès ! ID YouTube: yt-42"
        );
        assert_eq!(failure("disk full"), "Erreur: disk full");
        assert_eq!(progress(0), "Progression: 0%");
        assert_eq!(progress(73), "Progression: 73%");
    }

    #[test]
    fn test_status_line_branches_on_state() {
        let status = TaskStatus {
            state: TaskState::Success,
            progress: Some(100),
            result: Some(VideoResult {
                video_id: "yt-42".into(),
            }),
            error: None,
        };
        assert_eq!(
            status_line(&status),
            "Vidéo créée avec succès ! ID YouTube: yt-42"
        );

        let status = TaskStatus {
            state: TaskState::Pending,
            progress: None,
            result: None,
            error: None,
        };
        assert_eq!(status_line(&status), "Progression: 0%");
    }
}
