//! Controller error types.

use thiserror::Error;

use scast_client::ClientError;

pub type PollResult<T> = Result<T, PollError>;

#[derive(Debug, Error)]
pub enum PollError {
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Polling stopped before the task finished")]
    Stopped,

    #[error("Poll task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
