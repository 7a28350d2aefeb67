//! Wire request/response types.

use scast_models::TaskId;
use serde::{Deserialize, Serialize};

/// Response from the creation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVideoResponse {
    /// Identifier of the queued creation task
    pub task_id: TaskId,
}
