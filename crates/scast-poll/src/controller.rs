//! Submit-then-poll orchestration.

use std::sync::Arc;

use tracing::info;

use scast_client::ApiClient;
use scast_models::{TaskId, VideoForm};

use crate::display::StatusDisplay;
use crate::error::PollResult;
use crate::poller::{PollConfig, PollOutcome, StatusPoller};

/// Drives a submission through its full request/poll/display cycle.
///
/// Each invocation owns its task handle and poll loop; nothing is shared
/// between submissions.
pub struct SubmitController {
    client: Arc<ApiClient>,
    poller: StatusPoller,
}

impl SubmitController {
    /// Create a controller with the default poll configuration.
    pub fn new(client: ApiClient) -> Self {
        Self::with_config(client, PollConfig::default())
    }

    /// Create a controller with an explicit poll configuration.
    pub fn with_config(client: ApiClient, config: PollConfig) -> Self {
        let client = Arc::new(client);
        let poller = StatusPoller::new(Arc::clone(&client)).with_config(config);
        Self { client, poller }
    }

    /// Submit the form. Issues exactly one creation request and returns
    /// the task handle without polling.
    pub async fn submit(&self, form: &VideoForm) -> PollResult<TaskId> {
        let task_id = self.client.create_video(form).await?;
        info!(task_id = %task_id, video_name = %form.video_name, "Creation task queued");
        Ok(task_id)
    }

    /// Submit the form and poll the task to completion, rewriting the
    /// display after each tick.
    pub async fn submit_and_poll(
        &self,
        form: &VideoForm,
        display: &mut dyn StatusDisplay,
    ) -> PollResult<PollOutcome> {
        let task_id = self.submit(form).await?;
        self.poller.run(&task_id, display).await
    }

    /// The poller over this controller's client, for attaching to an
    /// existing task.
    pub fn poller(&self) -> &StatusPoller {
        &self.poller
    }

    /// The underlying HTTP client.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}
