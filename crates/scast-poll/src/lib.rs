//! Submission and status-polling controller.
//!
//! Orchestrates the request/poll/display cycle: one creation request, then
//! a recurring status poll (1000 ms by default) that rewrites the status
//! display until the task reaches a terminal state. The poll loop is a
//! cancellable scheduled task with an explicit stop handle, and all loop
//! state is owned by the controller invocation, so concurrent submissions
//! do not interfere.

pub mod controller;
pub mod display;
pub mod error;
pub mod message;
pub mod poller;

pub use controller::SubmitController;
pub use display::StatusDisplay;
pub use error::{PollError, PollResult};
pub use poller::{PollConfig, PollHandle, PollOutcome, StatusPoller};
