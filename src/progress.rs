//! Progress reporting for the orchestrators

use crate::types::{MergeFailure, MergeOutcome};
use async_trait::async_trait;

/// Receives per-branch events while a run is in progress
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// A branch merge is starting
    async fn on_merge_started(&self, branch: &str);

    /// The hook is about to run for a branch
    async fn on_hook_started(&self, branch: &str, hook: &str);

    /// A branch merged successfully
    async fn on_merged(&self, branch: &str, outcome: MergeOutcome);

    /// A branch was rejected and the working tree reset
    async fn on_merge_failed(&self, failure: &MergeFailure);

    /// A branch was deleted
    async fn on_branch_deleted(&self, branch: &str);

    /// Free-form status message
    async fn on_message(&self, message: &str);
}

/// Progress callback that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_merge_started(&self, _branch: &str) {}
    async fn on_hook_started(&self, _branch: &str, _hook: &str) {}
    async fn on_merged(&self, _branch: &str, _outcome: MergeOutcome) {}
    async fn on_merge_failed(&self, _failure: &MergeFailure) {}
    async fn on_branch_deleted(&self, _branch: &str) {}
    async fn on_message(&self, _message: &str) {}
}
