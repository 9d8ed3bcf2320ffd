//! Merge execution - effectful operations
//!
//! Walks the requested branches in order and merges each one through the
//! git facade. Failures never stop the run; they are collected and the
//! working tree is reset before the next branch.

use crate::error::Result;
use crate::git::Git;
use crate::merge::MERGE_IGNORED;
use crate::merge::hook::run_hook;
use crate::progress::ProgressCallback;
use crate::types::{MergeFailure, MergeOptions, MergeOutcome, MergeRunResult};
use tracing::{debug, info};

/// Merge `branches` into the current branch, one at a time
///
/// # Arguments
/// * `git` - Facade used for every git operation (and the hook runner)
/// * `branches` - Branch names, remote-qualified by the facade if needed
/// * `options` - Hook and no-op handling
/// * `progress` - Progress callback for status updates
///
/// # Returns
/// The branches committed or left unchanged and one [`MergeFailure`] per
/// rejected branch, all in the order given. Only a failed rollback reset
/// ends the run early, since the working tree can no longer be trusted.
pub async fn merge_branches<S: AsRef<str>>(
    git: &Git,
    branches: &[S],
    options: &MergeOptions,
    progress: &dyn ProgressCallback,
) -> Result<MergeRunResult> {
    let mut result = MergeRunResult::default();

    for branch in branches {
        let target = git.remote_branch_name(branch.as_ref());
        progress.on_merge_started(&target).await;

        match merge_branch(git, &target, options, progress).await {
            Ok(outcome) => {
                debug!(branch = %target, %outcome, "merged");
                progress.on_merged(&target, outcome).await;
                match outcome {
                    MergeOutcome::Committed => result.committed.push(target),
                    MergeOutcome::Unchanged => result.unchanged.push(target),
                }
            }
            Err(e) => {
                let failure = e.into_merge_failure(&target);
                info!(branch = %target, "merge failed, resetting working tree");
                git.reset(true).await?;
                progress.on_merge_failed(&failure).await;
                result.failures.push(failure);
            }
        }
    }

    Ok(result)
}

async fn merge_branch(
    git: &Git,
    branch: &str,
    options: &MergeOptions,
    progress: &dyn ProgressCallback,
) -> Result<MergeOutcome> {
    git.merge(branch, false).await?;
    git.update_submodules().await?;

    if !git.has_changes().await {
        if options.skip_merge {
            return Err(MergeFailure::new(branch, MERGE_IGNORED, "").into());
        }
        // A merge with no net changes still leaves MERGE_HEAD behind
        git.abort_merge().await?;
        return Ok(MergeOutcome::Unchanged);
    }

    if let Some(hook) = options.hook.as_deref() {
        progress.on_hook_started(branch, hook).await;
        run_hook(git.runner(), branch, hook).await?;
    }

    git.commit(None).await?;
    Ok(MergeOutcome::Committed)
}
