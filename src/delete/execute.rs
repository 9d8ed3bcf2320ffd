//! Deletion execution - effectful operations

use crate::delete::plan::{DeletePlan, create_delete_plan};
use crate::error::Result;
use crate::git::Git;
use crate::progress::ProgressCallback;
use crate::types::{DeleteRequest, DeleteResult};
use tracing::debug;

/// Resolve the request into a plan and delete every branch in it
///
/// Only listing merged branches can fail; individual deletions are best
/// effort (see [`execute_delete`]).
pub async fn delete_branches(
    git: &Git,
    request: &DeleteRequest,
    progress: &dyn ProgressCallback,
) -> Result<DeleteResult> {
    let plan = plan_for(git, request).await?;
    Ok(execute_delete(git, &plan, request.force, progress).await)
}

/// Build the plan for `request`, listing merged branches only when needed
pub async fn plan_for(git: &Git, request: &DeleteRequest) -> Result<DeletePlan> {
    let merged = if request.include_merged && request.branches.is_empty() {
        Some(git.merged_branches().await?)
    } else {
        None
    };
    Ok(create_delete_plan(
        &request.branches,
        merged.as_deref(),
        &request.keep,
    ))
}

/// Delete each planned branch (EFFECTFUL)
///
/// A branch git refuses to delete (not fully merged, checked out, missing)
/// is skipped so it never blocks the rest.
pub async fn execute_delete(
    git: &Git,
    plan: &DeletePlan,
    force: bool,
    progress: &dyn ProgressCallback,
) -> DeleteResult {
    let mut result = DeleteResult::default();

    for branch in &plan.branches {
        match git.delete_branch(branch, force).await {
            Ok(()) => {
                progress.on_branch_deleted(branch).await;
                result.deleted.push(branch.clone());
            }
            Err(e) => {
                debug!(branch = %branch, error = %e, "skipping branch");
                result.skipped.push(branch.clone());
            }
        }
    }

    result
}
