//! Core types for git-chores

use thiserror::Error;

/// A branch whose merge did not complete
///
/// Carries the captured output of the step that failed so the caller can
/// show why the branch was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("MergeFailure(branch: {branch}, stdout: {stdout:?}, stderr: {stderr:?})")]
pub struct MergeFailure {
    /// Branch name as merged (remote-qualified when a remote is configured)
    pub branch: String,
    /// Captured standard output, or a short reason for synthetic failures
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl MergeFailure {
    /// Create a failure record
    pub fn new(
        branch: impl Into<String>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self {
            branch: branch.into(),
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }
}

/// Options for a merge run
#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    /// Shell command run after a non-empty merge, before committing
    pub hook: Option<String>,
    /// Treat a merge that produced no changes as a failure
    pub skip_merge: bool,
}

/// How a single branch merge ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Changes were committed
    Committed,
    /// The merge produced no changes, nothing was committed
    Unchanged,
}

impl std::fmt::Display for MergeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Committed => write!(f, "committed"),
            Self::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// Result of merging a list of branches
#[derive(Debug, Clone, Default)]
pub struct MergeRunResult {
    /// Branches merged and committed, in processing order
    pub committed: Vec<String>,
    /// Branches that merged without producing changes
    pub unchanged: Vec<String>,
    /// Rejected branches, in processing order
    pub failures: Vec<MergeFailure>,
}

impl MergeRunResult {
    /// Check if every branch was merged
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Check if at least one merge commit was created
    #[must_use]
    pub const fn has_commits(&self) -> bool {
        !self.committed.is_empty()
    }
}

/// Parameters for a branch deletion run
#[derive(Debug, Clone, Default)]
pub struct DeleteRequest {
    /// Branches named explicitly
    pub branches: Vec<String>,
    /// Use every merged branch when no branch is named
    pub include_merged: bool,
    /// Delete even if not merged (`git branch -D`)
    pub force: bool,
    /// Branches that must never be deleted
    pub keep: Vec<String>,
}

/// Outcome of a best-effort deletion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteResult {
    /// Branches git deleted
    pub deleted: Vec<String>,
    /// Branches git refused to delete (not an error)
    pub skipped: Vec<String>,
}
