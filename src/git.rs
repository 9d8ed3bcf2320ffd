//! Git command facade
//!
//! Translates the handful of operations the orchestrators need into `git`
//! invocations. The exact flags and the `git branch` listing format are the
//! contract with git and must not drift.

use crate::error::{Error, Result};
use crate::process::{ProcessCommand, ProcessOutput, ProcessRunner, SystemRunner};
use crate::types::MergeFailure;
use std::sync::Arc;
use tracing::debug;

/// Facade over the `git` executable
#[derive(Clone)]
pub struct Git {
    runner: Arc<dyn ProcessRunner>,
    remote: Option<String>,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git").field("remote", &self.remote).finish_non_exhaustive()
    }
}

impl Git {
    /// Create a facade using `runner` for all process execution
    pub fn new(runner: Arc<dyn ProcessRunner>, remote: Option<String>) -> Self {
        Self { runner, remote }
    }

    /// Create a facade that runs the real `git` binary
    pub fn system(remote: Option<String>) -> Self {
        Self::new(Arc::new(SystemRunner), remote)
    }

    /// The configured remote, if any
    pub fn remote(&self) -> Option<&str> {
        self.remote.as_deref()
    }

    /// The runner used for process execution
    pub fn runner(&self) -> &dyn ProcessRunner {
        self.runner.as_ref()
    }

    /// Merge `branch` into the current branch without fast-forwarding.
    ///
    /// With `commit == false` the merge result is left staged.
    pub async fn merge(&self, branch: &str, commit: bool) -> Result<()> {
        let mut args = vec!["merge", "--no-ff", "--quiet", branch];
        if !commit {
            args.push("--no-commit");
        }
        let output = self.raw(ProcessCommand::git(args)).await?;
        if output.success() {
            Ok(())
        } else {
            Err(MergeFailure::new(branch, output.stdout, output.stderr).into())
        }
    }

    /// Initialise and update submodules
    pub async fn update_submodules(&self) -> Result<()> {
        self.checked(ProcessCommand::git(["submodule", "update", "--init"]))
            .await
            .map(drop)
    }

    /// Whether the working tree or index differs from `HEAD`.
    ///
    /// Fails safe: if the check cannot be run or exits with anything other
    /// than 0 the tree is reported as changed.
    pub async fn has_changes(&self) -> bool {
        match self.raw(ProcessCommand::git(["diff", "--quiet", "HEAD"])).await {
            Ok(output) => !output.success(),
            Err(e) => {
                debug!(error = %e, "diff check failed, assuming changes");
                true
            }
        }
    }

    /// Commit staged changes, using the prepared merge message when `message`
    /// is `None`
    pub async fn commit(&self, message: Option<&str>) -> Result<()> {
        let mut args = match message {
            Some(message) => vec!["commit", "--message", message],
            None => vec!["commit", "--no-edit"],
        };
        args.push("--quiet");
        self.checked(ProcessCommand::git(args)).await.map(drop)
    }

    /// Discard (`hard`) or unstage pending changes
    pub async fn reset(&self, hard: bool) -> Result<()> {
        let mut args = vec!["reset"];
        if hard {
            args.push("--hard");
        }
        self.checked(ProcessCommand::git(args)).await.map(drop)
    }

    /// Recover from an interrupted merge.
    ///
    /// Merging `HEAD` into itself succeeds only when no merge is in
    /// progress; otherwise the merge is aborted explicitly.
    pub async fn abort_merge(&self) -> Result<()> {
        if self.merge("HEAD", true).await.is_ok() {
            return Ok(());
        }
        self.checked(ProcessCommand::git(["merge", "--abort"]))
            .await
            .map(drop)
    }

    /// Push the current branch to the remote and set it as upstream
    pub async fn push(&self) -> Result<()> {
        let remote = self.remote.as_deref().ok_or(Error::NoRemote)?;
        let branch = self.current_branch().await?;
        self.checked(ProcessCommand::git([
            "push",
            "--set-upstream",
            remote,
            branch.as_str(),
        ]))
        .await
        .map(drop)
    }

    /// Short name of the checked-out branch
    pub async fn current_branch(&self) -> Result<String> {
        let output = self
            .checked(ProcessCommand::git(["rev-parse", "--abbrev-ref", "HEAD"]))
            .await?;
        output
            .stdout
            .lines()
            .next()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .ok_or_else(|| Error::UnexpectedOutput("empty `git rev-parse` output".to_string()))
    }

    /// Name to merge for `branch`: `<remote>/<branch>` when a remote is
    /// configured, `branch` otherwise
    pub fn remote_branch_name(&self, branch: &str) -> String {
        match &self.remote {
            Some(remote) => format!("{remote}/{branch}"),
            None => branch.to_string(),
        }
    }

    /// Delete a single local branch
    pub async fn delete_branch(&self, branch: &str, force: bool) -> Result<()> {
        self.delete_branches(&[branch], force).await
    }

    /// Delete local branches in one `git branch` call.
    ///
    /// `force` skips git's merged-state check.
    pub async fn delete_branches(&self, branches: &[&str], force: bool) -> Result<()> {
        if branches.is_empty() {
            return Ok(());
        }
        let flag = if force { "-D" } else { "-d" };
        let command = ProcessCommand::git(["branch", flag]).args(branches.iter().copied());
        self.checked(command).await.map(drop)
    }

    /// Local branches already merged into the current branch, excluding the
    /// current branch itself
    pub async fn merged_branches(&self) -> Result<Vec<String>> {
        let output = self
            .checked(ProcessCommand::git(["branch", "--merged"]))
            .await?;
        Ok(parse_branch_list(&output.stdout))
    }

    async fn raw(&self, command: ProcessCommand) -> Result<ProcessOutput> {
        self.runner.run(&command).await
    }

    async fn checked(&self, command: ProcessCommand) -> Result<ProcessOutput> {
        let output = self.runner.run(&command).await?;
        output.check(&command)
    }
}

/// Parse `git branch` output into branch names.
///
/// Skips the current branch (`*`) and branches checked out in another
/// worktree (`+`), which git will not delete.
pub fn parse_branch_list(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| !line.starts_with('*') && !line.starts_with('+'))
        .map(|line| line.trim().to_string())
        .collect()
}
