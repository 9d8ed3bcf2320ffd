//! Shared command context for CLI commands
//!
//! Extracts common setup code shared by the merge and delete tools.

use crate::error::Result;
use crate::git::Git;
use crate::process::ProcessRunner;
use crate::workdir::WorkDirGuard;
use std::path::Path;
use std::sync::Arc;

/// Shared context for CLI commands that run git
///
/// Holds the git facade and, when `--work-dir` was given, the guard that
/// keeps the process inside that directory. Dropping the context restores
/// the original working directory.
#[derive(Debug)]
pub struct CommandContext {
    /// Git facade for the selected remote
    pub git: Git,
    work_dir: Option<WorkDirGuard>,
}

impl CommandContext {
    /// Create a context that runs the real `git` binary
    pub fn new(work_dir: Option<&str>, remote: Option<String>) -> Result<Self> {
        Self::with_git(work_dir, Git::system(remote))
    }

    /// Create a context on top of a custom process runner
    pub fn with_runner(
        work_dir: Option<&str>,
        runner: Arc<dyn ProcessRunner>,
        remote: Option<String>,
    ) -> Result<Self> {
        Self::with_git(work_dir, Git::new(runner, remote))
    }

    fn with_git(work_dir: Option<&str>, git: Git) -> Result<Self> {
        let work_dir = WorkDirGuard::enter_optional(work_dir)?;
        Ok(Self { git, work_dir })
    }

    /// Directory entered for this command, if any
    pub fn work_dir(&self) -> Option<&Path> {
        self.work_dir.as_ref().map(WorkDirGuard::path)
    }
}
