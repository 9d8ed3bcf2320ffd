//! Error types for git-chores

use crate::types::MergeFailure;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the git facade and the orchestrators
#[derive(Debug, Error)]
pub enum Error {
    /// A merge step failed for a branch
    #[error(transparent)]
    Merge(#[from] MergeFailure),

    /// A git command exited unsuccessfully
    #[error("`{command}` failed ({})", exit_label(.code))]
    Command {
        /// The command line that was run
        command: String,
        /// Exit code (`None` when terminated by a signal)
        code: Option<i32>,
        /// Captured standard output
        stdout: String,
        /// Captured standard error
        stderr: String,
    },

    /// A process could not be launched at all
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The working directory could not be changed or resolved
    #[error("cannot use work dir {}: {source}", .path.display())]
    WorkDir {
        /// Requested directory (after `~` expansion)
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An operation needs a remote but none is configured
    #[error("no remote configured")]
    NoRemote,

    /// Git produced output we could not interpret
    #[error("unexpected git output: {0}")]
    UnexpectedOutput(String),

    /// Anything else (prompt failures and the like)
    #[error("{0}")]
    Internal(String),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

fn exit_label(code: &Option<i32>) -> String {
    code.map_or_else(|| "terminated by signal".to_string(), |c| format!("exit code {c}"))
}

impl Error {
    /// Convert into the failure record for `branch`.
    ///
    /// Merge failures are kept as-is; command failures keep their captured
    /// streams; everything else is rendered into `stderr`.
    pub fn into_merge_failure(self, branch: &str) -> MergeFailure {
        match self {
            Self::Merge(failure) => failure,
            Self::Command { stdout, stderr, .. } => MergeFailure::new(branch, stdout, stderr),
            other => MergeFailure::new(branch, String::new(), other.to_string()),
        }
    }
}
