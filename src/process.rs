//! External process execution
//!
//! Every subprocess the crate starts (git itself and merge hooks) goes
//! through [`ProcessRunner`]. Tests swap in a fake runner to drive the
//! orchestrators without touching a real repository.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::fmt;
use std::process::Stdio;
use tracing::debug;

/// A command to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessCommand {
    /// Program name or path
    pub program: String,
    /// Arguments, not including the program
    pub args: Vec<String>,
    /// Let the child write straight to our stdout/stderr instead of capturing
    pub inherit_output: bool,
}

impl ProcessCommand {
    /// Create a command with no arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            inherit_output: false,
        }
    }

    /// A `git` command with the given arguments
    pub fn git<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new("git").args(args)
    }

    /// A command line interpreted by the platform shell
    ///
    /// Output is inherited so the user sees what the command prints.
    pub fn shell(command: &str) -> Self {
        let (shell, flag) = if cfg!(windows) { ("cmd", "/C") } else { ("sh", "-c") };
        Self {
            inherit_output: true,
            ..Self::new(shell).args([flag, command])
        }
    }

    /// Append arguments
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Whether the arguments start with `prefix`
    pub fn args_start_with(&self, prefix: &[&str]) -> bool {
        self.args.len() >= prefix.len()
            && self.args.iter().zip(prefix).all(|(arg, want)| arg == want)
    }
}

impl fmt::Display for ProcessCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Captured result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` if the process was killed by a signal
    pub code: Option<i32>,
    /// Standard output (empty when output was inherited)
    pub stdout: String,
    /// Standard error (empty when output was inherited)
    pub stderr: String,
}

impl ProcessOutput {
    /// A successful run with the given stdout
    pub fn success_with(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed run with the given exit code and streams
    pub fn failure(code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Whether the process exited with status 0
    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }

    /// Turn a non-zero exit into [`Error::Command`]
    pub fn check(self, command: &ProcessCommand) -> Result<Self> {
        if self.success() {
            Ok(self)
        } else {
            Err(Error::Command {
                command: command.to_string(),
                code: self.code,
                stdout: self.stdout,
                stderr: self.stderr,
            })
        }
    }
}

/// Runs external processes
///
/// A non-zero exit is reported through [`ProcessOutput::code`], not as an
/// error; only a failure to launch is an `Err`.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run `command` to completion
    async fn run(&self, command: &ProcessCommand) -> Result<ProcessOutput>;
}

/// Runs processes for real, in the current working directory
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl ProcessRunner for SystemRunner {
    async fn run(&self, command: &ProcessCommand) -> Result<ProcessOutput> {
        debug!(%command, "running");

        let mut cmd = tokio::process::Command::new(&command.program);
        cmd.args(&command.args);
        if command.inherit_output {
            cmd.stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());
        }

        let output = cmd.output().await.map_err(|source| Error::Spawn {
            program: command.program.clone(),
            source,
        })?;

        let result = ProcessOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if !result.success() {
            debug!(%command, code = ?result.code, stderr = %result.stderr.trim_end(), "command failed");
        }

        Ok(result)
    }
}
