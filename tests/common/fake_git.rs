//! Fake git runner for testing
//!
//! Implements `ProcessRunner` with a tiny in-memory repository model so the
//! orchestrators can be driven without a real git binary. Not every helper
//! is used by every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use git_chores::error::{Error, Result};
use git_chores::process::{ProcessCommand, ProcessOutput, ProcessRunner};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Debug, Default)]
struct RepoState {
    /// Working tree differs from HEAD
    dirty: bool,
    /// Branch being merged, while MERGE_HEAD would exist
    merging: Option<String>,
    current_branch: String,
    /// Local branches in listing order
    branches: Vec<String>,
    merged: HashSet<String>,
    /// Merge targets that bring in changes
    changes: HashSet<String>,
    /// Merge targets that conflict
    conflicts: HashSet<String>,
    /// Merge targets whose changes cancel out, leaving only MERGE_HEAD
    net_noops: HashSet<String>,
    /// Branches whose merge was committed, in order
    commits: Vec<String>,
    hook_exits: HashMap<String, i32>,
    unlaunchable_hooks: HashSet<String>,
}

/// In-memory stand-in for the `git` executable (and the hook shell)
///
/// Features:
/// - Merge/commit/reset state tracking (dirty tree, merge in progress)
/// - Branch listing and deletion honouring the merged state
/// - Call tracking for verification
/// - Failure injection by argument prefix
pub struct FakeGit {
    state: Mutex<RepoState>,
    calls: Mutex<Vec<ProcessCommand>>,
    failures: Mutex<Vec<(Vec<String>, ProcessOutput)>>,
    spawn_failures: Mutex<Vec<Vec<String>>>,
}

impl Default for FakeGit {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeGit {
    /// A repository with only `main`, checked out and clean
    pub fn new() -> Self {
        let state = RepoState {
            current_branch: "main".to_string(),
            branches: vec!["main".to_string()],
            ..RepoState::default()
        };
        Self {
            state: Mutex::new(state),
            calls: Mutex::new(Vec::new()),
            failures: Mutex::new(Vec::new()),
            spawn_failures: Mutex::new(Vec::new()),
        }
    }

    // === Repository setup ===

    /// Add a local branch
    pub fn with_branch(&self, name: &str, merged: bool) -> &Self {
        let mut state = self.state.lock().unwrap();
        state.branches.push(name.to_string());
        if merged {
            state.merged.insert(name.to_string());
        }
        self
    }

    /// Merging `target` succeeds and changes the tree
    pub fn merge_brings_changes(&self, target: &str) -> &Self {
        self.state.lock().unwrap().changes.insert(target.to_string());
        self
    }

    /// Merging `target` stops before committing with an unchanged tree
    pub fn merge_has_no_net_changes(&self, target: &str) -> &Self {
        self.state.lock().unwrap().net_noops.insert(target.to_string());
        self
    }

    /// Whether a merge is waiting to be concluded
    pub fn is_merging(&self) -> bool {
        self.state.lock().unwrap().merging.is_some()
    }

    /// Merging `target` conflicts
    pub fn merge_conflicts(&self, target: &str) -> &Self {
        self.state.lock().unwrap().conflicts.insert(target.to_string());
        self
    }

    /// The hook command line exits with `code`
    pub fn hook_exits(&self, hook: &str, code: i32) -> &Self {
        self.state
            .lock()
            .unwrap()
            .hook_exits
            .insert(hook.to_string(), code);
        self
    }

    /// Launching the shell for this hook fails
    pub fn hook_cannot_launch(&self, hook: &str) -> &Self {
        self.state
            .lock()
            .unwrap()
            .unlaunchable_hooks
            .insert(hook.to_string());
        self
    }

    /// Leave the tree dirty, as after an interrupted merge
    pub fn set_merging(&self, target: &str) -> &Self {
        let mut state = self.state.lock().unwrap();
        state.dirty = true;
        state.merging = Some(target.to_string());
        self
    }

    // === Error injection ===

    /// Any git command whose arguments start with `prefix` returns `output`
    pub fn fail_command(&self, prefix: &[&str], output: ProcessOutput) -> &Self {
        self.failures
            .lock()
            .unwrap()
            .push((prefix.iter().map(ToString::to_string).collect(), output));
        self
    }

    /// Any git command whose arguments start with `prefix` cannot be launched
    pub fn fail_spawn(&self, prefix: &[&str]) -> &Self {
        self.spawn_failures
            .lock()
            .unwrap()
            .push(prefix.iter().map(ToString::to_string).collect());
        self
    }

    // === Inspection ===

    /// All commands run so far, rendered as command lines
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Git commands run so far, without the leading `git`
    pub fn git_calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.program == "git")
            .map(|c| c.args.join(" "))
            .collect()
    }

    /// Number of calls whose arguments start with `prefix`
    pub fn count_calls(&self, prefix: &[&str]) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.program == "git" && c.args_start_with(prefix))
            .count()
    }

    /// Whether the working tree differs from HEAD
    pub fn is_dirty(&self) -> bool {
        self.state.lock().unwrap().dirty
    }

    /// Merge targets committed so far
    pub fn commits(&self) -> Vec<String> {
        self.state.lock().unwrap().commits.clone()
    }

    /// Remaining local branches
    pub fn branches(&self) -> Vec<String> {
        self.state.lock().unwrap().branches.clone()
    }

    // === Command handling ===

    fn injected_failure(&self, command: &ProcessCommand) -> Option<ProcessOutput> {
        self.failures
            .lock()
            .unwrap()
            .iter()
            .find(|(prefix, _)| {
                let prefix: Vec<&str> = prefix.iter().map(String::as_str).collect();
                command.args_start_with(&prefix)
            })
            .map(|(_, output)| output.clone())
    }

    fn cannot_spawn(&self, command: &ProcessCommand) -> bool {
        self.spawn_failures.lock().unwrap().iter().any(|prefix| {
            let prefix: Vec<&str> = prefix.iter().map(String::as_str).collect();
            command.args_start_with(&prefix)
        })
    }

    fn run_hook(&self, command: &ProcessCommand) -> Result<ProcessOutput> {
        let hook = command.args.last().cloned().unwrap_or_default();
        let state = self.state.lock().unwrap();
        if state.unlaunchable_hooks.contains(&hook) {
            return Err(spawn_error(&command.program));
        }
        let code = state.hook_exits.get(&hook).copied().unwrap_or(0);
        Ok(ProcessOutput {
            code: Some(code),
            ..ProcessOutput::default()
        })
    }

    fn run_git(&self, args: &[String]) -> ProcessOutput {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let mut state = self.state.lock().unwrap();

        match args.as_slice() {
            ["merge", "--abort"] => {
                if state.merging.take().is_none() {
                    return ProcessOutput::failure(
                        128,
                        "",
                        "fatal: There is no merge to abort (MERGE_HEAD missing).\n",
                    );
                }
                state.dirty = false;
                ProcessOutput::success_with("")
            }
            ["merge", _, _, target, ..] => merge(&mut state, target),
            ["diff", "--quiet", "HEAD"] => {
                if state.dirty {
                    ProcessOutput::failure(1, "", "")
                } else {
                    ProcessOutput::success_with("")
                }
            }
            ["commit", ..] => {
                if !state.dirty {
                    return ProcessOutput::failure(1, "nothing to commit, working tree clean\n", "");
                }
                state.dirty = false;
                if let Some(target) = state.merging.take() {
                    state.commits.push(target);
                }
                ProcessOutput::success_with("")
            }
            ["reset", rest @ ..] => {
                if rest.contains(&"--hard") {
                    state.dirty = false;
                    state.merging = None;
                }
                ProcessOutput::success_with("")
            }
            ["rev-parse", "--abbrev-ref", "HEAD"] => {
                ProcessOutput::success_with(format!("{}\n", state.current_branch))
            }
            ["branch", "--merged"] => {
                let listing: String = state
                    .branches
                    .iter()
                    .filter(|b| **b == state.current_branch || state.merged.contains(*b))
                    .map(|b| {
                        let marker = if *b == state.current_branch { '*' } else { ' ' };
                        format!("{marker} {b}\n")
                    })
                    .collect();
                ProcessOutput::success_with(listing)
            }
            ["branch", flag @ ("-d" | "-D"), names @ ..] => {
                let force = *flag == "-D";
                let mut stderr = String::new();
                for name in names {
                    if let Some(reason) = refuse_delete(&state, name, force) {
                        stderr.push_str(&reason);
                        continue;
                    }
                    state.branches.retain(|b| b != name);
                    state.merged.remove(*name);
                }
                if stderr.is_empty() {
                    ProcessOutput::success_with("")
                } else {
                    ProcessOutput::failure(1, "", stderr)
                }
            }
            _ => ProcessOutput::success_with(""),
        }
    }
}

fn merge(state: &mut RepoState, target: &str) -> ProcessOutput {
    if state.merging.is_some() {
        return ProcessOutput::failure(
            128,
            "",
            "fatal: You have not concluded your merge (MERGE_HEAD exists).\n",
        );
    }
    if target == "HEAD" {
        return ProcessOutput::success_with("Already up to date.\n");
    }
    if state.conflicts.contains(target) {
        state.dirty = true;
        state.merging = Some(target.to_string());
        return ProcessOutput::failure(
            1,
            "CONFLICT (content): Merge conflict in file.txt\n",
            "Automatic merge failed; fix conflicts and then commit the result.\n",
        );
    }
    if state.net_noops.contains(target) {
        state.merging = Some(target.to_string());
        return ProcessOutput::success_with(
            "Automatic merge went well; stopped before committing as requested\n",
        );
    }
    if state.changes.contains(target) {
        state.dirty = true;
        state.merging = Some(target.to_string());
        return ProcessOutput::success_with("");
    }
    ProcessOutput::success_with("Already up to date.\n")
}

fn refuse_delete(state: &RepoState, name: &str, force: bool) -> Option<String> {
    if !state.branches.iter().any(|b| b == name) {
        return Some(format!("error: branch '{name}' not found.\n"));
    }
    if name == state.current_branch {
        return Some(format!(
            "error: cannot delete branch '{name}' used by worktree\n"
        ));
    }
    if !force && !state.merged.contains(name) {
        return Some(format!("error: the branch '{name}' is not fully merged.\n"));
    }
    None
}

fn spawn_error(program: &str) -> Error {
    Error::Spawn {
        program: program.to_string(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    }
}

#[async_trait]
impl ProcessRunner for FakeGit {
    async fn run(&self, command: &ProcessCommand) -> Result<ProcessOutput> {
        self.calls.lock().unwrap().push(command.clone());

        if command.program != "git" {
            return self.run_hook(command);
        }
        if self.cannot_spawn(command) {
            return Err(spawn_error("git"));
        }
        if let Some(output) = self.injected_failure(command) {
            return Ok(output);
        }
        Ok(self.run_git(&command.args))
    }
}
