//! Scoped change of the process working directory

use crate::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Expand a leading `~` to the user's home directory.
///
/// `~user` forms are left untouched, as is everything when the home
/// directory cannot be determined.
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '\\']) => rest,
        _ => return PathBuf::from(path),
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
        None => PathBuf::from(path),
    }
}

/// Changes into a directory and changes back when dropped
///
/// The previous directory is restored on every exit path, including early
/// returns through `?`.
#[derive(Debug)]
pub struct WorkDirGuard {
    previous: PathBuf,
    current: PathBuf,
}

impl WorkDirGuard {
    /// Change into `path` (with `~` expansion)
    pub fn enter(path: &str) -> Result<Self> {
        let target = expand_tilde(path);
        let previous = env::current_dir().map_err(|source| Error::WorkDir {
            path: target.clone(),
            source,
        })?;
        env::set_current_dir(&target).map_err(|source| Error::WorkDir {
            path: target.clone(),
            source,
        })?;
        debug!(dir = %target.display(), "entered work dir");
        Ok(Self {
            previous,
            current: target,
        })
    }

    /// Enter `path` if one was given
    pub fn enter_optional(path: Option<&str>) -> Result<Option<Self>> {
        path.map(Self::enter).transpose()
    }

    /// Directory that was entered
    pub fn path(&self) -> &Path {
        &self.current
    }
}

impl Drop for WorkDirGuard {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.previous) {
            warn!(dir = %self.previous.display(), error = %e, "failed to restore working directory");
        }
    }
}
