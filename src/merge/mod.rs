//! Sequential branch merging
//!
//! Each branch is merged without committing, submodules are updated, the
//! optional hook validates the result and only then is it committed. A
//! branch that fails at any step is rolled back with a hard reset and the
//! run moves on to the next one.

mod execute;
mod hook;

pub use execute::merge_branches;
pub use hook::{HOOK_FAILED_PREFIX, run_hook};

/// Reason recorded when a no-op merge is rejected
pub const MERGE_IGNORED: &str = "Merge ignored";
