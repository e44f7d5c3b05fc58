//! Orchestrator-mode policy.
//!
//! While `<project>/.claude/orchestrator-mode` exists, the orchestrating agent
//! may not use `Edit`, `Write` or `Bash` and has to delegate that work to
//! other agents. Everything else is allowed.
//!
//! # Evaluation
//!
//! Each tool-call attempt runs the same straight pipeline:
//!
//! 1. **Resolve** - `CLAUDE_PROJECT_DIR` if set, otherwise the input's `cwd`,
//!    otherwise undetermined
//! 2. **Probe** - check whether the marker exists through a [`MarkerProbe`]
//! 3. **Match** - deny if the marker exists and the tool is a [`BlockedTool`]
//!
//! Any uncertainty along the way (no path, a failing probe) ends in allow.
//!
//! # Example
//!
//! ```
//! use orchestrator_gate::policy::evaluate;
//!
//! assert!(evaluate("Edit", false).is_allowed());
//! assert!(!evaluate("Edit", true).is_allowed());
//! assert!(evaluate("Read", true).is_allowed());
//! ```

mod gate;
mod probe;

pub use gate::{
    BlockedTool, OrchestratorGate, PolicyState, evaluate, marker_path_in, resolve_marker_path,
    restriction_message,
};
pub use probe::{FsProbe, MarkerProbe};
