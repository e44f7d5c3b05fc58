//! The orchestrator-mode rule and the gate that applies it.

use crate::error::GateError;
use crate::hooks::{Decision, HookCallback, HookInput};
use crate::options::{GateOptions, MARKER_DIR, MARKER_FILE_NAME};
use crate::policy::probe::{FsProbe, MarkerProbe};
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A tool the gate refuses while orchestrator mode is active
///
/// # Examples
///
/// ```
/// use orchestrator_gate::policy::BlockedTool;
///
/// assert_eq!(BlockedTool::from_tool_name("Bash"), Some(BlockedTool::Bash));
/// assert_eq!(BlockedTool::from_tool_name("bash"), None);
/// assert_eq!(BlockedTool::from_tool_name("Read"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockedTool {
    /// In-place file edits
    Edit,
    /// Whole-file writes
    Write,
    /// Shell execution
    Bash,
}

impl BlockedTool {
    /// Every blocked tool
    pub const ALL: [BlockedTool; 3] = [BlockedTool::Edit, BlockedTool::Write, BlockedTool::Bash];

    /// Look up a tool by its exact host name
    pub fn from_tool_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }

    /// Tool name as the host spells it
    pub fn as_str(self) -> &'static str {
        match self {
            BlockedTool::Edit => "Edit",
            BlockedTool::Write => "Write",
            BlockedTool::Bash => "Bash",
        }
    }

    /// Agent that should do this tool's work instead
    pub fn delegate(self) -> &'static str {
        match self {
            BlockedTool::Edit | BlockedTool::Write => "dev-agent",
            BlockedTool::Bash => "deploy-agent",
        }
    }
}

impl fmt::Display for BlockedTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marker location and whether orchestrator mode is on, for one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyState {
    /// Whether the marker was found
    pub active: bool,
    /// Where the marker was looked for; `None` when no root was known
    pub marker_path: Option<PathBuf>,
}

/// Marker path under a project root
pub fn marker_path_in(root: &Path) -> PathBuf {
    root.join(MARKER_DIR).join(MARKER_FILE_NAME)
}

/// Resolve where the marker lives for this input
///
/// The configured project directory wins over the input's `cwd`. Empty
/// values count as absent; with neither, the path is undetermined.
pub fn resolve_marker_path(project_dir: Option<&Path>, input: &HookInput) -> Option<PathBuf> {
    if let Some(root) = project_dir.filter(|dir| !dir.as_os_str().is_empty()) {
        return Some(marker_path_in(root));
    }
    match input.cwd() {
        "" => None,
        cwd => Some(marker_path_in(Path::new(cwd))),
    }
}

/// Apply the rule to a tool name and the orchestrator-mode state
pub fn evaluate(tool_name: &str, active: bool) -> Decision {
    if !active {
        return Decision::Allow;
    }
    match BlockedTool::from_tool_name(tool_name) {
        Some(tool) => Decision::deny(restriction_message(tool)),
        None => Decision::Allow,
    }
}

/// Text shown to the agent when `tool` is refused
pub fn restriction_message(tool: BlockedTool) -> String {
    format!(
        "ORCHESTRATOR RESTRICTION: {tool} tool is blocked.\n\
         Orchestrator mode is active ({MARKER_DIR}/{MARKER_FILE_NAME} exists); \
         Edit, Write and Bash are unavailable until it is removed.\n\
         You must delegate this work:\n  \
         - Code changes → Use the dev-agent\n  \
         - Code review → Use the testing-agent\n  \
         - Git/deployment → Use the deploy-agent\n\
         \n\
         Use the Task tool to spawn the appropriate agent (for this {tool} call: {}).",
        tool.delegate()
    )
}

/// Gate that denies Edit, Write and Bash while the orchestrator-mode marker exists
///
/// # Examples
///
/// ```
/// use orchestrator_gate::prelude::*;
///
/// let project = tempfile::tempdir().unwrap();
/// let gate = OrchestratorGate::new(GateOptions::builder().project_dir(project.path()).build());
///
/// let input = HookInput::tool_use("Edit", "/elsewhere");
/// assert!(gate.evaluate(&input).is_allowed());
///
/// std::fs::create_dir(project.path().join(".claude")).unwrap();
/// std::fs::write(project.path().join(".claude/orchestrator-mode"), "").unwrap();
/// assert!(!gate.evaluate(&input).is_allowed());
/// ```
#[derive(Debug, Clone)]
pub struct OrchestratorGate<P = FsProbe> {
    options: GateOptions,
    probe: P,
}

impl OrchestratorGate<FsProbe> {
    /// Create a gate that probes the real filesystem
    pub fn new(options: GateOptions) -> Self {
        Self::with_probe(options, FsProbe)
    }
}

impl<P: MarkerProbe> OrchestratorGate<P> {
    /// Create a gate with a custom marker probe
    pub fn with_probe(options: GateOptions, probe: P) -> Self {
        Self { options, probe }
    }

    /// Options this gate was built with
    pub fn options(&self) -> &GateOptions {
        &self.options
    }

    /// Resolve the marker path and probe it
    pub fn policy_state(&self, input: &HookInput) -> PolicyState {
        let marker_path = resolve_marker_path(self.options.project_dir(), input);
        let active = marker_path
            .as_deref()
            .is_some_and(|path| self.probe.is_present(path));
        PolicyState {
            active,
            marker_path,
        }
    }

    /// Decide on one tool-call attempt
    pub fn evaluate(&self, input: &HookInput) -> Decision {
        let state = self.policy_state(input);
        let decision = evaluate(input.tool_name(), state.active);
        debug!(
            tool = input.tool_name(),
            session = input.session_id.as_deref().unwrap_or_default(),
            marker = ?state.marker_path,
            active = state.active,
            allowed = decision.is_allowed(),
            "Evaluated tool use"
        );
        decision
    }
}

#[async_trait]
impl<P: MarkerProbe> HookCallback for OrchestratorGate<P> {
    async fn call(&self, input: HookInput) -> Result<Decision, GateError> {
        Ok(self.evaluate(&input))
    }
}
