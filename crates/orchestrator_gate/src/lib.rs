//! Orchestrator Gate - a `PreToolUse` hook that keeps an orchestrating agent
//! from doing the work itself.
//!
//! # Overview
//!
//! The host runs the hook once per tool-call attempt and passes a JSON record
//! with the tool name and working directory on stdin. When the marker file
//! `.claude/orchestrator-mode` exists, `Edit`, `Write` and `Bash` are denied
//! with a message pointing at the agents that should do the work. All other
//! tools, and every call made while the marker is absent, are allowed.
//!
//! The gate is read-only: it never creates, changes or deletes the marker.
//!
//! # Architecture
//!
//! - `hooks`: Hook input, decisions, reply encodings and the `HookCallback` trait
//! - `policy`: Marker resolution, probing and the rule itself
//! - `options`: Configuration and builder
//! - `error`: Error types and handling
//!
//! # Example
//!
//! ```rust
//! use orchestrator_gate::prelude::*;
//!
//! # async fn example() -> Result<(), GateError> {
//! let options = GateOptions::builder()
//!     .project_dir("/srv/project")
//!     .protocol(OutputProtocol::Json)
//!     .build();
//! let gate = OrchestratorGate::new(options);
//!
//! let input = HookInput::parse(br#"{"tool_name": "Write", "cwd": "/srv/project"}"#)?;
//! let decision = gate.call(input).await?;
//!
//! let reply = decision.encode(gate.options().protocol);
//! assert_eq!(reply.exit_code, 0);
//! # Ok(())
//! # }
//! ```
//!
//! # License
//!
//! Licensed under MIT.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Hook protocol types
///
/// Key types:
/// - `HookInput` - Data the host sends on stdin
/// - `HookCallback` - Trait for implementing hook logic
/// - `Decision` - Allow, or deny with a message
/// - `EncodedReply` - Exit status plus stream text for the host
pub mod hooks;

/// Orchestrator-mode policy
///
/// This module resolves the marker path, probes it and applies the rule.
/// See `OrchestratorGate` for the entry point.
pub mod policy;

/// Configuration options and builder
///
/// This module provides `GateOptions` and the `OutputProtocol` choice, plus
/// the names of the environment variables the binary reads.
pub mod options;

/// Error types and utilities
///
/// This module defines the `GateError` enum:
///
/// - `Decode` - Hook input was not valid (auto-converts from `serde_json::Error`)
/// - `Io` - Stream I/O failed (auto-converts from `std::io::Error`)
/// - `Status` - The status report could not be produced
pub mod error;

// Prelude module for common imports
pub mod prelude {
    //! Common imports for orchestrator_gate users
    //!
    //! Use `use orchestrator_gate::prelude::*;` to import commonly used types.

    pub use crate::error::GateError;
    pub use crate::hooks::{Decision, EncodedReply, HookCallback, HookInput};
    pub use crate::options::{GateOptions, OutputProtocol};
    pub use crate::policy::{BlockedTool, FsProbe, MarkerProbe, OrchestratorGate, PolicyState};
}
