//! Configuration options and builder for the orchestrator gate
//!
//! `GateOptions` carries the two things a host can configure: the project
//! directory that anchors the marker file and the output protocol the host
//! expects. The blocked tool set is not configurable.
//!
//! # Example
//!
//! ```
//! use orchestrator_gate::options::{GateOptions, OutputProtocol};
//!
//! let options = GateOptions::builder()
//!     .project_dir("/srv/project")
//!     .protocol(OutputProtocol::Json)
//!     .build();
//!
//! assert_eq!(options.protocol, OutputProtocol::Json);
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the project root
pub const PROJECT_DIR_ENV: &str = "CLAUDE_PROJECT_DIR";

/// Environment variable selecting the output protocol
pub const PROTOCOL_ENV: &str = "ORCHESTRATOR_GATE_PROTOCOL";

/// Environment variable holding the `tracing` filter directives
pub const LOG_ENV: &str = "ORCHESTRATOR_GATE_LOG";

/// Directory under the project root that holds the marker
pub const MARKER_DIR: &str = ".claude";

/// File name of the marker whose existence turns orchestrator mode on
pub const MARKER_FILE_NAME: &str = "orchestrator-mode";

/// How a decision is reported back to the host
///
/// # Examples
///
/// ```
/// use orchestrator_gate::options::OutputProtocol;
///
/// assert_eq!(OutputProtocol::default(), OutputProtocol::ExitStatus);
/// assert_eq!(serde_json::to_string(&OutputProtocol::ExitStatus).unwrap(), r#""exit-status""#);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputProtocol {
    /// Exit 0 to allow; exit 2 with the message on stderr to deny
    #[default]
    ExitStatus,
    /// Always exit 0; print `{"decision": ...}` on stdout
    Json,
}

/// Options controlling a gate instance
#[derive(Debug, Clone, Default)]
pub struct GateOptions {
    /// Project root configured by the host, if any
    pub project_dir: Option<PathBuf>,
    /// Output protocol expected by the host
    pub protocol: OutputProtocol,
}

impl GateOptions {
    /// Create a new builder
    pub fn builder() -> GateOptionsBuilder {
        GateOptionsBuilder::default()
    }

    /// Project root, treating an empty value as unset
    pub fn project_dir(&self) -> Option<&Path> {
        self.project_dir
            .as_deref()
            .filter(|dir| !dir.as_os_str().is_empty())
    }
}

/// Builder for [`GateOptions`]
#[derive(Debug, Default)]
pub struct GateOptionsBuilder {
    project_dir: Option<PathBuf>,
    protocol: Option<OutputProtocol>,
}

impl GateOptionsBuilder {
    /// Set the project root
    pub fn project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.project_dir = Some(dir.into());
        self
    }

    /// Set the project root from an optional value, e.g. an environment lookup
    pub fn maybe_project_dir(mut self, dir: Option<impl Into<PathBuf>>) -> Self {
        self.project_dir = dir.map(Into::into);
        self
    }

    /// Set the output protocol
    pub fn protocol(mut self, protocol: OutputProtocol) -> Self {
        self.protocol = Some(protocol);
        self
    }

    /// Build the options
    pub fn build(self) -> GateOptions {
        GateOptions {
            project_dir: self.project_dir,
            protocol: self.protocol.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let options = GateOptions::builder().build();
        assert!(options.project_dir().is_none());
        assert_eq!(options.protocol, OutputProtocol::ExitStatus);
    }

    #[test]
    fn test_builder_sets_fields() {
        let options = GateOptions::builder()
            .project_dir("/srv/project")
            .protocol(OutputProtocol::Json)
            .build();

        assert_eq!(options.project_dir(), Some(Path::new("/srv/project")));
        assert_eq!(options.protocol, OutputProtocol::Json);
    }

    #[test]
    fn test_empty_project_dir_is_unset() {
        let options = GateOptions::builder().project_dir("").build();
        assert!(options.project_dir.is_some());
        assert!(options.project_dir().is_none());
    }

    #[test]
    fn test_maybe_project_dir() {
        let options = GateOptions::builder()
            .maybe_project_dir(Some("/srv/project"))
            .build();
        assert_eq!(options.project_dir(), Some(Path::new("/srv/project")));

        let options = GateOptions::builder()
            .maybe_project_dir(None::<PathBuf>)
            .build();
        assert!(options.project_dir().is_none());
    }

    #[test]
    fn test_protocol_value_names() {
        assert_eq!(
            OutputProtocol::from_str("exit-status", false),
            Ok(OutputProtocol::ExitStatus)
        );
        assert_eq!(
            OutputProtocol::from_str("json", false),
            Ok(OutputProtocol::Json)
        );
        assert!(OutputProtocol::from_str("yaml", false).is_err());
    }

    #[test]
    fn test_protocol_serialization() {
        assert_eq!(
            serde_json::to_string(&OutputProtocol::Json).unwrap(),
            r#""json""#
        );
        let parsed: OutputProtocol = serde_json::from_str(r#""exit-status""#).unwrap();
        assert_eq!(parsed, OutputProtocol::ExitStatus);
    }
}
