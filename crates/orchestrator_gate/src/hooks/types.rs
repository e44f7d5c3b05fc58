//! Hook input types.

use crate::error::GateError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input record the host writes to the hook's stdin
///
/// Only `tool_name` and `cwd` drive the decision. The remaining fields are
/// carried for logging and decode leniently: a value of the wrong type is
/// dropped instead of failing the whole record. `cwd` is lenient too, so a
/// bad `cwd` reads as empty and cannot discard a valid `tool_name`.
///
/// # Examples
///
/// ```
/// use orchestrator_gate::hooks::HookInput;
///
/// let input = HookInput::parse(br#"{"tool_name": "Edit", "cwd": "/srv/project"}"#).unwrap();
///
/// assert_eq!(input.tool_name(), "Edit");
/// assert_eq!(input.cwd(), "/srv/project");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HookInput {
    /// Name of the tool being invoked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,

    /// Working directory of the session
    #[serde(
        default,
        deserialize_with = "lenient_string::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub cwd: Option<String>,

    /// Hook event that triggered this invocation (e.g. `PreToolUse`)
    #[serde(
        default,
        deserialize_with = "lenient_string::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub hook_event_name: Option<String>,

    /// Current session ID
    #[serde(
        default,
        deserialize_with = "lenient_string::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub session_id: Option<String>,

    /// ID of the tool use being gated
    #[serde(
        default,
        deserialize_with = "lenient_string::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub tool_use_id: Option<String>,

    /// Input parameters for the tool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_input: Option<Value>,
}

impl HookInput {
    /// Decode a hook input record from raw stdin bytes
    ///
    /// Fails on anything that is not a single JSON object with a string (or
    /// absent) `tool_name`. Callers on the hook path treat the failure as
    /// an allow.
    pub fn parse(raw: &[u8]) -> Result<Self, GateError> {
        Ok(serde_json::from_slice(raw)?)
    }

    /// Create an input for a tool use in the given working directory
    pub fn tool_use(tool_name: impl Into<String>, cwd: impl Into<String>) -> Self {
        Self {
            tool_name: Some(tool_name.into()),
            cwd: Some(cwd.into()),
            ..Default::default()
        }
    }

    /// Tool name, or the empty string when absent
    pub fn tool_name(&self) -> &str {
        self.tool_name.as_deref().unwrap_or_default()
    }

    /// Working directory, or the empty string when absent
    pub fn cwd(&self) -> &str {
        self.cwd.as_deref().unwrap_or_default()
    }
}

/// Decodes an optional string, mapping any non-string value to `None`
mod lenient_string {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => Some(text),
            _ => None,
        })
    }
}
