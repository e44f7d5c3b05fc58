//! Hook decisions and their wire encodings.

use crate::options::OutputProtocol;
use serde::Serialize;
use serde_json::json;
use std::io::{self, Write};

/// Exit status that tells the host the tool call was explicitly denied
pub const DENY_EXIT_CODE: u8 = 2;

/// Message used when a library caller builds a deny from empty text
const FALLBACK_DENY_MESSAGE: &str = "Tool use blocked by hook";

/// Verdict for one tool-call attempt
///
/// Only the deny variant carries a message, and that message is never empty.
/// The gate always supplies a restriction message; the blank-text fallback in
/// [`Decision::deny`] only guards library callers that construct decisions
/// themselves.
///
/// # Examples
///
/// ```
/// use orchestrator_gate::hooks::Decision;
///
/// let decision = Decision::deny("Edit tool is blocked");
/// assert!(!decision.is_allowed());
/// assert_eq!(decision.message(), Some("Edit tool is blocked"));
///
/// assert_eq!(Decision::Allow.message(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Let the tool call proceed
    Allow,
    /// Block the tool call
    Deny {
        /// Explanation shown to the agent
        message: String,
    },
}

impl Decision {
    /// Create a deny decision
    ///
    /// Blank text is replaced with a generic message so a deny reply never
    /// reaches the host empty.
    pub fn deny(message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.trim().is_empty() {
            message = FALLBACK_DENY_MESSAGE.to_string();
        }
        Self::Deny { message }
    }

    /// Whether the tool call may proceed
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Explanation for a deny, `None` for an allow
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::Deny { message } => Some(message),
        }
    }

    /// Render this decision in the given protocol
    pub fn encode(&self, protocol: OutputProtocol) -> EncodedReply {
        match protocol {
            OutputProtocol::ExitStatus => match self {
                Self::Allow => EncodedReply::default(),
                Self::Deny { message } => EncodedReply {
                    exit_code: DENY_EXIT_CODE,
                    stdout: None,
                    stderr: Some(format!("{message}\n")),
                },
            },
            OutputProtocol::Json => {
                let body = match self {
                    Self::Allow => json!({ "decision": ReplyDecision::Allow }),
                    Self::Deny { message } => {
                        json!({ "decision": ReplyDecision::Block, "message": message })
                    }
                };
                EncodedReply {
                    exit_code: 0,
                    stdout: Some(format!("{body}\n")),
                    stderr: None,
                }
            }
        }
    }
}

/// Value of the `decision` key in a structured reply
///
/// # Examples
///
/// ```
/// use orchestrator_gate::hooks::ReplyDecision;
///
/// assert_eq!(serde_json::to_string(&ReplyDecision::Block).unwrap(), r#""block""#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyDecision {
    /// Allow the action to proceed
    Allow,
    /// Block the action
    Block,
}

/// A decision rendered for the host: exit status plus stream contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedReply {
    /// Process exit status
    pub exit_code: u8,
    /// Text for stdout, if any
    pub stdout: Option<String>,
    /// Text for stderr, if any
    pub stderr: Option<String>,
}

impl EncodedReply {
    /// Write the reply to the given streams and flush them
    pub fn write_to(&self, stdout: &mut impl Write, stderr: &mut impl Write) -> io::Result<()> {
        if let Some(text) = &self.stdout {
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
        if let Some(text) = &self.stderr {
            stderr.write_all(text.as_bytes())?;
            stderr.flush()?;
        }
        Ok(())
    }
}
