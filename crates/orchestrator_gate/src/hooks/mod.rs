//! Hook protocol types: what the host sends and what the gate answers.
//!
//! The host invokes the hook once per tool-call attempt, writes a JSON
//! [`HookInput`] to stdin, and reads the answer back either from the exit
//! status or from a JSON reply on stdout, depending on the configured
//! [`OutputProtocol`](crate::options::OutputProtocol).
//!
//! - `HookInput` - Decoded stdin record
//! - `HookCallback` - Trait for anything that turns an input into a decision
//! - `Decision` - Allow, or deny with a message
//! - `EncodedReply` - A decision rendered as exit status plus stream text
//!
//! # Example
//!
//! ```
//! use orchestrator_gate::hooks::{Decision, HookInput};
//! use orchestrator_gate::options::OutputProtocol;
//!
//! let input = HookInput::parse(br#"{"tool_name": "Read"}"#).unwrap();
//! assert_eq!(input.tool_name(), "Read");
//!
//! let reply = Decision::deny("no").encode(OutputProtocol::ExitStatus);
//! assert_eq!(reply.exit_code, 2);
//! ```

mod callback;
mod response;
mod types;

pub use callback::HookCallback;
pub use response::{DENY_EXIT_CODE, Decision, EncodedReply, ReplyDecision};
pub use types::HookInput;
