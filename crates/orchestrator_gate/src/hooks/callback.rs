//! Hook callback trait and implementations.

use crate::error::GateError;
use crate::hooks::{Decision, HookInput};
use async_trait::async_trait;
use std::future::Future;

/// Trait for hook callbacks
///
/// This trait can be implemented directly or used with async functions via the blanket
/// implementation. [`OrchestratorGate`](crate::policy::OrchestratorGate) implements it,
/// which is how the binary drives the gate.
///
/// # Examples
///
/// ## Using an async function
///
/// ```
/// use orchestrator_gate::prelude::*;
///
/// async fn no_shell(input: HookInput) -> Result<Decision, GateError> {
///     if input.tool_name() == "Bash" {
///         return Ok(Decision::deny("Bash not allowed"));
///     }
///     Ok(Decision::Allow)
/// }
///
/// // The function implements HookCallback via the blanket impl
/// let _callback = no_shell;
/// ```
///
/// ## Implementing directly
///
/// ```
/// use orchestrator_gate::prelude::*;
/// use async_trait::async_trait;
///
/// struct ReadOnly;
///
/// #[async_trait]
/// impl HookCallback for ReadOnly {
///     async fn call(&self, input: HookInput) -> Result<Decision, GateError> {
///         match input.tool_name() {
///             "Read" | "Grep" | "Glob" => Ok(Decision::Allow),
///             other => Ok(Decision::deny(format!("{other} not allowed"))),
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait HookCallback: Send + Sync {
    /// Decide whether the tool call described by `input` may proceed
    ///
    /// An `Err` is never shown to the host; the caller degrades it to
    /// [`Decision::Allow`].
    async fn call(&self, input: HookInput) -> Result<Decision, GateError>;
}

/// Blanket implementation for async functions and closures
#[async_trait]
impl<F, Fut> HookCallback for F
where
    F: Fn(HookInput) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Decision, GateError>> + Send,
{
    async fn call(&self, input: HookInput) -> Result<Decision, GateError> {
        self(input).await
    }
}
