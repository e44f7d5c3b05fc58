//! `orchestrator-gate` - PreToolUse hook binary
//!
//! # Usage
//!
//! ```bash
//! # As a hook (reads one JSON record from stdin)
//! orchestrator-gate
//! orchestrator-gate --protocol json
//!
//! # Diagnostics
//! orchestrator-gate status --cwd /srv/project --json
//! ```
//!
//! Exit status on the hook path is 0 (allow) or 2 (deny, exit-status
//! protocol only). Bad command-line usage exits 1, which hosts treat as a
//! non-blocking failure.

use clap::{Parser, Subcommand};
use orchestrator_gate::options::{LOG_ENV, PROJECT_DIR_ENV, PROTOCOL_ENV};
use orchestrator_gate::prelude::*;
use std::io::{self, Read};
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "orchestrator-gate",
    version,
    about = "Blocks Edit, Write and Bash while .claude/orchestrator-mode exists"
)]
struct Cli {
    /// How the decision is reported to the host
    #[arg(long, value_enum, global = true, env = PROTOCOL_ENV, default_value_t = OutputProtocol::ExitStatus)]
    protocol: OutputProtocol,
    /// Project root holding .claude/orchestrator-mode (overrides the input's cwd)
    #[arg(long, global = true, env = PROJECT_DIR_ENV)]
    project_dir: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one hook input from stdin (default)
    Check,
    /// Report whether orchestrator mode is active
    Status {
        /// Directory to resolve the marker from when no project root is set
        #[arg(long)]
        cwd: Option<String>,
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    // clap exits with 2 on usage errors, which the host would read as a deny
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let options = GateOptions::builder()
        .maybe_project_dir(cli.project_dir)
        .protocol(cli.protocol)
        .build();
    let gate = OrchestratorGate::new(options);

    match cli.command.unwrap_or(Command::Check) {
        Command::Check => run_hook(&gate).await,
        Command::Status { cwd, json } => match run_status(&gate, cwd, json) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("orchestrator-gate: {err}");
                ExitCode::FAILURE
            }
        },
    }
}

/// Logging is off unless asked for: stderr doubles as the deny channel
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn run_hook(gate: &OrchestratorGate) -> ExitCode {
    let decision = match read_input() {
        Ok(input) => gate.call(input).await.unwrap_or_else(|err| {
            debug!(error = %err, "Gate failed, allowing");
            Decision::Allow
        }),
        Err(err) => {
            debug!(error = %err, "Undecodable hook input, allowing");
            Decision::Allow
        }
    };

    let reply = decision.encode(gate.options().protocol);
    if let Err(err) = reply.write_to(&mut io::stdout().lock(), &mut io::stderr().lock()) {
        warn!(error = %err, "Failed to write hook reply");
    }
    ExitCode::from(reply.exit_code)
}

/// Read the whole record; a `Write` payload can be arbitrarily large
fn read_input() -> Result<HookInput, GateError> {
    let mut raw = Vec::new();
    io::stdin().lock().read_to_end(&mut raw)?;
    HookInput::parse(&raw)
}

fn run_status(gate: &OrchestratorGate, cwd: Option<String>, json: bool) -> Result<(), GateError> {
    let cwd = match cwd {
        Some(cwd) => cwd,
        None => std::env::current_dir()?.to_string_lossy().into_owned(),
    };
    let input = HookInput {
        cwd: Some(cwd),
        ..Default::default()
    };
    let state = gate.policy_state(&input);

    if json {
        let text =
            serde_json::to_string_pretty(&state).map_err(|e| GateError::Status(e.to_string()))?;
        println!("{text}");
    } else {
        let mode = if state.active { "active" } else { "inactive" };
        println!("orchestrator mode: {mode}");
        match &state.marker_path {
            Some(path) => println!("marker: {}", path.display()),
            None => println!("marker: undetermined"),
        }
    }
    Ok(())
}
