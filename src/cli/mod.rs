//! CLI module for agave
//!
//! ## Commands
//!
//! - `catalog` - Print the method reference as Markdown
//! - `enable` - Activate namespaces on a fresh host and list every surface's members
//! - `call <METHOD> <RECEIVER_JSON> [ARG_JSON]...` - Activate a namespace and invoke one member
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::process;

use clap::{Parser, Subcommand};
use thiserror::Error;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    /// Invalid command-line input (bad JSON, unknown category).
    pub const USAGE: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Problems with the command-line input itself.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid JSON for {what}: {source}")]
    Json {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown category '{0}' (expected one of: Array, Object, String, Function, Number)")]
    UnknownCategory(String),
}

impl From<InputError> for CliError {
    fn from(err: InputError) -> Self {
        CliError::new(format!("Error: {err}"), ExitCode::USAGE)
    }
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Namespaced convenience methods for sequences, mappings, text, callables and numbers
#[derive(Parser, Debug)]
#[command(name = "agave")]
#[command(version = VERSION)]
#[command(about = "Namespaced convenience methods for the fundamental value kinds", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the method reference as Markdown
    Catalog {
        /// Show member names derived under this namespace
        #[arg(short, long, value_name = "NS", default_value = "")]
        namespace: String,
    },

    /// Activate namespaces on a fresh host and list every surface's members
    Enable {
        /// Namespace to activate (repeatable; default: the empty namespace)
        #[arg(short, long = "namespace", value_name = "NS")]
        namespaces: Vec<String>,
        /// Build the host without this category surface (repeatable)
        #[arg(long = "without", value_name = "CATEGORY")]
        without: Vec<String>,
    },

    /// Activate a namespace and invoke one member on a JSON receiver
    Call {
        /// Namespace to activate before the call
        #[arg(short, long, value_name = "NS", default_value = "")]
        namespace: String,
        /// Derived member name, e.g. `av_getPath`
        #[arg(value_name = "METHOD")]
        method: String,
        /// Receiver as JSON (with --global: the first argument)
        #[arg(value_name = "RECEIVER_JSON", allow_hyphen_values = true)]
        receiver: String,
        /// Arguments as JSON
        #[arg(value_name = "ARG_JSON", allow_hyphen_values = true)]
        args: Vec<String>,
        /// Call a global function instead of a member
        #[arg(long)]
        global: bool,
        /// Also print the receiver after the call
        #[arg(long)]
        show_receiver: bool,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Catalog { namespace } => commands::print_catalog(&namespace),
        Command::Enable { namespaces, without } => commands::enable_namespaces(&namespaces, &without),
        Command::Call {
            namespace,
            method,
            receiver,
            args,
            global,
            show_receiver,
        } => commands::call_member(&commands::CallRequest {
            namespace: &namespace,
            method: &method,
            receiver: &receiver,
            args: &args,
            global,
            show_receiver,
        }),
    }
}

// ============================================================================
// Tests
// ============================================================================
