//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fmt::Write as _;

use agave_core::Category;
use agave_core::lang::categories;
use agave_core::lang::surface::functions::{self, GLOBAL_FUNCTIONS};
use agave_runtime::Value;

use super::{CliError, CliResult, ExitCode, InputError};
use crate::catalog::CATALOG;
use crate::host::{Host, HostConfig};
use crate::install::derived_name;

// ============================================================================
// catalog
// ============================================================================

pub fn print_catalog(namespace: &str) -> CliResult<ExitCode> {
    print!("{}", render_catalog(namespace));
    Ok(ExitCode::SUCCESS)
}

/// Render the method reference as Markdown, one table per surface.
pub fn render_catalog(namespace: &str) -> String {
    let mut out = String::from("# agave methods\n");
    for category in Category::all() {
        let _ = write!(out, "\n## {} ({})\n\n", category.host_name(), category.as_str());
        out.push_str("| Member | Description |\n| --- | --- |\n");
        for entry in CATALOG.iter().filter(|e| e.method.category() == category) {
            let name = derived_name(namespace, entry.method.base_name());
            let _ = writeln!(out, "| `{name}` | {} |", entry.method.description());
        }
    }
    out.push_str("\n## global\n\n| Function | Description |\n| --- | --- |\n");
    for info in GLOBAL_FUNCTIONS {
        let name = derived_name(namespace, functions::as_str(info.id));
        let _ = writeln!(out, "| `{name}` | {} |", info.description);
    }
    out
}

// ============================================================================
// enable
// ============================================================================

pub fn enable_namespaces(namespaces: &[String], without: &[String]) -> CliResult<ExitCode> {
    let config = host_config(without)?;
    let mut host = Host::with_config(config);
    if namespaces.is_empty() {
        host.enable("");
    }
    for namespace in namespaces {
        host.enable(namespace);
    }
    print!("{}", render_surfaces(&host));
    Ok(ExitCode::SUCCESS)
}

/// Build a host config from `--without` category names.
pub fn host_config(without: &[String]) -> Result<HostConfig, InputError> {
    without.iter().try_fold(HostConfig::new(), |config, name| {
        categories::from_str(name)
            .map(|category| config.without_surface(category))
            .ok_or_else(|| InputError::UnknownCategory(name.clone()))
    })
}

/// List each surface's members, one surface per line.
pub fn render_surfaces(host: &Host) -> String {
    let mut out = String::new();
    for category in Category::all() {
        let line = match host.surface(category) {
            Some(surface) => surface.member_names().collect::<Vec<_>>().join(", "),
            None => "(absent)".to_string(),
        };
        let _ = writeln!(out, "{}: {line}", category.host_name());
    }
    let globals = host.globals().member_names().collect::<Vec<_>>().join(", ");
    let _ = writeln!(out, "{}: {globals}", host.globals().name());
    out
}

// ============================================================================
// call
// ============================================================================

/// Arguments of the `call` command.
pub struct CallRequest<'a> {
    pub namespace: &'a str,
    pub method: &'a str,
    pub receiver: &'a str,
    pub args: &'a [String],
    pub global: bool,
    pub show_receiver: bool,
}

pub fn call_member(request: &CallRequest<'_>) -> CliResult<ExitCode> {
    let output = evaluate(request)?;
    print!("{output}");
    Ok(ExitCode::SUCCESS)
}

/// Run one call on a fresh host and render the result (and receiver, if asked).
///
/// The call runs on a current-thread runtime that drives the host's timers; timers still pending
/// when the call returns are dropped with the host.
pub fn evaluate(request: &CallRequest<'_>) -> CliResult<String> {
    let mut receiver = parse_json("receiver", request.receiver)?;
    let args = request
        .args
        .iter()
        .enumerate()
        .map(|(i, raw)| parse_json(&format!("argument {i}"), raw))
        .collect::<Result<Vec<_>, _>>()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|e| CliError::failure(format!("Error: cannot start timer runtime: {e}")))?;

    let mut host = Host::new();
    host.enable(request.namespace);

    let result = host.timers().block_on(&runtime, async {
        if request.global {
            let mut all_args = vec![receiver.clone()];
            all_args.extend(args);
            host.call_global(request.method, &all_args)
        } else {
            host.call(&mut receiver, request.method, &args)
        }
    });
    let value = result.map_err(|e| CliError::failure(e.to_string()))?;

    let mut out = format!("{value}\n");
    if request.show_receiver && !request.global {
        let _ = writeln!(out, "receiver: {receiver}");
    }
    Ok(out)
}

fn parse_json(what: &str, raw: &str) -> Result<Value, InputError> {
    serde_json::from_str::<serde_json::Value>(raw)
        .map(Value::from)
        .map_err(|source| InputError::Json {
            what: what.to_string(),
            source,
        })
}
