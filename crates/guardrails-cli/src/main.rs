//! Guardrails CLI - pre-execution policy hooks
//!
//! Usage:
//!   guardrails git      Gate git push commands (shell tool calls)
//!   guardrails path     Gate filesystem writes (Write/Edit/NotebookEdit)
//!   guardrails audit    Append an audit-trail entry (never blocks)
//!
//! Reads one JSON request object from stdin and renders the verdict as
//! a process exit status: 0 allows the tool call, 2 blocks it with the
//! reason on stderr. Nothing is written on allow.

use std::io::Read;

use anyhow::Context;
use guardrails::Rules;
use guardrails::hooks::{self, Hook};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Diagnostics go to stderr and stay silent unless RUST_LOG is
    // set, keeping the hook protocol's "nothing on allow" contract.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(hook) = args.get(1).and_then(|name| Hook::from_name(name)) else {
        eprintln!("usage: guardrails <git|path|audit>");
        std::process::exit(1);
    };

    let raw = match read_stdin() {
        Ok(raw) => raw,
        Err(err) => {
            // An unreadable request is indistinguishable from an
            // undecodable one: fail closed for the gating hooks,
            // stay silent for the audit hook.
            if hook == Hook::Audit {
                std::process::exit(0);
            }
            eprintln!("BLOCKED by {}: {err:#} (fail-closed)", hook.name());
            std::process::exit(2);
        }
    };

    let rules = Rules::default();
    let verdict = hooks::run(hook, &raw, &rules);
    if let Some(reason) = verdict.reason() {
        eprintln!("BLOCKED by {}: {reason}", hook.name());
    }
    std::process::exit(verdict.exit_code());
}

fn read_stdin() -> anyhow::Result<String> {
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("failed to read hook input from stdin")?;
    Ok(raw)
}
