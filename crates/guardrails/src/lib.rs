//! Guardrails: fail-closed policy hooks for agent tool calls.
//!
//! A decision filter that runs before an automated agent executes a
//! privileged operation. Each invocation receives one structured
//! request describing the intended tool call and returns a terminal
//! allow/block verdict:
//!
//! - the **git hook** extracts git invocations from arbitrarily
//!   composed command strings and blocks force pushes and direct
//!   pushes to protected branches;
//! - the **path hook** resolves filesystem write targets and blocks
//!   writes outside the authorized envelope (working directory, temp
//!   roots, user-allowed globs), with a non-overridable blocklist for
//!   credential and system directories;
//! - the **audit hook** appends a redacted JSONL record per call and
//!   never blocks.
//!
//! The engines fail closed: undecodable input or an unexpected
//! internal condition resolves to block for the gating hooks. A
//! missed dangerous operation is the risk this crate exists to
//! prevent; an unnecessary block is merely inconvenient and
//! user-overridable through the override file.

mod decision;
mod overrides;
mod pattern;
mod request;
mod rules;

pub mod git;
pub mod hooks;
pub mod paths;

pub use decision::Verdict;
pub use overrides::Overrides;
pub use pattern::{BranchPattern, PathGlob};
pub use request::{HookRequest, RequestError};
pub use rules::{PROTECTED_BRANCHES, Rules};
