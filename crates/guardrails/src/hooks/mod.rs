//! Hook pipelines: one verdict per decoded request.
//!
//! Each hook is a single synchronous evaluation. Overrides are read
//! fresh from storage inside every evaluation, never cached across
//! invocations. The gating hooks (git, path) fail closed: an
//! undecodable request or any unexpected condition resolves to block.
//! The audit hook is observational and always allows.

pub mod audit;
pub mod git;
pub mod path;

use crate::decision::Verdict;
use crate::request::HookRequest;
use crate::rules::Rules;

/// Which hook pipeline to run for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    /// Gate git push commands carried by shell tools.
    Git,
    /// Gate filesystem write targets.
    Path,
    /// Record an audit-trail entry; never blocks.
    Audit,
}

impl Hook {
    /// Parse the CLI subcommand naming a hook.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "git" => Some(Hook::Git),
            "path" => Some(Hook::Path),
            "audit" => Some(Hook::Audit),
            _ => None,
        }
    }

    /// The name used when attributing a block reason.
    pub fn name(self) -> &'static str {
        match self {
            Hook::Git => "git-guardian",
            Hook::Path => "path-guardian",
            Hook::Audit => "audit-logger",
        }
    }
}

/// Decode a raw JSON request and run the named hook over it.
///
/// Decode failure blocks for the gating hooks and is ignored by the
/// audit hook; there is no path out of this function that fails open.
pub fn run(hook: Hook, raw: &str, rules: &Rules) -> Verdict {
    match HookRequest::from_json(raw) {
        Ok(request) => match hook {
            Hook::Git => git::evaluate(&request, rules),
            Hook::Path => path::evaluate(&request, rules),
            Hook::Audit => audit::record(&request, rules),
        },
        Err(err) => match hook {
            Hook::Audit => Verdict::Allow,
            Hook::Git | Hook::Path => {
                Verdict::block(format!("failed to parse hook input (fail-closed): {err}"))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undecodable_input_blocks_gating_hooks() {
        let rules = Rules::default();
        for hook in [Hook::Git, Hook::Path] {
            let verdict = run(hook, "{truncated", &rules);
            assert_eq!(verdict.exit_code(), 2);
            let reason = verdict.reason().unwrap_or_default();
            assert!(reason.contains("fail-closed"), "{reason}");
        }
    }

    #[test]
    fn undecodable_input_never_blocks_audit() {
        let rules = Rules::default();
        assert!(run(Hook::Audit, "{truncated", &rules).is_allowed());
    }

    #[test]
    fn hook_names_round_trip() {
        for (name, hook) in [("git", Hook::Git), ("path", Hook::Path), ("audit", Hook::Audit)] {
            assert_eq!(Hook::from_name(name), Some(hook));
        }
        assert_eq!(Hook::from_name("unknown"), None);
    }
}
