//! User-editable policy extensions.
//!
//! The override file is a small JSON document at a well-known location
//! that widens (never narrows) the allow policy. It is read fresh on
//! every invocation so concurrent hook processes can never observe a
//! stale cached copy.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::pattern::BranchPattern;
use crate::rules::Rules;

/// User-supplied extensions to the allow policy.
///
/// Loading never fails: a missing, unreadable, or malformed file
/// yields all-empty fields. Absence of valid overrides must never
/// expand permissions, so this is the fail-closed default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Glob patterns for write targets allowed beyond the safe zone.
    pub allowed_paths: Vec<String>,
    /// Exact commands (whitespace-insensitive) that bypass the git
    /// hook entirely.
    pub allowed_commands: Vec<String>,
    /// Branch wildcard patterns that may receive pushes despite being
    /// protected.
    pub allowed_branches: Vec<String>,
}

impl Overrides {
    /// Load overrides from the configured location.
    pub fn load(rules: &Rules) -> Self {
        Self::load_from(&rules.override_file)
    }

    /// Load overrides from an explicit file path.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = fs::read_to_string(path) else {
            return Self::default();
        };
        let Ok(value) = serde_json::from_str::<Value>(&content) else {
            debug!(path = %path.display(), "override file is not valid JSON, ignoring");
            return Self::default();
        };
        // Only the three known keys are trusted; each one defaults
        // independently when missing or of the wrong shape.
        Self {
            allowed_paths: string_list(&value, "allowed_paths"),
            allowed_commands: string_list(&value, "allowed_commands"),
            allowed_branches: string_list(&value, "allowed_branches"),
        }
    }

    /// Whether the whole command string exactly matches an
    /// `allowed_commands` entry, modulo whitespace runs.
    pub fn allows_command(&self, command: &str) -> bool {
        let normalized = normalize_whitespace(command);
        self.allowed_commands
            .iter()
            .any(|allowed| normalize_whitespace(allowed) == normalized)
    }

    /// Whether a branch name matches any `allowed_branches` wildcard
    /// pattern.
    pub fn allows_branch(&self, branch: &str) -> bool {
        self.allowed_branches.iter().any(|pattern| {
            BranchPattern::compile(pattern).is_ok_and(|p| p.matches(branch))
        })
    }
}

/// Collapse whitespace runs to single spaces and trim the ends.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn string_list(value: &Value, key: &str) -> Vec<String> {
    match value.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_owned))
            .collect(),
        _ => Vec::new(),
    }
}
