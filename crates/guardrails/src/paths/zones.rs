//! Layered zone policy for write targets.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::overrides::Overrides;
use crate::paths::resolve;
use crate::pattern::PathGlob;
use crate::rules::Rules;

/// Where a resolved write target falls in the layered policy.
///
/// Produced by [`classify`] and consumed only by the path pipeline.
/// Ordering is part of the contract: an earlier layer's answer is
/// final, so no override can reverse a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneVerdict {
    /// The path hits the always-blocked set; the reason names the
    /// matched entry.
    Blocked(String),
    /// The path is inside the working directory or a temp root.
    SafeZone,
    /// The path matched a user-supplied `allowed_paths` glob.
    OverrideAllowed,
    /// No layer claimed the path; denied by default with a reason
    /// naming the path and the working directory.
    Denied(String),
}

/// Apply the layered path policy to a resolved absolute path.
///
/// Evaluation order, first match wins: always-blocked set (exact or
/// subtree match), safe zone (`cwd` subtree plus temp roots), user
/// override globs, default deny. The blocked set comes first because
/// it is a hard ceiling: a write target must never be able to disable
/// the mechanism enforcing it.
pub fn classify(abs: &Path, cwd: &str, overrides: &Overrides, rules: &Rules) -> ZoneVerdict {
    for blocked in &rules.blocked_paths {
        if abs.starts_with(blocked) {
            debug!(path = %abs.display(), blocked = %blocked.display(), "write target in blocked set");
            return ZoneVerdict::Blocked(format!(
                "path \"{}\" matches always-blocked entry: {}",
                abs.display(),
                blocked.display()
            ));
        }
    }

    // The cwd itself may be relative or symlinked; compare subtrees on
    // its resolved form.
    let abs_cwd = resolve(cwd, cwd);
    if abs.starts_with(&abs_cwd) {
        return ZoneVerdict::SafeZone;
    }
    for safe in &rules.safe_paths {
        if abs.starts_with(safe) {
            return ZoneVerdict::SafeZone;
        }
    }

    let candidate = abs.to_string_lossy();
    for pattern in &overrides.allowed_paths {
        let expanded = expand_home_pattern(pattern);
        if let Ok(glob) = PathGlob::compile(&expanded)
            && glob.matches(&candidate)
        {
            debug!(path = %candidate, pattern, "write target allowed by override");
            return ZoneVerdict::OverrideAllowed;
        }
    }

    ZoneVerdict::Denied(format!(
        "path \"{}\" is outside the working directory\nworking directory: {}\nto allow this operation, add the path to allowed_paths in {}",
        abs.display(),
        cwd,
        rules.override_file.display()
    ))
}

/// Expand a leading `~` in an override glob so patterns and resolved
/// paths compare in the same namespace.
fn expand_home_pattern(pattern: &str) -> String {
    let home = || {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("/"))
            .to_string_lossy()
            .into_owned()
    };
    if pattern == "~" {
        home()
    } else if let Some(rest) = pattern.strip_prefix("~/") {
        format!("{}/{}", home(), rest)
    } else {
        pattern.to_string()
    }
}
