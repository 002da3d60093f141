//! Canonicalization of write-target paths.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

/// Resolve a possibly relative, tilde-prefixed path into an absolute
/// canonical path.
///
/// Steps, in order: expand a leading `~` to the home directory, join
/// relative paths onto `cwd`, collapse `.`/`..`/redundant separators
/// lexically, then replace the result with its fully symlink-resolved
/// real path when it exists. The symlink step is security critical: a
/// symlink planted inside an authorized directory must not reach
/// outside it.
///
/// Canonicalization failure (dangling symlink, permission denied, the
/// path not existing yet) degrades to the lexically normalized path
/// rather than erroring; a failure here must never loosen the check.
/// Resolution is idempotent.
pub fn resolve(raw: &str, cwd: &str) -> PathBuf {
    let expanded = expand_home(raw);
    let joined = if expanded.is_absolute() {
        expanded
    } else {
        Path::new(cwd).join(expanded)
    };
    let normalized = normalize(&joined);
    match fs::canonicalize(&normalized) {
        Ok(real) => real,
        Err(err) => {
            debug!(path = %normalized.display(), %err, "canonicalize failed, using normalized path");
            normalized
        }
    }
}

/// Whether a parent-directory component survived resolution.
///
/// Resolution collapses `..` lexically, so a surviving component means
/// something went wrong; callers treat it as a traversal attempt and
/// block. This is a defensive re-check, not the primary defense.
pub fn has_traversal(path: &Path) -> bool {
    path.components()
        .any(|component| matches!(component, Component::ParentDir))
}

fn expand_home(raw: &str) -> PathBuf {
    let home = || dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
    if raw == "~" {
        home()
    } else if let Some(rest) = raw.strip_prefix("~/") {
        home().join(rest)
    } else {
        PathBuf::from(raw)
    }
}

/// Lexically collapse `.`, `..`, and redundant separators. `..` at the
/// root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::RootDir | Component::Prefix(_) => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    if out.as_os_str().is_empty() {
        PathBuf::from("/")
    } else {
        out
    }
}
