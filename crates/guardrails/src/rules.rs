//! Process-wide constant policy configuration.
//!
//! The fixed blocklists, safe-zone roots, and protected-branch list are
//! immutable data assembled once at the start of an evaluation and
//! passed explicitly into the classifiers, never read from ambient
//! globals. Tests construct their own [`Rules`] with scratch
//! directories.

use std::env;
use std::path::PathBuf;

/// Branch names that never accept a direct push without an override.
///
/// main/master are the usual integration branches and should receive
/// changes via pull request; production/prod are deployment branches.
pub const PROTECTED_BRANCHES: [&str; 4] = ["main", "master", "production", "prod"];

/// Immutable policy configuration for one evaluation.
#[derive(Debug, Clone)]
pub struct Rules {
    /// Absolute paths that can never be written to, even inside the
    /// working directory. Overrides cannot lift this ceiling.
    pub blocked_paths: Vec<PathBuf>,
    /// Temp roots that are always writable regardless of the working
    /// directory.
    pub safe_paths: Vec<PathBuf>,
    /// Branches protected from direct pushes.
    pub protected_branches: Vec<String>,
    /// Location of the user-editable override file, read fresh on
    /// every invocation.
    pub override_file: PathBuf,
    /// Directory receiving the JSONL audit trail.
    pub audit_log_dir: PathBuf,
}

impl Default for Rules {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
        let config_dir = home.join(".guardrails");
        Self {
            blocked_paths: vec![
                // Credential stores
                home.join(".ssh"),
                home.join(".aws"),
                home.join(".gnupg"),
                // Self-protection: the engine's own configuration must
                // not be writable through the very hooks it configures
                config_dir.clone(),
                // Core OS directories
                PathBuf::from("/etc"),
                PathBuf::from("/usr"),
                PathBuf::from("/System"),
                PathBuf::from("/Library"),
                PathBuf::from("/bin"),
                PathBuf::from("/sbin"),
                PathBuf::from("/var/root"),
            ],
            safe_paths: vec![
                PathBuf::from("/tmp"),
                PathBuf::from("/var/tmp"),
                env::temp_dir(),
            ],
            protected_branches: PROTECTED_BRANCHES.iter().map(|b| (*b).to_string()).collect(),
            override_file: config_dir.join("overrides.json"),
            audit_log_dir: config_dir.join("logs"),
        }
    }
}
