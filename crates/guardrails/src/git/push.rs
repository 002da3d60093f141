//! Structured analysis of git push commands.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::pattern::static_regex;

static PUSH: LazyLock<Regex> = LazyLock::new(|| static_regex(r"^git\s+push\b"));
static FORCE_WITH_LEASE: LazyLock<Regex> =
    LazyLock::new(|| static_regex(r"--force-with-lease\b"));
static FORCE: LazyLock<Regex> = LazyLock::new(|| static_regex(r"\s--force\b"));
static SHORT_FORCE: LazyLock<Regex> = LazyLock::new(|| static_regex(r"\s-f\b"));

static PUSH_PREFIX: LazyLock<Regex> = LazyLock::new(|| static_regex(r"^git\s+push\s*"));
/// Every recognized flag, longest variants first so the alternation
/// cannot leave a `--force` stub behind when stripping
/// `--force-with-lease`.
static FLAGS: LazyLock<Regex> = LazyLock::new(|| {
    static_regex(
        r"--force-with-lease\b|--force\b|--set-upstream\b|--all\b|--tags\b|--delete\b|-u\b|-f\b|-d\b",
    )
});

/// What a single git command means for push policy.
///
/// Derived per extracted command, never stored. `is_force` and
/// `is_force_with_lease` are mutually exclusive: a command carrying
/// the lease-safe flag is never also reported as a plain force.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushDescriptor {
    /// Whether the command is a `git push` at all. When false, every
    /// other field is in its default state.
    pub is_push: bool,
    /// Plain `--force`/`-f` present (and no lease-safe flag).
    pub is_force: bool,
    /// `--force-with-lease` present.
    pub is_force_with_lease: bool,
    /// First positional argument, usually the remote name.
    pub remote: Option<String>,
    /// The branch the push targets, after refspec interpretation.
    /// Absent means branch policy cannot be evaluated for this
    /// command; only the force rule applies then.
    pub target_branch: Option<String>,
}

/// Parse one extracted git command into a [`PushDescriptor`].
///
/// The lease-safe flag is tested before the plain force flag because
/// its text contains the plain flag's text as a substring. Remote and
/// branch come from the positional arguments left after stripping all
/// recognized flags: first token is the remote, second is the target
/// ref. A `local:remote` refspec targets the part after the colon; an
/// empty remote side falls back to the local name, which also covers
/// the delete-by-refspec shorthand.
pub fn analyze(git_command: &str) -> PushDescriptor {
    let mut descriptor = PushDescriptor::default();
    if !PUSH.is_match(git_command) {
        return descriptor;
    }
    descriptor.is_push = true;

    descriptor.is_force_with_lease = FORCE_WITH_LEASE.is_match(git_command);
    descriptor.is_force = !descriptor.is_force_with_lease
        && (FORCE.is_match(git_command) || SHORT_FORCE.is_match(git_command));

    let without_prefix = PUSH_PREFIX.replace(git_command, "");
    let cleaned = FLAGS.replace_all(&without_prefix, "");
    let mut positional = cleaned.split_whitespace();

    descriptor.remote = positional.next().map(str::to_string);
    descriptor.target_branch = positional.next().map(target_of_refspec);

    descriptor
}

fn target_of_refspec(refspec: &str) -> String {
    if !refspec.contains(':') {
        return refspec.to_string();
    }
    let mut parts = refspec.split(':');
    let local = parts.next().unwrap_or_default();
    let remote = parts.next().unwrap_or_default();
    if remote.is_empty() {
        local.to_string()
    } else {
        remote.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_push_commands_stay_default() {
        assert_eq!(analyze("git status"), PushDescriptor::default());
        assert_eq!(analyze("git pull origin main"), PushDescriptor::default());
        // "push" must immediately follow "git"
        assert_eq!(analyze("git stash push"), PushDescriptor::default());
    }

    #[test]
    fn bare_push() {
        let descriptor = analyze("git push");
        assert!(descriptor.is_push);
        assert!(!descriptor.is_force);
        assert!(descriptor.remote.is_none());
        assert!(descriptor.target_branch.is_none());
    }

    #[test]
    fn remote_and_branch_are_positional() {
        let descriptor = analyze("git push origin main");
        assert_eq!(descriptor.remote.as_deref(), Some("origin"));
        assert_eq!(descriptor.target_branch.as_deref(), Some("main"));
    }

    #[test]
    fn remote_only() {
        let descriptor = analyze("git push origin");
        assert_eq!(descriptor.remote.as_deref(), Some("origin"));
        assert!(descriptor.target_branch.is_none());
    }

    #[test]
    fn long_force_flag() {
        let descriptor = analyze("git push --force origin feature");
        assert!(descriptor.is_force);
        assert!(!descriptor.is_force_with_lease);
        assert_eq!(descriptor.target_branch.as_deref(), Some("feature"));
    }

    #[test]
    fn short_force_flag() {
        let descriptor = analyze("git push -f origin feature");
        assert!(descriptor.is_force);
    }

    #[test]
    fn lease_safe_flag_is_not_force() {
        let descriptor = analyze("git push --force-with-lease origin feature");
        assert!(descriptor.is_force_with_lease);
        assert!(!descriptor.is_force, "lease and force are mutually exclusive");
        assert_eq!(descriptor.target_branch.as_deref(), Some("feature"));
    }

    #[test]
    fn upstream_and_tags_flags_are_stripped() {
        let descriptor = analyze("git push -u origin feature --tags");
        assert_eq!(descriptor.remote.as_deref(), Some("origin"));
        assert_eq!(descriptor.target_branch.as_deref(), Some("feature"));
    }

    #[test]
    fn refspec_targets_the_remote_side() {
        let descriptor = analyze("git push origin feature:main");
        assert_eq!(descriptor.target_branch.as_deref(), Some("main"));
    }

    #[test]
    fn empty_remote_side_falls_back_to_local_name() {
        // Deliberately preserved quirk: `feature:` is a deletion
        // refspec, yet it is classified as targeting "feature".
        let descriptor = analyze("git push origin feature:");
        assert_eq!(descriptor.target_branch.as_deref(), Some("feature"));
    }

    #[test]
    fn delete_flag_is_stripped() {
        let descriptor = analyze("git push origin --delete stale-branch");
        assert_eq!(descriptor.remote.as_deref(), Some("origin"));
        assert_eq!(descriptor.target_branch.as_deref(), Some("stale-branch"));
    }

    #[test]
    fn force_flag_requires_word_boundary() {
        // "--force-with-lease" must not be misread as "--force"
        let descriptor = analyze("git push --force-with-lease=refs/heads/x origin feature");
        assert!(descriptor.is_force_with_lease);
        assert!(!descriptor.is_force);
    }
}
