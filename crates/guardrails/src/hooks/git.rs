//! The git hook: blocks force pushes and pushes to protected
//! branches.

use tracing::debug;

use crate::decision::Verdict;
use crate::git::{analyze, extract};
use crate::overrides::Overrides;
use crate::request::HookRequest;
use crate::rules::Rules;

/// Evaluate one request against the git push policy.
///
/// Commands without any git invocation marker allow immediately. A
/// whole-command match in `allowed_commands` is a full escape hatch.
/// Otherwise every extracted git command is analyzed in order; the
/// first push that violates a rule blocks the request and later
/// commands are not evaluated. Force pushes are blocked outright
/// (the lease-safe variant is exempt); pushes to protected branches
/// are blocked unless an `allowed_branches` pattern covers the
/// branch.
pub fn evaluate(request: &HookRequest, rules: &Rules) -> Verdict {
    let Some(command) = request.command() else {
        // Nothing to check; the tool will fail on its own terms.
        return Verdict::Allow;
    };

    // Cheap short-circuit: most commands are not git at all.
    if !command.contains("git") {
        return Verdict::Allow;
    }

    let overrides = Overrides::load(rules);
    if overrides.allows_command(command) {
        debug!(command, "command allowed by allowed_commands override");
        return Verdict::Allow;
    }

    for git_command in extract(command) {
        let push = analyze(&git_command);
        if !push.is_push {
            // Other destructive git operations are out of scope here.
            continue;
        }

        if push.is_force {
            debug!(command = %git_command, "blocking force push");
            return Verdict::block(format!(
                "force push detected: \"{git_command}\"\n\
                 force pushes are blocked to protect version history\n\
                 safe alternative: use --force-with-lease instead\n\
                 to override: add the command to allowed_commands in {}",
                rules.override_file.display()
            ));
        }

        if let Some(branch) = push.target_branch.as_deref() {
            if overrides.allows_branch(branch) {
                continue;
            }
            if rules.protected_branches.iter().any(|p| p == branch) {
                debug!(branch, command = %git_command, "blocking push to protected branch");
                return Verdict::block(format!(
                    "push to protected branch detected: \"{git_command}\"\n\
                     direct pushes to \"{branch}\" are blocked\n\
                     alternatives:\n  \
                     - push to a feature branch: git push origin feature-branch\n  \
                     - create a pull request for review\n\
                     to override: add \"{branch}\" to allowed_branches in {}",
                    rules.override_file.display()
                ));
            }
        }
    }

    Verdict::Allow
}
