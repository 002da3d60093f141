//! The path hook: blocks filesystem writes outside the authorized
//! envelope.

use tracing::debug;

use crate::decision::Verdict;
use crate::overrides::Overrides;
use crate::paths::{ZoneVerdict, classify, has_traversal, resolve};
use crate::request::HookRequest;
use crate::rules::Rules;

/// Evaluate one request against the write-target zone policy.
///
/// Requests without a write target allow immediately (nothing to
/// check; non-write tools populate no target field). A request that
/// does carry a target but no working directory blocks: without a cwd
/// the safe zone cannot be established, and an unverifiable write must
/// not slip through. Otherwise the target is resolved, re-checked for
/// surviving traversal components, and classified; any verdict other
/// than an allow surfaces the classifier's reason verbatim.
pub fn evaluate(request: &HookRequest, rules: &Rules) -> Verdict {
    let Some(target) = request.write_target() else {
        return Verdict::Allow;
    };

    if request.cwd.is_empty() {
        debug!(target, "request carries no working directory");
        return Verdict::block(format!(
            "cannot check write to \"{target}\": request has no working directory (fail-closed)"
        ));
    }

    let resolved = resolve(target, &request.cwd);

    if has_traversal(&resolved) {
        debug!(target, resolved = %resolved.display(), "traversal survived resolution");
        return Verdict::block(format!(
            "path traversal detected: \"{target}\" resolves to \"{}\"",
            resolved.display()
        ));
    }

    let overrides = Overrides::load(rules);
    match classify(&resolved, &request.cwd, &overrides, rules) {
        ZoneVerdict::SafeZone | ZoneVerdict::OverrideAllowed => Verdict::Allow,
        ZoneVerdict::Blocked(reason) | ZoneVerdict::Denied(reason) => Verdict::Block(reason),
    }
}
