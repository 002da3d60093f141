//! Extraction of git invocations from composed command strings.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::pattern::static_regex;

/// Inline scripts passed to an interpreter: `bash -c '...'`,
/// `sh -c "..."`, `zsh -c '...'`.
static WRAPPER: LazyLock<Regex> =
    LazyLock::new(|| static_regex(r#"\b(?:bash|sh|zsh)\s+-c\s+['"]([^'"]+)['"]"#));

/// A git invocation inside a wrapper script, up to and beyond the
/// first argument.
static INNER_GIT: LazyLock<Regex> = LazyLock::new(|| static_regex(r"git\s+[^\s;|&]+.*"));

/// Sequencing and boolean operators that chain commands.
static CHAIN: LazyLock<Regex> = LazyLock::new(|| static_regex(r"\s*(?:&&|\|\||;)\s*"));

/// Pull every candidate git invocation out of a shell command string.
///
/// Three non-exclusive strategies are applied to the same input and
/// unioned, order-preserving and de-duplicated: the whole string as a
/// direct invocation, quoted scripts inside interpreter wrappers, and
/// segments of operator chains. A command may disguise a push in any
/// of these forms, so all invocations present are surfaced rather
/// than only the first.
pub fn extract(command: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();

    let trimmed = command.trim();
    if trimmed == "git" || trimmed.starts_with("git ") {
        found.push(trimmed.to_string());
    }

    for caps in WRAPPER.captures_iter(command) {
        let Some(inner) = caps.get(1).map(|m| m.as_str()) else {
            continue;
        };
        if inner.contains("git ")
            && let Some(m) = INNER_GIT.find(inner)
        {
            push_unique(&mut found, m.as_str().trim());
        }
    }

    for segment in CHAIN.split(command) {
        let segment = segment.trim();
        if segment.starts_with("git ") {
            push_unique(&mut found, segment);
        }
    }

    found
}

fn push_unique(found: &mut Vec<String>, candidate: &str) {
    if !found.iter().any(|existing| existing == candidate) {
        found.push(candidate.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_invocation() {
        assert_eq!(extract("git push origin main"), vec!["git push origin main"]);
        assert_eq!(extract("  git status  "), vec!["git status"]);
    }

    #[test]
    fn bare_git_counts_as_direct() {
        assert_eq!(extract("git"), vec!["git"]);
    }

    #[test]
    fn non_git_commands_yield_nothing() {
        assert!(extract("ls -la").is_empty());
        assert!(extract("echo git-ish").is_empty());
    }

    #[test]
    fn shell_wrapper_single_quotes() {
        let found = extract("bash -c 'git push --force origin feature-x'");
        assert_eq!(found, vec!["git push --force origin feature-x"]);
    }

    #[test]
    fn shell_wrapper_double_quotes() {
        let found = extract(r#"sh -c "git push origin main""#);
        assert_eq!(found, vec!["git push origin main"]);
    }

    #[test]
    fn wrapper_with_leading_noise_inside() {
        let found = extract("zsh -c 'cd /repo && git push origin main'");
        // The chain strategy splits the raw string without quote
        // awareness, so a second candidate keeps the closing quote.
        // Both are analyzed; the quoted one simply names no protected
        // branch.
        assert_eq!(
            found,
            vec!["git push origin main", "git push origin main'"]
        );
    }

    #[test]
    fn chained_commands_surface_every_git_segment() {
        let found = extract(r#"git add . && git commit -m "x" && git push origin prod"#);
        assert_eq!(
            found,
            vec![
                "git add . && git commit -m \"x\" && git push origin prod",
                "git add .",
                "git commit -m \"x\"",
                "git push origin prod",
            ]
        );
    }

    #[test]
    fn semicolon_and_or_chains() {
        let found = extract("make build; git push origin main || echo failed");
        assert_eq!(found, vec!["git push origin main"]);
    }

    #[test]
    fn duplicates_are_collapsed() {
        let found = extract("git push origin main && git push origin main");
        // The direct strategy captures the whole string, the chain
        // strategy contributes the segment once.
        assert_eq!(
            found,
            vec![
                "git push origin main && git push origin main",
                "git push origin main",
            ]
        );
    }
}
