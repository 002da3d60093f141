//! Glob and wildcard pattern compilation.
//!
//! Both dialects compile to full-string anchored regexes via
//! `regex-lite`. Matching is never substring: a pattern either covers
//! the whole value or does not match at all.

use regex_lite::Regex;

/// Compile a pattern that is a fixed, known-valid literal.
#[allow(clippy::expect_used)]
pub(crate) fn static_regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static regex pattern")
}

/// Escape regex metacharacters in a pattern fragment, leaving `*`
/// untouched for later expansion.
fn escape_fragment(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(
            c,
            '.' | '+' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '?' | '|' | '\\'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// A compiled path glob.
///
/// Dialect: `**` matches zero or more path segments including
/// separators; `*` matches within a single segment only.
///
/// `"~/projects/**"` (after tilde expansion) covers every file under
/// the directory, while `"~/projects/*"` covers only direct children.
#[derive(Debug, Clone)]
pub struct PathGlob {
    regex: Regex,
}

impl PathGlob {
    /// Compile a glob pattern into a matcher.
    ///
    /// `**` sections are split out before single-`*` expansion so the
    /// segment-crossing semantics survive the rewrite.
    pub fn compile(pattern: &str) -> Result<Self, regex_lite::Error> {
        let mut regex = String::from("^");
        for (i, piece) in pattern.split("**").enumerate() {
            if i > 0 {
                regex.push_str(".*");
            }
            regex.push_str(&escape_fragment(piece).replace('*', "[^/]*"));
        }
        regex.push('$');
        Ok(Self {
            regex: Regex::new(&regex)?,
        })
    }

    /// Test a path string against the glob, anchored to the full
    /// string.
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

/// A compiled branch-name wildcard.
///
/// Branch names have no hierarchy, so a single `*` matches any
/// character sequence (e.g. `release-*` covers `release-1.0`).
#[derive(Debug, Clone)]
pub struct BranchPattern {
    regex: Regex,
}

impl BranchPattern {
    /// Compile a wildcard pattern into a matcher.
    pub fn compile(pattern: &str) -> Result<Self, regex_lite::Error> {
        let regex = format!("^{}$", escape_fragment(pattern).replace('*', ".*"));
        Ok(Self {
            regex: Regex::new(&regex)?,
        })
    }

    /// Test a branch name against the pattern, anchored to the full
    /// string.
    pub fn matches(&self, branch: &str) -> bool {
        self.regex.is_match(branch)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn double_star_crosses_segments() {
        let glob = PathGlob::compile("/home/user/projects/**").unwrap();
        assert!(glob.matches("/home/user/projects/app/src/main.rs"));
        assert!(glob.matches("/home/user/projects/readme.md"));
        assert!(!glob.matches("/home/user/other/readme.md"));
    }

    #[test]
    fn single_star_stays_within_segment() {
        let glob = PathGlob::compile("/opt/app/*").unwrap();
        assert!(glob.matches("/opt/app/config.toml"));
        assert!(!glob.matches("/opt/app/nested/config.toml"));
    }

    #[test]
    fn single_star_with_extension() {
        let glob = PathGlob::compile("/opt/app/*.ts").unwrap();
        assert!(glob.matches("/opt/app/index.ts"));
        assert!(!glob.matches("/opt/app/index.rs"));
        assert!(!glob.matches("/opt/app/sub/index.ts"));
    }

    #[test]
    fn globs_are_anchored_not_substring() {
        let glob = PathGlob::compile("/opt/app/*").unwrap();
        assert!(!glob.matches("/prefix/opt/app/file"));
        assert!(!glob.matches("/opt/app/file/suffix"));
    }

    #[test]
    fn literal_dots_do_not_become_wildcards() {
        let glob = PathGlob::compile("/opt/a.b/*").unwrap();
        assert!(glob.matches("/opt/a.b/file"));
        assert!(!glob.matches("/opt/aXb/file"));
    }

    #[test]
    fn branch_wildcard_crosses_everything() {
        let pattern = BranchPattern::compile("release-*").unwrap();
        assert!(pattern.matches("release-1.0"));
        assert!(pattern.matches("release-feature/x"));
        assert!(!pattern.matches("hotfix-release-1.0"));
    }

    #[test]
    fn branch_pattern_without_wildcard_is_exact() {
        let pattern = BranchPattern::compile("main").unwrap();
        assert!(pattern.matches("main"));
        assert!(!pattern.matches("main-backup"));
        assert!(!pattern.matches("not-main"));
    }
}
