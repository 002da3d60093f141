//! Terminal verdict type shared by all hooks.

/// The outcome of evaluating one request against one hook.
///
/// A verdict is terminal and non-negotiable for the single invocation
/// it answers: there is no ask/retry state, and no later check can
/// reverse it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The tool call may proceed. Nothing is written to the
    /// diagnostic stream.
    Allow,
    /// The tool call is rejected, with a human-readable reason for
    /// the diagnostic stream.
    Block(String),
}

impl Verdict {
    /// Build a block verdict from any displayable reason.
    pub fn block(reason: impl Into<String>) -> Self {
        Verdict::Block(reason.into())
    }

    /// Whether the tool call may proceed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allow)
    }

    /// The block reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Verdict::Allow => None,
            Verdict::Block(reason) => Some(reason),
        }
    }

    /// Process exit status for the hook protocol: 0 allows the call,
    /// 2 blocks it.
    pub fn exit_code(&self) -> i32 {
        match self {
            Verdict::Allow => 0,
            Verdict::Block(_) => 2,
        }
    }
}
