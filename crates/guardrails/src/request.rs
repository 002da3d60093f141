//! Decoded hook request shape shared by all hooks.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Failure to decode the JSON request read from the transport.
///
/// The gating hooks treat this as a fail-closed block; the audit hook
/// swallows it.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request body was not valid JSON or did not match the
    /// expected shape.
    #[error("invalid hook request: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One intercepted tool invocation, produced externally once per call.
///
/// `tool_input` is tool-dependent; each hook reads only the fields it
/// cares about (`command` for the git hook, `file_path` or
/// `notebook_path` for the path hook). The request carries no identity
/// beyond the single call and is read-only to the engine.
#[derive(Debug, Clone, Deserialize)]
pub struct HookRequest {
    /// Name of the tool being invoked (e.g. "Bash", "Write").
    #[serde(default)]
    pub tool_name: String,
    /// Tool-dependent input parameters.
    #[serde(default)]
    pub tool_input: Map<String, Value>,
    /// Working directory of the session that issued the call.
    #[serde(default)]
    pub cwd: String,
    /// Identifier of the session that issued the call.
    #[serde(default)]
    pub session_id: String,
}

impl HookRequest {
    /// Decode a request from its raw JSON text.
    pub fn from_json(raw: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The shell command for Bash-style tools, if present.
    pub fn command(&self) -> Option<&str> {
        self.tool_input.get("command").and_then(Value::as_str)
    }

    /// The filesystem write target, if present.
    ///
    /// Write and Edit populate `file_path`; NotebookEdit populates
    /// `notebook_path`. Exactly one is expected for write tools; other
    /// tools populate neither.
    pub fn write_target(&self) -> Option<&str> {
        self.tool_input
            .get("file_path")
            .or_else(|| self.tool_input.get("notebook_path"))
            .and_then(Value::as_str)
    }
}
