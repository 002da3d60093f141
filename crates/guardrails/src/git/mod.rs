//! Git command policy: extraction and push analysis.
//!
//! Extraction is text-pattern matching over the raw command string,
//! not a shell grammar. It will not follow arbitrary nesting, exotic
//! quoting, or unusual interpreters; it reliably surfaces the
//! documented shapes (direct invocations, `bash -c '...'` wrappers,
//! `&&`/`||`/`;` chains), which is the accepted scope of this engine.

mod extract;
mod push;

pub use extract::extract;
pub use push::{PushDescriptor, analyze};
