//! Filesystem write-target policy: resolution and zone
//! classification.
//!
//! A write target goes through two stages. [`resolve`] turns whatever
//! the tool supplied (relative, tilde-prefixed, symlinked) into an
//! absolute canonical path; [`classify`] then applies the layered zone
//! policy to that path. The layering is strict: the always-blocked set
//! is a hard ceiling no override can lift, the safe zone is the common
//! case, and everything else is denied by default.

mod resolve;
mod zones;

pub use resolve::{has_traversal, resolve};
pub use zones::{ZoneVerdict, classify};
