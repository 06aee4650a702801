//! Configuration loading and resolution utilities.
//!
//! Files, environment variables and CLI flags are layered by `sources`,
//! deserialized into the `raw` mirror, then validated into a
//! [`ResolvedConfig`] that the workflow consumes.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
