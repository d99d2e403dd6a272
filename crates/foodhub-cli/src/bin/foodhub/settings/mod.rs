//! Configuration loading and resolution.
//!
//! `load` is the entry point: it layers config files, `FOODHUB__*`
//! environment variables and CLI flags, then validates the result into a
//! [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
