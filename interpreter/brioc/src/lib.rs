//! Brio interpreter CLI library.
//!
//! The `brio` binary's commands live here so they stay testable; `main`
//! only dispatches arguments and maps results to process exit codes.

pub mod commands;
