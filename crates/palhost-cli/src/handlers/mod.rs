//! Command handlers.
//!
//! Handlers are thin: take a `CliContext`, call into core/runtime, format
//! output for the terminal. Anything worth testing without a terminal lives
//! in the library crates.

pub mod find;
pub mod install;
pub mod log;
pub mod paths;
pub mod status;
pub mod stop;
