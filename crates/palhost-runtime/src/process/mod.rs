//! Locating and terminating the managed server process.
//!
//! Two concerns, kept apart:
//! - `locator`: read-only lookups over one enumeration of the process table
//! - `terminate`: an unconditional kill request for a pid
//!
//! Neither caches anything. Pids are reused by the OS, so every operation
//! starts from a fresh read.

mod locator;
mod table;
mod terminate;

pub use locator::ProcessLocator;
pub use table::SysinfoProcessTable;
pub use terminate::terminate;
