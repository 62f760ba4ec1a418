//! Domain values shared across palhost crates.

mod console;
mod process;

pub use console::{ConsoleEntry, ConsoleStream};
pub use process::ProcessHandle;
