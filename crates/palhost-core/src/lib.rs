#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{ConsoleEntry, ConsoleStream, ProcessHandle};
pub use paths::{
    DirectoryCreationStrategy, PathConfiguration, PathError, PathRegistry, ensure_directory,
    verify_writable,
};
pub use ports::{ConsoleSink, NoopConsoleSink, ProcessError, ProcessTable};
