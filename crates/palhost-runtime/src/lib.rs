#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]

pub mod activity;
pub mod fetch;
pub mod process;

pub use activity::{ActivityLogError, ActivityLogger};
pub use fetch::{ArtifactFetcher, FetchError};
pub use process::{ProcessLocator, SysinfoProcessTable, terminate};
