//! CLI composition root.
//!
//! Resolves the layout once and builds every component from it. Handlers
//! only ever see the resulting `CliContext`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use palhost_core::ports::SERVER_CONSOLE;
use palhost_core::{ConsoleSink, PathConfiguration, PathRegistry};
use palhost_runtime::{ActivityLogger, ProcessLocator};

use crate::console::TracingConsoleSink;
use crate::error::CliError;

/// Inputs to [`bootstrap`].
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Explicit anchor directory; `None` resolves from the environment.
    pub base_dir: Option<PathBuf>,
}

impl CliConfig {
    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn with_base_dir(mut self, base_dir: Option<PathBuf>) -> Self {
        self.base_dir = base_dir;
        self
    }
}

/// Everything a command handler needs.
pub struct CliContext {
    pub paths: Arc<PathConfiguration>,
    pub logger: ActivityLogger,
    pub locator: ProcessLocator,
    pub console: Arc<dyn ConsoleSink>,
}

impl CliContext {
    /// Record an operator-visible event on the server console and in `logs.txt`.
    ///
    /// A log failure is reported and swallowed: losing an audit line must
    /// not abort the operation being audited.
    pub fn audit(&self, message: &str) {
        if let Err(e) = self
            .logger
            .record_with_sink(message, self.console.as_ref(), SERVER_CONSOLE)
        {
            tracing::warn!(error = %e, "Activity log unavailable");
        }
    }
}

/// Build the CLI context.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let registry = match config.base_dir {
        Some(dir) => {
            PathRegistry::from_config(PathConfiguration::from_base_dir(absolutize(&dir)?)?)
        }
        None => PathRegistry::init()?,
    };
    let paths = registry.config();
    tracing::debug!(base_dir = %paths.base_dir.display(), "Bootstrapped palhost");

    Ok(CliContext {
        logger: ActivityLogger::from_paths(&paths),
        locator: ProcessLocator::system(),
        console: Arc::new(TracingConsoleSink),
        paths,
    })
}

/// Make a user-supplied directory absolute against the working directory.
fn absolutize(dir: &Path) -> Result<PathBuf, CliError> {
    if dir.is_absolute() {
        Ok(dir.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(dir))
    }
}
