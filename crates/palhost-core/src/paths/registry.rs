//! Process-wide owner of the resolved layout.
//!
//! The registry is constructed explicitly at startup and passed down; there
//! is no global. Components take an `Arc<PathConfiguration>` (or a borrow)
//! when they are built, so initialization order is visible in the code.

use std::sync::Arc;

use super::error::PathError;
use super::layout::PathConfiguration;

/// Owns the single `PathConfiguration` for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct PathRegistry {
    config: Arc<PathConfiguration>,
}

impl PathRegistry {
    /// Resolve the layout once for the current process.
    ///
    /// An error here means the executable directory is unknown; callers
    /// should abort startup.
    pub fn init() -> Result<Self, PathError> {
        Ok(Self::from_config(PathConfiguration::resolve()?))
    }

    /// Wrap an already-built layout (tests, `--base-dir`).
    pub fn from_config(config: PathConfiguration) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Shared read-only handle to the layout.
    pub fn config(&self) -> Arc<PathConfiguration> {
        Arc::clone(&self.config)
    }
}

impl AsRef<PathConfiguration> for PathRegistry {
    fn as_ref(&self) -> &PathConfiguration {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::BASE_DIR_ENV;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};

    #[test]
    fn init_is_deterministic() {
        // Lock ensures no other test is mid-way through overriding the base dir
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::unset(BASE_DIR_ENV);

        let first = PathRegistry::init().expect("first init");
        let second = PathRegistry::init().expect("second init");

        assert_eq!(*first.config(), *second.config());
    }

    #[test]
    fn init_honours_base_dir_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        let _env = EnvVarGuard::set(BASE_DIR_ENV, tmp.path().to_str().unwrap());

        let registry = PathRegistry::init().unwrap();
        assert_eq!(registry.config().base_dir, tmp.path());
        assert_eq!(registry.config().logs_path, tmp.path().join("logs.txt"));
    }

    #[test]
    fn handles_share_one_instance() {
        let tmp = tempfile::tempdir().unwrap();
        let registry =
            PathRegistry::from_config(PathConfiguration::from_base_dir(tmp.path()).unwrap());

        let a = registry.config();
        let b = registry.clone().config();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
