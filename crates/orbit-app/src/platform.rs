//! Where the showcase keeps its config and logs on each OS.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "orbit-showcase";

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("this OS exposes no per-user config directory")]
    NoConfigDir,
    #[error("cannot create {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Config and log directories for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDirs {
    /// Holds `config.ron`.
    pub config_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl PlatformDirs {
    /// Look up the OS locations. Nothing is created yet.
    ///
    /// Logs go to the state directory when the OS has one (XDG on Linux) and
    /// next to the config otherwise.
    pub fn resolve() -> Result<Self, PlatformError> {
        let config_dir = dirs::config_dir()
            .ok_or(PlatformError::NoConfigDir)?
            .join(APP_DIR);
        let log_dir = match dirs::state_dir() {
            Some(state) => state.join(APP_DIR).join("logs"),
            None => config_dir.join("logs"),
        };
        Ok(Self { config_dir, log_dir })
    }

    /// Keep everything below `root`; used by tests and portable installs.
    pub fn resolve_with_root(root: &Path) -> Self {
        let base = root.join(APP_DIR);
        Self {
            log_dir: base.join("logs"),
            config_dir: base,
        }
    }

    /// Replace the config directory, e.g. from `--config`.
    pub fn with_config_dir(self, config_dir: PathBuf) -> Self {
        Self { config_dir, ..self }
    }

    pub fn create_dirs(&self) -> Result<(), PlatformError> {
        [&self.config_dir, &self.log_dir].into_iter().try_for_each(|dir| {
            std::fs::create_dir_all(dir).map_err(|source| PlatformError::CreateDir {
                path: dir.clone(),
                source,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rooted_layout() {
        let root = Path::new("/tmp/orbit-root");
        let dirs = PlatformDirs::resolve_with_root(root);
        assert_eq!(dirs.config_dir, root.join("orbit-showcase"));
        assert_eq!(dirs.log_dir, root.join("orbit-showcase").join("logs"));
    }

    #[test]
    fn test_create_dirs_on_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let dirs = PlatformDirs::resolve_with_root(tmp.path());
        dirs.create_dirs().unwrap();
        assert!(dirs.config_dir.is_dir());
        assert!(dirs.log_dir.is_dir());
    }

    #[test]
    fn test_config_dir_override_keeps_logs() {
        let tmp = tempfile::tempdir().unwrap();
        let custom = tmp.path().join("custom");
        let dirs = PlatformDirs::resolve_with_root(tmp.path()).with_config_dir(custom.clone());
        assert_eq!(dirs.config_dir, custom);
        assert!(dirs.log_dir.ends_with("logs"));
    }

    #[test]
    fn test_create_dirs_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("file");
        std::fs::write(&blocker, "").unwrap();
        let dirs = PlatformDirs::resolve_with_root(tmp.path()).with_config_dir(blocker.join("cfg"));
        let err = dirs.create_dirs().unwrap_err();
        assert!(err.to_string().contains("cfg"));
    }
}
