//! Application-level errors.

use std::path::PathBuf;

use orbit_config::ConfigError;
use orbit_scroll::SettingsError;

use crate::platform::PlatformError;

/// Anything that stops the showcase from starting or finishing.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("invalid scroll settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("failed to read replay {}: {source}", path.display())]
    ReplayRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse replay: {0}")]
    ReplayParse(#[source] ron::error::SpannedError),

    #[error("replay timestamps go backwards at event {index}")]
    ReplayOutOfOrder { index: usize },

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
}
