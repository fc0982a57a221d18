//! Structured logging for Orbit Showcase.
//!
//! Console output with uptime timestamps and module paths via the `tracing`
//! ecosystem, plus a JSON log file in debug builds. The filter comes from
//! `RUST_LOG` when set, otherwise from the config `debug.log_level`.

use orbit_config::Config;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config provide one.
pub const DEFAULT_FILTER: &str = "info,winit=warn";

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "orbit.log";

/// Resolve the filter directive string from an optional config.
///
/// An empty `debug.log_level` falls back to [`DEFAULT_FILTER`]. Windowing
/// noise stays at `warn` unless the config names `winit` itself.
pub fn filter_directives(config: Option<&Config>) -> String {
    match config.map(|c| c.debug.log_level.trim()) {
        Some(level) if !level.is_empty() => {
            if level.contains("winit") {
                level.to_string()
            } else {
                format!("{level},winit=warn")
            }
        }
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Where the JSON log goes, or `None` when file logging is off.
///
/// Files are only written in debug builds, and only when the config leaves
/// `debug.file_logging` on.
pub fn log_file_path(
    log_dir: Option<&Path>,
    debug_build: bool,
    config: Option<&Config>,
) -> Option<PathBuf> {
    let enabled = debug_build && config.is_none_or(|c| c.debug.file_logging);
    log_dir.filter(|_| enabled).map(|dir| dir.join(LOG_FILE_NAME))
}

/// Initialize the global tracing subscriber.
///
/// * `log_dir` - directory for the JSON log file (debug builds only)
/// * `debug_build` - whether file logging may be enabled
/// * `config` - optional configuration supplying the level and the file toggle
///
/// ```no_run
/// use orbit_log::init_logging;
///
/// init_logging(None, false, None);
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = filter_directives(config);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if let Some(path) = log_file_path(log_dir, debug_build, config)
        && let Some(dir) = path.parent()
        && std::fs::create_dir_all(dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(&path)
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}
