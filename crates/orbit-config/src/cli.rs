//! Command-line flags layered over the loaded config.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Flags accepted by the `orbit-showcase` binary.
///
/// Every flag is optional; an absent flag leaves the file value alone.
#[derive(Parser, Debug, Default)]
#[command(name = "orbit-showcase", about = "Orbiting planets with a scroll-driven carousel")]
pub struct CliArgs {
    /// Window width in logical pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in logical pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Open borderless fullscreen.
    #[arg(long)]
    pub fullscreen: bool,

    /// Minimum milliseconds between two scroll transitions.
    #[arg(long, value_name = "MS")]
    pub throttle_ms: Option<u64>,

    /// Easing curve for transitions, e.g. `power2.inOut` or `none`.
    #[arg(long)]
    pub ease: Option<String>,

    /// Tracing filter, e.g. `debug` or `info,orbit_scroll=trace`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Directory holding `config.ron`.
    #[arg(long, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Replay recorded wheel events from a RON file instead of opening a window.
    #[arg(long, value_name = "FILE")]
    pub replay: Option<PathBuf>,
}

impl Config {
    /// Overwrite the fields the user passed on the command line.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        let window = &mut self.window;
        window.width = args.width.unwrap_or(window.width);
        window.height = args.height.unwrap_or(window.height);
        window.fullscreen |= args.fullscreen;

        let scroll = &mut self.scroll;
        scroll.throttle_delay_ms = args.throttle_ms.unwrap_or(scroll.throttle_delay_ms);
        if let Some(ease) = &args.ease {
            scroll.ease.clone_from(ease);
        }
        if let Some(level) = &args.log_level {
            self.debug.log_level.clone_from(level);
        }
    }
}
