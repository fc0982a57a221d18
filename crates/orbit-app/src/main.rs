//! The binary entry point for Orbit Showcase.

use clap::Parser;
use orbit_app::platform::PlatformDirs;
use orbit_app::{AppError, Showcase, replay, window};
use orbit_config::{CliArgs, Config};
use tracing::info;

fn main() {
    if let Err(e) = run(CliArgs::parse()) {
        eprintln!("orbit-showcase: {e}");
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<(), AppError> {
    let mut dirs = PlatformDirs::resolve()?;
    if let Some(config_dir) = args.config.clone() {
        dirs = dirs.with_config_dir(config_dir);
    }
    dirs.create_dirs()?;

    let file_config = Config::load_or_create(&dirs.config_dir)?;
    let mut config = file_config.clone();
    config.apply_cli_overrides(&args);

    orbit_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    info!(
        config = %dirs.config_dir.display(),
        logs = %dirs.log_dir.display(),
        "Orbit Showcase starting"
    );

    if let Some(path) = &args.replay {
        let recording = replay::load_recording(path)?;
        let mut showcase = Showcase::new(&config)?;
        let summary = replay::replay(&mut showcase, &recording);
        println!(
            "{} events: {} fired, {} dropped, {} resets, final index {}, front planet {:?}",
            summary.events,
            summary.fired,
            summary.dropped,
            summary.resets,
            summary.final_index,
            summary.front_planet
        );
        return Ok(());
    }

    window::run(file_config, args, Some(dirs.config_dir))
}
