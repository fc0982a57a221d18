//! Window creation and event handling via winit.
//!
//! [`ShowcaseApp`] implements winit's [`ApplicationHandler`]: wheel events go
//! through the scroll cycle, resizes reach the camera, and every redraw ticks
//! the scene once.

use std::path::PathBuf;

use orbit_config::{CliArgs, Config};
use orbit_input::{MonotonicClock, WheelEvent};
use tracing::{debug, error, info, instrument, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Fullscreen, Window, WindowAttributes, WindowId};

use crate::error::AppError;
use crate::frame_loop::FrameLoop;
use crate::showcase::Showcase;

/// Returns [`WindowAttributes`] based on the given configuration.
pub fn window_attributes_from_config(config: &Config) -> WindowAttributes {
    let attrs = WindowAttributes::default()
        .with_title(config.window.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window.width as f64,
            config.window.height as f64,
        ));
    if config.window.fullscreen {
        attrs.with_fullscreen(Some(Fullscreen::Borderless(None)))
    } else {
        attrs
    }
}

/// Window-side application state.
pub struct ShowcaseApp {
    /// `config.ron` as last read, before command-line overrides.
    file_config: Config,
    cli: CliArgs,
    /// The file config with `cli` applied; what the showcase runs with.
    config: Config,
    /// Directory watched for config edits when the window regains focus.
    config_dir: Option<PathBuf>,
    showcase: Showcase,
    window: Option<Window>,
    clock: MonotonicClock,
    frame_loop: FrameLoop,
    /// First fatal error seen inside the event loop.
    failure: Option<AppError>,
}

impl ShowcaseApp {
    pub fn new(
        file_config: Config,
        cli: CliArgs,
        config_dir: Option<PathBuf>,
    ) -> Result<Self, AppError> {
        let config = with_overrides(&file_config, &cli);
        let showcase = Showcase::new(&config)?;
        Ok(Self {
            file_config,
            cli,
            config,
            config_dir,
            showcase,
            window: None,
            clock: MonotonicClock::new(),
            frame_loop: FrameLoop::new(),
            failure: None,
        })
    }

    pub fn showcase(&self) -> &Showcase {
        &self.showcase
    }

    fn reload_config(&mut self) {
        let Some(dir) = self.config_dir.as_deref() else {
            return;
        };
        match self.file_config.reload(dir) {
            Ok(Some(fresh)) => {
                let config = with_overrides(&fresh, &self.cli);
                if let Err(e) = self.showcase.apply_config(&config) {
                    warn!("Ignoring reloaded config: {e}");
                    return;
                }
                self.file_config = fresh;
                self.config = config;
            }
            Ok(None) => {}
            Err(e) => warn!("Config reload failed: {e}"),
        }
    }
}

fn with_overrides(file_config: &Config, cli: &CliArgs) -> Config {
    let mut config = file_config.clone();
    config.apply_cli_overrides(cli);
    config
}

impl ApplicationHandler for ShowcaseApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = window_attributes_from_config(&self.config);
        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                let ratio = self.showcase.scene().pixel_ratio(window.scale_factor());
                self.showcase.on_resize(size.width, size.height);
                info!(
                    front_planet = ?self.showcase.front_planet(),
                    "Window created: {}x{} (pixel ratio {:.2})",
                    size.width,
                    size.height,
                    ratio
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!("Window creation failed: {e}");
                self.failure = Some(AppError::Window(e));
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                self.showcase.on_resize(new_size.width, new_size.height);
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                let ratio = self.showcase.scene().pixel_ratio(scale_factor);
                debug!(scale_factor, ratio, "Scale factor changed");
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let event = WheelEvent::from_winit(delta, self.clock.now_ms());
                self.showcase.on_wheel(event);
            }
            WindowEvent::Focused(true) => self.reload_config(),
            WindowEvent::RedrawRequested => {
                let showcase = &mut self.showcase;
                self.frame_loop.tick(|time| showcase.on_frame(time));
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

/// Creates an event loop and runs the showcase until the window closes.
#[instrument(skip_all)]
pub fn run(
    file_config: Config,
    cli: CliArgs,
    config_dir: Option<PathBuf>,
) -> Result<(), AppError> {
    let mut app = ShowcaseApp::new(file_config, cli, config_dir)?;
    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;

    match app.failure.take() {
        Some(e) => Err(e),
        None => {
            info!(
                frames = app.frame_loop.frame_count(),
                transitions = app.showcase.controller().fired_count(),
                "Showcase closed"
            );
            Ok(())
        }
    }
}
