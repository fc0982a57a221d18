//! The running showcase: scene, scroll controller and the animated state they
//! share.

use orbit_animation::AnimatedScene;
use orbit_config::Config;
use orbit_input::WheelEvent;
use orbit_scene::Scene;
use orbit_scroll::{ScrollCycleController, ScrollOutcome, ScrollSettings};
use tracing::{debug, info};

use crate::error::AppError;
use crate::frame_loop::FrameTime;

/// Owns every piece of mutable state the event handlers touch.
///
/// Built once at start-up and handed by reference to the window or the
/// replay driver.
#[derive(Debug, Clone)]
pub struct Showcase {
    scene: Scene,
    animated: AnimatedScene,
    controller: ScrollCycleController,
}

impl Showcase {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let settings = ScrollSettings::from_config(&config.scroll)?;
        let scene = Scene::build(&config.scene, config.window.width, config.window.height);
        let animated = AnimatedScene::new(scene.layout.initial_rotation());
        Ok(Self {
            scene,
            animated,
            controller: ScrollCycleController::new(settings),
        })
    }

    /// Route a wheel event through the scroll cycle into the scene.
    pub fn on_wheel(&mut self, event: WheelEvent) -> ScrollOutcome {
        let outcome = self.controller.handle_wheel_event(event, &mut self.animated);
        if outcome.fired() {
            debug!(front_planet = ?self.front_planet(), "Transition target");
        }
        outcome
    }

    /// Planet that faces the camera once the pending transitions finish.
    pub fn front_planet(&self) -> Option<usize> {
        self.scene.front_planet(self.animated.group_rotation())
    }

    pub fn on_frame(&mut self, time: FrameTime) {
        self.scene.tick(time.elapsed_secs);
    }

    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.scene.resize(width, height);
    }

    /// Pick up a changed config. Scroll settings apply immediately; scene
    /// changes need a restart.
    pub fn apply_config(&mut self, config: &Config) -> Result<(), AppError> {
        let settings = ScrollSettings::from_config(&config.scroll)?;
        if &settings != self.controller.settings() {
            info!(
                throttle_ms = settings.throttle_delay_ms,
                cycle_length = settings.cycle_length(),
                "Scroll settings updated"
            );
            self.controller.set_settings(settings);
        }
        Ok(())
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn animated(&self) -> &AnimatedScene {
        &self.animated
    }

    pub fn controller(&self) -> &ScrollCycleController {
        &self.controller
    }
}
