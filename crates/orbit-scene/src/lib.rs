//! Scene description for the planet carousel: where things are and what they
//! look like, independent of the renderer that draws them.
//!
//! The renderer consumes a [`Scene`] once at start-up, then calls
//! [`Scene::tick`] every frame and [`Scene::resize`] when the surface changes.

pub mod backdrop;
pub mod camera;
pub mod layout;
pub mod spin;

mod scene;

pub use backdrop::{EnvironmentMap, Mapping, StarBackdrop};
pub use camera::SceneCamera;
pub use layout::{OrbitLayout, PlanetSlot};
pub use scene::{Scene, pixel_ratio};
pub use spin::PlanetSpin;
