//! Orbit Showcase application: wires wheel input, the scroll cycle and the
//! scene together, either in a window or by replaying a recording.

pub mod error;
pub mod frame_loop;
pub mod platform;
pub mod replay;
pub mod showcase;
pub mod window;

pub use error::AppError;
pub use showcase::Showcase;
