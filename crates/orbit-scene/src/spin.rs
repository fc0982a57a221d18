//! Per-frame self-rotation of the planets.

/// Yaw of each planet about its own axis, advanced once per rendered frame.
///
/// Each frame adds `elapsed_secs * rate` to every planet's yaw, where
/// `elapsed_secs` is the total time since the scene started. The spin
/// therefore speeds up the longer the scene runs.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetSpin {
    yaw: Vec<f32>,
    rate: f32,
    frames: u64,
}

impl PlanetSpin {
    pub fn new(planet_count: usize, rate: f32) -> Self {
        Self {
            yaw: vec![0.0; planet_count],
            rate,
            frames: 0,
        }
    }

    /// Advance one frame at `elapsed_secs` since start.
    pub fn tick(&mut self, elapsed_secs: f32) {
        let step = elapsed_secs * self.rate;
        for yaw in &mut self.yaw {
            *yaw += step;
        }
        self.frames += 1;
    }

    pub fn yaw(&self, planet: usize) -> Option<f32> {
        self.yaw.get(planet).copied()
    }

    pub fn yaws(&self) -> &[f32] {
        &self.yaw
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
