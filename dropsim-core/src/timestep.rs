use crate::surface::FrameClock;

/// Where the integration timestep comes from.
///
/// `MeasuredRate` derives it live from the clock's observed frame rate, so
/// frame jitter feeds straight into the step size and the first frame (rate
/// still 0) produces no motion. `Fixed` decouples the physics from the
/// clock, which is what tests want.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Timestep {
    MeasuredRate,
    Fixed(f32),
}

impl Timestep {
    pub fn dt(&self, clock: &dyn FrameClock) -> f32 {
        match self {
            Timestep::MeasuredRate => {
                let fps = clock.measured_rate();
                if fps != 0.0 {
                    1.0 / fps
                } else {
                    0.0
                }
            }
            Timestep::Fixed(dt) => *dt,
        }
    }
}
