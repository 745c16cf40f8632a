pub mod body;
pub mod engine;
pub mod force;
pub mod scenario;
pub mod surface;
pub mod timestep;
pub mod vector;

pub use body::{Body, Circle, NetForce, Renderable};
pub use engine::{Engine, EngineState, METER};
pub use force::Force;
pub use surface::{Color, Event, EventSource, FrameClock, Surface};
pub use timestep::Timestep;
pub use vector::{VecQuotient, Vector};

// Test helpers module (public for integration tests)
// Always compiled - integration tests are separate crates and need access
pub mod tests;
