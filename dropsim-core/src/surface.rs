//! Boundary traits for everything the simulation loop needs from the
//! outside world: a surface to draw on, a clock to pace itself with, and a
//! source of shutdown events. Backends live in the cli crate; tests use the
//! doubles from `tests::test_helpers`.

/// An RGB color. The constants cover the palette the stock scenarios use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A renderable surface in pixel coordinates (origin top-left, y down).
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn draw_circle(&mut self, center: (f32, f32), radius: f32, color: Color);
    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Color);
    fn size(&self) -> (f32, f32);
    fn set_caption(&mut self, caption: &str);
    /// Make the frame drawn since the last `clear` visible.
    fn present(&mut self);
}

/// A frame clock that both measures and enforces frame pacing.
pub trait FrameClock {
    /// Frames per second observed over the recent past; 0 before any frame
    /// has completed.
    fn measured_rate(&self) -> f32;

    /// Block until the next frame boundary at `target_rate` frames per
    /// second.
    fn throttle(&mut self, target_rate: f32);
}

/// A discrete input event. Quitting is the only event the loop acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Quit,
}

/// Produces the events that arrived since the last poll.
pub trait EventSource {
    fn poll(&mut self) -> Vec<Event>;
}
