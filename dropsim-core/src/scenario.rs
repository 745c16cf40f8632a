//! Stock initial populations for the simulator.

use crate::body::{Body, Circle, Renderable};
use crate::surface::Color;
use crate::vector::Vector;
use rand::Rng;

/// The colors the rain scene picks from.
pub const PALETTE: [Color; 7] = [
    Color::RED,
    Color::WHITE,
    Color::GREEN,
    Color::BLACK,
    Color::BLUE,
    Color::ORANGE,
    Color::YELLOW,
];

/// `count` dynamic circles launched from the center of the screen with
/// randomized velocities and colors.
pub fn rain(width: f32, height: f32, count: usize, rng: &mut impl Rng) -> Vec<Box<dyn Renderable>> {
    let mut bodies: Vec<Box<dyn Renderable>> = Vec::with_capacity(count);
    for _ in 0..count {
        let rim = PALETTE[rng.gen_range(0..PALETTE.len())];
        let fill = PALETTE[rng.gen_range(0..PALETTE.len())];
        let velocity = Vector::new(
            rng.gen_range(-8..=8) as f32 * rng.gen::<f32>(),
            rng.gen_range(0..=10) as f32 * rng.gen::<f32>(),
        );
        let body = Body::dynamic(width / 2.0, height / 2.0).velocity(velocity);
        bodies.push(Box::new(Circle::new(body, rim, fill)));
    }
    bodies
}

/// A single green-and-yellow circle thrown from `(x, y)`.
pub fn single_drop(x: f32, y: f32, velocity: Vector) -> Box<dyn Renderable> {
    let body = Body::dynamic(x, y).velocity(velocity);
    Box::new(Circle::new(body, Color::GREEN, Color::YELLOW))
}
