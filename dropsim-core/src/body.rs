use crate::force::Force;
use crate::surface::{Color, Surface};
use crate::vector::Vector;

/// Result of aggregating a body's force list.
///
/// Static bodies are never force-evaluated; they short-circuit to `Inert`
/// before any summation happens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NetForce {
    Resultant(Force),
    Inert,
}

/// A simulated point mass.
///
/// Position is kept as scalar `x`/`y` because integration writes into the
/// components directly; `angle` only orients drawing and plays no part in
/// the dynamics.
#[derive(Debug, Clone)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub is_static: bool,
    pub velocity: Vector,
    pub mass: f32,
    pub forces: Vec<Force>,
}

impl Body {
    /// An immovable body at the given position. Gravity is still seeded into
    /// the force list, but a static body never evaluates it.
    pub fn fixed(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            angle: 0.0,
            is_static: true,
            velocity: Vector::ZERO,
            mass: 1.0,
            forces: vec![Force::gravity()],
        }
    }

    /// A moving body at the given position, starting at rest under gravity.
    pub fn dynamic(x: f32, y: f32) -> Self {
        Self {
            is_static: false,
            ..Self::fixed(x, y)
        }
    }

    /// Set the initial velocity. Ignored for static bodies, whose velocity
    /// is always the zero vector.
    pub fn velocity(mut self, velocity: Vector) -> Self {
        if !self.is_static {
            self.velocity = velocity;
        }
        self
    }

    pub fn mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Replace the seeded force list. `forces(vec![])` gives a force-free
    /// body with no implicit gravity.
    pub fn forces(mut self, forces: Vec<Force>) -> Self {
        self.forces = forces;
        self
    }

    /// Sum of all applied forces for a dynamic body (empty list sums to
    /// zero); `Inert` for a static body.
    pub fn net_force(&self) -> NetForce {
        if self.is_static {
            NetForce::Inert
        } else {
            let sum = self
                .forces
                .iter()
                .fold(Force::ZERO, |acc, force| acc + *force);
            NetForce::Resultant(sum)
        }
    }

    /// `net force / mass`. The division is guarded: a static body or a zero
    /// mass resolves to the zero vector, never an error.
    pub fn acceleration(&self) -> Vector {
        match self.net_force() {
            NetForce::Resultant(net) => net.divide(self.mass).or_zero(),
            NetForce::Inert => Vector::ZERO,
        }
    }

    /// Advance by `dt` with one semi-implicit Euler step: velocity picks up
    /// `a * dt` first, then position moves by the updated velocity. `scale`
    /// converts physical units to pixels and applies to the position update
    /// only.
    ///
    /// Static bodies go through the same sequence; their acceleration and
    /// velocity both resolve to zero.
    pub fn move_during(&mut self, dt: f32, scale: f32) {
        let a = self.acceleration();
        self.velocity = self.velocity + a.scale(dt);
        let displacement = self.velocity.scale(dt);
        self.x += displacement.x() * scale;
        self.y += displacement.y() * scale;
    }

    /// Map the simulation position (origin bottom-left, y up) into the
    /// surface's pixel space (origin top-left, y down).
    pub fn drawing_coords(&self, surface: &dyn Surface) -> (f32, f32) {
        let (_, height) = surface.size();
        (self.x, height - self.y)
    }
}

/// Anything the simulation loop can update and draw. The loop requires only
/// "has a body, can be drawn"; the shape is up to the implementor.
pub trait Renderable {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;
    fn draw(&self, surface: &mut dyn Surface);
}

/// A circular body: rim and fill discs plus a line showing `angle`.
#[derive(Debug, Clone)]
pub struct Circle {
    pub body: Body,
    pub radius: f32,
    pub stroke_width: f32,
    pub rim_color: Color,
    pub fill_color: Color,
}

impl Circle {
    pub const DEFAULT_RADIUS: f32 = 15.0;
    pub const DEFAULT_STROKE: f32 = 5.0;

    pub fn new(body: Body, rim_color: Color, fill_color: Color) -> Self {
        Self {
            body,
            radius: Self::DEFAULT_RADIUS,
            stroke_width: Self::DEFAULT_STROKE,
            rim_color,
            fill_color,
        }
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }
}

impl Renderable for Circle {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let (x, y) = self.body.drawing_coords(surface);
        surface.draw_circle((x, y), self.radius, self.rim_color);
        surface.draw_circle((x, y), self.radius - self.stroke_width, self.fill_color);

        // Orientation indicator, rotated by the cosmetic angle. Pixel space
        // has y down, so angle 0 points straight up on screen.
        let end_x = x + self.radius * self.body.angle.sin();
        let end_y = y + self.radius * self.body.angle.cos();
        surface.draw_line(
            (x, y),
            (end_x - self.stroke_width, end_y - self.stroke_width),
            self.stroke_width,
            self.rim_color,
        );
    }
}
