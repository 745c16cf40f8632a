use crate::body::{Body, NetForce};
use crate::vector::{VecQuotient, Vector};
use std::fmt;
use std::ops::{Add, Sub};

/// One directional contribution to a body's net force.
///
/// The math is the same as [`Vector`]'s; the wrapper keeps "a force" distinct
/// from "a displacement" at the type level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Force {
    pub vec: Vector,
}

impl Force {
    pub const ZERO: Force = Force { vec: Vector::ZERO };

    pub fn new(vec: Vector) -> Self {
        Self { vec }
    }

    pub fn from_coords(x: f32, y: f32) -> Self {
        Self {
            vec: Vector::new(x, y),
        }
    }

    /// Uniform gravity, the force every body starts with.
    pub fn gravity() -> Self {
        Self::from_coords(0.0, -9.8)
    }

    /// The force implied by a body's current net acceleration
    /// (`net force / mass`). Introspection only; static bodies and zero mass
    /// both degrade to the zero force.
    pub fn from_body(body: &Body) -> Self {
        match body.net_force() {
            NetForce::Resultant(net) => Self {
                vec: net.divide(body.mass).or_zero(),
            },
            NetForce::Inert => Self::ZERO,
        }
    }

    pub fn scale(&self, k: f32) -> Vector {
        self.vec.scale(k)
    }

    pub fn divide(&self, k: f32) -> VecQuotient {
        self.vec.divide(k)
    }
}

impl Add for Force {
    type Output = Force;

    fn add(self, rhs: Force) -> Force {
        Force {
            vec: self.vec + rhs.vec,
        }
    }
}

impl Sub for Force {
    type Output = Force;

    fn sub(self, rhs: Force) -> Force {
        Force {
            vec: self.vec - rhs.vec,
        }
    }
}

impl fmt::Display for Force {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F({}, {})", self.vec.x(), self.vec.y())
    }
}
