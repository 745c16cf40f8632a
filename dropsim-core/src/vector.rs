use glam::Vec2;
use std::fmt;
use std::ops::{Add, Sub};

/// An immutable 2D vector with its magnitude cached at construction time.
///
/// Every operation returns a new `Vector`; nothing mutates in place, so the
/// cached length can never go stale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    xy: Vec2,
    length: f32,
}

/// Outcome of a scalar division: either a proper vector, or the degenerate
/// case where the divisor was zero.
///
/// Per-frame update paths collapse this with [`VecQuotient::or_zero`] so
/// integration never fails; callers that care can match on the discriminant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VecQuotient {
    Vector(Vector),
    Degenerate,
}

impl VecQuotient {
    /// Collapse the degenerate case to the zero vector.
    pub fn or_zero(self) -> Vector {
        match self {
            VecQuotient::Vector(v) => v,
            VecQuotient::Degenerate => Vector::ZERO,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self, VecQuotient::Degenerate)
    }
}

impl Vector {
    pub const ZERO: Vector = Vector {
        xy: Vec2::ZERO,
        length: 0.0,
    };

    pub fn new(x: f32, y: f32) -> Self {
        let xy = Vec2::new(x, y);
        Self {
            xy,
            length: xy.length(),
        }
    }

    pub fn x(&self) -> f32 {
        self.xy.x
    }

    pub fn y(&self) -> f32 {
        self.xy.y
    }

    /// The magnitude computed when this vector was constructed.
    pub fn magnitude(&self) -> f32 {
        self.length
    }

    /// Component-wise multiply by a scalar.
    pub fn scale(&self, k: f32) -> Vector {
        Vector::new(self.xy.x * k, self.xy.y * k)
    }

    /// Component-wise divide by a scalar; a zero divisor yields
    /// [`VecQuotient::Degenerate`] instead of dividing.
    pub fn divide(&self, k: f32) -> VecQuotient {
        if k != 0.0 {
            VecQuotient::Vector(Vector::new(self.xy.x / k, self.xy.y / k))
        } else {
            VecQuotient::Degenerate
        }
    }

    /// Unit vector in this vector's direction; the zero vector stays zero.
    pub fn normalize(&self) -> Vector {
        self.divide(self.length).or_zero()
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.xy.x + rhs.xy.x, self.xy.y + rhs.xy.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.xy.x - rhs.xy.x, self.xy.y - rhs.xy.y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V({}, {})", self.xy.x, self.xy.y)
    }
}
