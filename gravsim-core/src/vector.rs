use crate::error::PhysicsError;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, Mul, Neg, Sub, SubAssign};

/// A 3D vector with 64-bit components
///
/// Arithmetic always produces a fresh value. The plain operators follow
/// IEEE-754 semantics (dividing by zero yields infinities/NaN); the
/// `checked_*` and `normalize` methods report degenerate input as errors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector3(DVec3);

impl Vector3 {
    pub const ZERO: Self = Self(DVec3::ZERO);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Component access by axis index (0 = x, 1 = y, 2 = z)
    pub fn get(&self, index: usize) -> Result<f64, PhysicsError> {
        match index {
            0 => Ok(self.0.x),
            1 => Ok(self.0.y),
            2 => Ok(self.0.z),
            _ => Err(PhysicsError::IndexOutOfRange { index }),
        }
    }

    pub fn dot(&self, other: Vector3) -> f64 {
        self.0.dot(other.0)
    }

    pub fn magnitude(&self) -> f64 {
        self.0.length()
    }

    /// Euclidean distance between two points
    pub fn distance(&self, other: Vector3) -> f64 {
        self.0.distance(other.0)
    }

    /// Divide every component by `k`, refusing `k == 0`
    pub fn checked_div(&self, k: f64) -> Result<Vector3, PhysicsError> {
        if k == 0.0 {
            return Err(PhysicsError::DivisionByZero);
        }
        Ok(*self / k)
    }

    /// Unit vector in the same direction
    pub fn normalize(&self) -> Result<Vector3, PhysicsError> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(PhysicsError::ZeroMagnitude);
        }
        Ok(*self / magnitude)
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl TryFrom<&[f64]> for Vector3 {
    type Error = PhysicsError;

    fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
        match components {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            _ => Err(PhysicsError::InvalidOperand {
                len: components.len(),
            }),
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.0.x, self.0.y, self.0.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.0 += rhs.0;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        self.0 -= rhs.0;
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Self(-self.0)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, k: f64) -> Vector3 {
        Self(self.0 * k)
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, k: f64) -> Vector3 {
        Self(self.0 / k)
    }
}

/// Panics on an index outside 0..3; use [`Vector3::get`] for a checked lookup.
impl Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}
