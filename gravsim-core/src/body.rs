use crate::config::PhysicsConfig;
use crate::vector::Vector3;
use crate::world::BodyId;
use serde::{Deserialize, Serialize};

pub const SUN_MASS: f64 = 10_000.0;
pub const PLANET_MASS: f64 = 10.0;

/// RGB color with channels conceptually in [0, 1] (not enforced)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub [f64; 3]);

impl Color {
    pub const BLACK: Color = Color([0.0, 0.0, 0.0]);
    pub const RED: Color = Color([1.0, 0.0, 0.0]);
    pub const GREEN: Color = Color([0.0, 1.0, 0.0]);
    pub const BLUE: Color = Color([0.0, 0.0, 1.0]);
    pub const YELLOW: Color = Color([1.0, 1.0, 0.0]);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self([r, g, b])
    }

    /// Mass-weighted average of two colors
    pub fn blend(self, mass: f64, other: Color, other_mass: f64) -> Color {
        let total = mass + other_mass;
        let mut out = [0.0; 3];
        for (c, channel) in out.iter_mut().enumerate() {
            *channel = (self.0[c] * mass + other.0[c] * other_mass) / total;
        }
        Color(out)
    }
}

/// Lifecycle of a body inside its world
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyState {
    Active,
    /// Merged into another body; kept as an inert remnant so ids stay stable
    Absorbed { into: BodyId },
}

/// A point mass
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub mass: f64,
    pub position: Vector3,
    pub velocity: Vector3,
    pub color: Color,
    pub state: BodyState,
}

impl Body {
    pub fn new(mass: f64, position: Vector3, velocity: Vector3, color: Color) -> Self {
        Self {
            mass,
            position,
            velocity,
            color,
            state: BodyState::Active,
        }
    }

    /// A yellow body with the default sun mass
    pub fn sun(position: Vector3, velocity: Vector3) -> Self {
        Self::new(SUN_MASS, position, velocity, Color::YELLOW)
    }

    /// A planet with the default planet mass
    pub fn planet(position: Vector3, velocity: Vector3, color: Color) -> Self {
        Self::new(PLANET_MASS, position, velocity, color)
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn is_active(&self) -> bool {
        self.state == BodyState::Active
    }

    /// Renderer size, derived from the current mass
    pub fn display_size(&self, config: &PhysicsConfig) -> f64 {
        // f64::max ignores NaN, so a non-positive mass falls back to the minimum
        self.mass
            .log(config.display_log_base)
            .max(config.min_display_size)
    }

    /// Explicit Euler position update: `position += velocity * dt`
    pub fn advance(&mut self, dt: f64) {
        self.position += self.velocity * dt;
    }

    /// Add an acceleration to the velocity over one step of length `dt`
    pub fn accelerate(&mut self, acceleration: Vector3, dt: f64) {
        self.velocity += acceleration * dt;
    }

    pub fn momentum(&self) -> Vector3 {
        self.velocity * self.mass
    }
}
