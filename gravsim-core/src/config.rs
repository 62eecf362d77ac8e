use crate::error::PhysicsError;
use serde::{Deserialize, Serialize};

/// What to do when two bodies sit at exactly the same position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoincidentPolicy {
    /// Abort the tick with `PhysicsError::CoincidentBodies`
    #[default]
    Fail,
    /// The pair contributes no force this tick
    Skip,
    /// Divide by zero anyway and let inf/NaN flow into the velocities
    Propagate,
}

/// Tunable constants of the physics engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravitational_constant: f64,
    /// Simulated time per tick
    pub timestep: f64,
    pub coincident_policy: CoincidentPolicy,
    /// Mass left behind in a body that has been merged away
    pub sentinel_mass: f64,
    pub min_display_size: f64,
    pub display_log_base: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: 1.0,
            timestep: 1.0,
            coincident_policy: CoincidentPolicy::Fail,
            sentinel_mass: 0.1,
            min_display_size: 10.0,
            display_log_base: 1.3,
        }
    }
}

impl PhysicsConfig {
    /// Check that every constant is finite and inside its usable range
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let checks = [
            (
                "gravitational_constant",
                self.gravitational_constant,
                self.gravitational_constant >= 0.0,
            ),
            ("timestep", self.timestep, self.timestep > 0.0),
            ("sentinel_mass", self.sentinel_mass, self.sentinel_mass > 0.0),
            (
                "min_display_size",
                self.min_display_size,
                self.min_display_size >= 0.0,
            ),
            // log base 1 is undefined, base <= 0 yields NaN
            (
                "display_log_base",
                self.display_log_base,
                self.display_log_base > 0.0 && self.display_log_base != 1.0,
            ),
        ];

        for (field, value, in_range) in checks {
            if !value.is_finite() || !in_range {
                return Err(PhysicsError::InvalidConfig { field, value });
            }
        }
        Ok(())
    }
}
