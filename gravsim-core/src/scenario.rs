//! Scenario files: physics constants plus initial bodies, stored as TOML
//!
//! ```toml
//! [physics]
//! gravitational_constant = 1.0
//! coincident_policy = "skip"
//!
//! [[bodies]]
//! mass = 10000.0
//! position = [0.0, 0.0, 0.0]
//! color = [1.0, 1.0, 0.0]
//! ```

use crate::body::{Body, Color};
use crate::config::PhysicsConfig;
use crate::error::ScenarioError;
use crate::vector::Vector3;
use crate::world::World;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Initial state of one body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    pub mass: f64,
    pub position: Vector3,
    #[serde(default)]
    pub velocity: Vector3,
    #[serde(default)]
    pub color: Color,
}

impl From<&Body> for BodySpec {
    fn from(body: &Body) -> Self {
        Self {
            mass: body.mass,
            position: body.position,
            velocity: body.velocity,
            color: body.color,
        }
    }
}

impl From<&BodySpec> for Body {
    fn from(spec: &BodySpec) -> Self {
        Body::new(spec.mass, spec.position, spec.velocity, spec.color)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub bodies: Vec<BodySpec>,
}

impl Scenario {
    pub fn from_toml_str(source: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let source = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading scenario");
        Self::from_toml_str(&source)
    }

    pub fn to_toml_string(&self) -> Result<String, ScenarioError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn preset(preset: Preset) -> Self {
        let bodies = match preset {
            Preset::ThreeBody => vec![
                Body::new(500.0, Vector3::new(500.0, 0.0, 0.0), Vector3::ZERO, Color::RED),
                Body::new(300.0, Vector3::new(-500.0, 0.0, 0.0), Vector3::ZERO, Color::BLUE),
                Body::new(10_000.0, Vector3::ZERO, Vector3::ZERO, Color::BLACK),
            ],
            Preset::BinarySuns => vec![
                Body::sun(Vector3::new(0.0, 0.0, 100.0), Vector3::new(0.0, 5.0, 0.0)),
                Body::sun(Vector3::new(0.0, 0.0, -100.0), Vector3::new(0.0, -5.0, 0.0)),
                Body::planet(
                    Vector3::new(100.0, 100.0, 0.0),
                    Vector3::new(0.0, 5.5, 5.5),
                    Color::new(0.2, 0.2, 0.8),
                )
                .with_mass(600.0),
                Body::planet(
                    Vector3::ZERO,
                    Vector3::new(-11.0, 11.0, 0.0),
                    Color::new(0.6, 0.2, 0.2),
                )
                .with_mass(20.0),
            ],
            Preset::TwinSuns => vec![
                Body::sun(Vector3::new(0.0, 0.0, 100.0), Vector3::ZERO).with_mass(10_001.0),
                Body::sun(Vector3::new(0.0, 0.0, -100.0), Vector3::ZERO),
            ],
        };

        Self {
            physics: PhysicsConfig::default(),
            bodies: bodies.iter().map(BodySpec::from).collect(),
        }
    }

    /// Create a world holding this scenario's bodies, in file order
    pub fn build_world(&self) -> Result<World, ScenarioError> {
        let mut world = World::with_config(self.physics.clone())?;
        for spec in &self.bodies {
            world.add_body(Body::from(spec))?;
        }
        Ok(world)
    }
}

/// Built-in starting configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Two planets on either side of a heavy central body, all at rest
    #[default]
    ThreeBody,
    /// Two orbiting suns with a pair of planets
    BinarySuns,
    /// Two resting suns of nearly equal mass
    TwinSuns,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::ThreeBody, Preset::BinarySuns, Preset::TwinSuns];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::ThreeBody => "three-body",
            Preset::BinarySuns => "binary-suns",
            Preset::TwinSuns => "twin-suns",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ScenarioError::UnknownPreset(s.to_string()))
    }
}
