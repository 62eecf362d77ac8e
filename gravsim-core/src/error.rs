//! Error types for the simulation engine and scenario loading

use crate::world::BodyId;
use thiserror::Error;

/// Errors raised by vector arithmetic, force evaluation and world bookkeeping
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    #[error("operand must have exactly 3 components, got {len}")]
    InvalidOperand { len: usize },

    #[error("vector index {index} out of range: there are only three components")]
    IndexOutOfRange { index: usize },

    #[error("division of a vector by zero")]
    DivisionByZero,

    #[error("cannot normalize a vector of zero magnitude")]
    ZeroMagnitude,

    #[error("bodies {a} and {b} occupy the same position")]
    CoincidentBodies { a: BodyId, b: BodyId },

    #[error("body mass must be finite and positive, got {mass}")]
    InvalidMass { mass: f64 },

    #[error("invalid physics setting {field} = {value}")]
    InvalidConfig { field: &'static str, value: f64 },

    #[error("no body with id {0}")]
    UnknownBody(BodyId),
}

/// Errors raised while loading, saving or building a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid scenario file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize scenario: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("unknown preset '{0}' (expected one of: three-body, binary-suns, twin-suns)")]
    UnknownPreset(String),

    #[error(transparent)]
    Physics(#[from] PhysicsError),
}
