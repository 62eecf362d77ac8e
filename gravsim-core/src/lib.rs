pub mod body;
pub mod config;
pub mod error;
pub mod fusion;
pub mod gravity;
pub mod scenario;
pub mod vector;
pub mod world;

pub use body::{Body, BodyState, Color};
pub use config::{CoincidentPolicy, PhysicsConfig};
pub use error::{PhysicsError, ScenarioError};
pub use fusion::FusionEvent;
pub use gravity::apply_pairwise_gravity;
pub use scenario::{BodySpec, Preset, Scenario};
pub use vector::Vector3;
pub use world::{BodyId, BodySnapshot, TickReport, World};

// Test helpers module (public for integration tests)
pub mod tests;
