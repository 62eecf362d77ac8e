use crate::body::{Body, BodyState, Color};
use crate::config::{CoincidentPolicy, PhysicsConfig};
use crate::error::PhysicsError;
use crate::fusion::{apply_fusions, FusionEvent};
use crate::gravity::accumulate_accelerations;
use crate::vector::Vector3;
use std::fmt;

/// Stable index of a body inside its world
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub usize);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outcome of a single tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// Number of ticks completed, including this one
    pub tick: u64,
    pub fusions: Vec<FusionEvent>,
}

/// Read-only view of a body for renderers
#[derive(Debug, Clone, PartialEq)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub position: Vector3,
    pub velocity: Vector3,
    pub mass: f64,
    pub color: Color,
    pub display_size: f64,
    pub visible: bool,
}

/// The simulated system: an arena of bodies plus the physics constants
///
/// Bodies are never removed. A body that is merged away stays in place as an
/// inert remnant so every [`BodyId`] handed out remains valid.
#[derive(Debug, Clone)]
pub struct World {
    bodies: Vec<Body>,
    config: PhysicsConfig,
    tick_count: u64,
}

impl World {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            config: PhysicsConfig::default(),
            tick_count: 0,
        }
    }

    /// An empty world with custom constants, rejected if any constant is unusable
    pub fn with_config(config: PhysicsConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(Self {
            bodies: Vec::new(),
            config,
            tick_count: 0,
        })
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Register a body; its mass must be finite and positive
    pub fn add_body(&mut self, mut body: Body) -> Result<BodyId, PhysicsError> {
        if !body.mass.is_finite() || body.mass <= 0.0 {
            return Err(PhysicsError::InvalidMass { mass: body.mass });
        }
        body.state = BodyState::Active;
        let id = BodyId(self.bodies.len());
        self.bodies.push(body);
        Ok(id)
    }

    pub fn body(&self, id: BodyId) -> Result<&Body, PhysicsError> {
        self.bodies.get(id.0).ok_or(PhysicsError::UnknownBody(id))
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn active_bodies(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_active())
            .map(|(i, b)| (BodyId(i), b))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Advance by one timestep: gravity for all pairs, then motion, then fusion
    ///
    /// On error the world is left exactly as it was before the call.
    #[tracing::instrument(skip_all, fields(tick = self.tick_count + 1, bodies = self.bodies.len()))]
    pub fn tick(&mut self) -> Result<TickReport, PhysicsError> {
        let dt = self.config.timestep;
        let accelerations = accumulate_accelerations(&self.bodies, &self.config)?;

        for (body, accel) in self.bodies.iter_mut().zip(accelerations) {
            if body.is_active() {
                body.accelerate(accel, dt);
            }
        }

        for body in self.bodies.iter_mut().filter(|b| b.is_active()) {
            body.advance(dt);
        }

        let fusions = apply_fusions(&mut self.bodies, &self.config);
        self.tick_count += 1;

        if self.config.coincident_policy == CoincidentPolicy::Propagate
            && self
                .bodies
                .iter()
                .any(|b| !b.position.is_finite() || !b.velocity.is_finite())
        {
            tracing::warn!("non-finite body state after tick {}", self.tick_count);
        }

        tracing::trace!(
            tick = self.tick_count,
            fusions = fusions.len(),
            total_mass = self.total_mass(),
            "tick complete"
        );

        Ok(TickReport {
            tick: self.tick_count,
            fusions,
        })
    }

    /// Tick `ticks` times, collecting every fusion that happened
    pub fn run(&mut self, ticks: u64) -> Result<Vec<FusionEvent>, PhysicsError> {
        let mut fusions = Vec::new();
        for _ in 0..ticks {
            fusions.extend(self.tick()?.fusions);
        }
        Ok(fusions)
    }

    pub fn snapshots(&self) -> Vec<BodySnapshot> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, b)| BodySnapshot {
                id: BodyId(i),
                position: b.position,
                velocity: b.velocity,
                mass: b.mass,
                color: b.color,
                display_size: b.display_size(&self.config),
                visible: b.is_active(),
            })
            .collect()
    }

    /// Body ids sorted by ascending x position, for back-to-front drawing
    pub fn depth_order(&self) -> Vec<BodyId> {
        let mut ids: Vec<BodyId> = (0..self.bodies.len()).map(BodyId).collect();
        ids.sort_by(|a, b| {
            self.bodies[a.0]
                .position
                .x()
                .total_cmp(&self.bodies[b.0].position.x())
        });
        ids
    }

    /// Mass of all active bodies
    pub fn total_mass(&self) -> f64 {
        self.active_bodies().map(|(_, b)| b.mass).sum()
    }

    /// Mass-weighted centre of the active bodies
    pub fn barycenter(&self) -> Option<Vector3> {
        let total = self.total_mass();
        if total <= 0.0 {
            return None;
        }
        let weighted = self
            .active_bodies()
            .fold(Vector3::ZERO, |acc, (_, b)| acc + b.position * b.mass);
        Some(weighted / total)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
