//! Inelastic merging of overlapping bodies
//!
//! Two active bodies overlap when their distance is below the mean of their
//! display sizes. The strictly heavier one absorbs the lighter; equal masses
//! never merge. The merge runs in a fixed order:
//!
//! 1. color becomes the mass-weighted blend, using the pre-merge masses
//! 2. the survivor's mass grows by the absorbed mass
//! 3. the absorbed body drops to the sentinel mass
//! 4. the survivor's position becomes the weighted mean using the
//!    post-update masses of steps 2 and 3
//! 5. the survivor's velocity is reset to zero
//!
//! Step 4 deliberately reads the updated masses. Callers relying on exact
//! positions after a merge depend on that order.

use crate::body::{Body, BodyState};
use crate::config::PhysicsConfig;
use crate::vector::Vector3;
use crate::world::BodyId;

/// Record of one merge
#[derive(Debug, Clone, PartialEq)]
pub struct FusionEvent {
    pub survivor: BodyId,
    pub absorbed: BodyId,
    /// Mass of the absorbed body before the merge
    pub absorbed_mass: f64,
}

/// Whether `body` should absorb `other`, given their display sizes
pub fn should_merge(body: &Body, body_size: f64, other: &Body, other_size: f64) -> bool {
    if !body.is_active() || !other.is_active() {
        return false;
    }
    let threshold = (body_size + other_size) / 2.0;
    body.position.distance(other.position) < threshold && body.mass > other.mass
}

/// Merge `other` into `body`, leaving `other` as an inert remnant
pub fn merge_into(body: &mut Body, other: &mut Body, into: BodyId, config: &PhysicsConfig) {
    body.color = body.color.blend(body.mass, other.color, other.mass);

    body.mass += other.mass;
    other.mass = config.sentinel_mass;

    let total = body.mass + other.mass;
    body.position = (body.position * body.mass + other.position * other.mass) / total;

    body.velocity = Vector3::ZERO;

    other.velocity = Vector3::ZERO;
    other.state = BodyState::Absorbed { into };
}

/// Run the fusion rule over every ordered pair of distinct bodies
///
/// Display sizes are sampled once at the start of the pass. Masses and
/// positions are read live, so a body that grows early in the pass can go on
/// to absorb more bodies in the same pass.
pub fn apply_fusions(bodies: &mut [Body], config: &PhysicsConfig) -> Vec<FusionEvent> {
    let sizes: Vec<f64> = bodies.iter().map(|b| b.display_size(config)).collect();
    let mut events = Vec::new();

    for i in 0..bodies.len() {
        for j in 0..bodies.len() {
            if i == j || !should_merge(&bodies[i], sizes[i], &bodies[j], sizes[j]) {
                continue;
            }

            let absorbed_mass = bodies[j].mass;
            let (body, other) = pair_mut(bodies, i, j);
            merge_into(body, other, BodyId(i), config);

            tracing::debug!(
                survivor = i,
                absorbed = j,
                absorbed_mass,
                new_mass = bodies[i].mass,
                "bodies fused"
            );
            events.push(FusionEvent {
                survivor: BodyId(i),
                absorbed: BodyId(j),
                absorbed_mass,
            });
        }
    }

    events
}

/// Two distinct mutable borrows into the same slice
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (left, right) = bodies.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = bodies.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}
