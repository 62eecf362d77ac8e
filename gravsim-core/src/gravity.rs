//! Pairwise Newtonian gravity
//!
//! Every unordered pair of active bodies is evaluated exactly once per tick.
//! The force between them is computed once and applied to both members with
//! opposite signs, so momentum is conserved for each pair.

use crate::body::Body;
use crate::config::{CoincidentPolicy, PhysicsConfig};
use crate::error::PhysicsError;
use crate::vector::Vector3;
use crate::world::BodyId;

/// Accelerations `(on_a, on_b)` produced by the pull between `a` and `b`
///
/// Returns `Ok(None)` when the pair is coincident and the policy says to skip
/// it, and `Err(PhysicsError::ZeroMagnitude)` when the policy says to fail.
pub fn pair_accelerations(
    a: &Body,
    b: &Body,
    config: &PhysicsConfig,
) -> Result<Option<(Vector3, Vector3)>, PhysicsError> {
    let separation = b.position - a.position;
    let distance = separation.magnitude();

    let direction = if distance == 0.0 {
        match config.coincident_policy {
            CoincidentPolicy::Fail => return Err(PhysicsError::ZeroMagnitude),
            CoincidentPolicy::Skip => return Ok(None),
            CoincidentPolicy::Propagate => {
                tracing::warn!("coincident bodies, gravity result will be non-finite");
                separation / distance
            }
        }
    } else {
        separation.normalize()?
    };

    let force_mag = config.gravitational_constant * a.mass * b.mass / (distance * distance);
    let force = direction * force_mag;

    Ok(Some((force / a.mass, -force / b.mass)))
}

/// Apply the mutual pull between two bodies to both of their velocities
pub fn apply_pairwise_gravity(
    a: &mut Body,
    b: &mut Body,
    config: &PhysicsConfig,
) -> Result<(), PhysicsError> {
    if let Some((accel_a, accel_b)) = pair_accelerations(a, b, config)? {
        a.accelerate(accel_a, config.timestep);
        b.accelerate(accel_b, config.timestep);
    }
    Ok(())
}

/// Net acceleration on every body from all unordered pairs of active bodies
///
/// Nothing is mutated, so a failing pair leaves the world untouched.
/// Absorbed bodies get a zero entry.
pub fn accumulate_accelerations(
    bodies: &[Body],
    config: &PhysicsConfig,
) -> Result<Vec<Vector3>, PhysicsError> {
    let mut accelerations = vec![Vector3::ZERO; bodies.len()];

    for (i, first) in bodies.iter().enumerate() {
        if !first.is_active() {
            continue;
        }
        for (offset, second) in bodies[i + 1..].iter().enumerate() {
            if !second.is_active() {
                continue;
            }
            let j = i + 1 + offset;
            let pair = pair_accelerations(first, second, config).map_err(|e| match e {
                PhysicsError::ZeroMagnitude => PhysicsError::CoincidentBodies {
                    a: BodyId(i),
                    b: BodyId(j),
                },
                other => other,
            })?;
            if let Some((accel_a, accel_b)) = pair {
                accelerations[i] += accel_a;
                accelerations[j] += accel_b;
            }
        }
    }

    Ok(accelerations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Color;

    fn body(mass: f64, x: f64) -> Body {
        Body::new(mass, Vector3::new(x, 0.0, 0.0), Vector3::ZERO, Color::BLACK)
    }

    #[test]
    fn absorbed_bodies_feel_and_exert_nothing() {
        let config = PhysicsConfig::default();
        let mut bodies = vec![body(100.0, 0.0), body(50.0, 10.0), body(50.0, -10.0)];
        bodies[2].state = crate::body::BodyState::Absorbed { into: BodyId(0) };

        let accel = accumulate_accelerations(&bodies, &config).unwrap();
        assert_eq!(accel[2], Vector3::ZERO);
        // Only the pull from body 1 remains on body 0
        assert!((accel[0].x() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn coincident_pair_is_reported_by_index() {
        let config = PhysicsConfig::default();
        let bodies = vec![body(1.0, -5.0), body(1.0, 3.0), body(2.0, 3.0)];
        let err = accumulate_accelerations(&bodies, &config).unwrap_err();
        assert_eq!(
            err,
            PhysicsError::CoincidentBodies {
                a: BodyId(1),
                b: BodyId(2)
            }
        );
    }
}
