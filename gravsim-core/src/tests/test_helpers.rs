//! Test helper utilities for gravsim tests

use crate::body::Body;
use crate::scenario::{Preset, Scenario};
use crate::vector::Vector3;
use crate::world::World;

/// Check if two floating point values are approximately equal within tolerance
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Componentwise approximate equality for vectors
pub fn approx_eq_vec(a: Vector3, b: Vector3, tol: f64) -> bool {
    (0..3).all(|i| approx_eq(a[i], b[i], tol))
}

/// Build a world from a preset, panicking on failure
pub fn preset_world(preset: Preset) -> World {
    Scenario::preset(preset)
        .build_world()
        .expect("preset should build")
}

/// Build a default-config world from a list of bodies
pub fn world_with(bodies: Vec<Body>) -> World {
    let mut world = World::new();
    for body in bodies {
        world.add_body(body).expect("valid body");
    }
    world
}

/// Compare every body in two worlds with tolerance
pub fn worlds_approx_equal(a: &World, b: &World, tol: f64) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bodies().iter().zip(b.bodies()).all(|(x, y)| {
        x.state == y.state
            && approx_eq(x.mass, y.mass, tol)
            && approx_eq_vec(x.position, y.position, tol)
            && approx_eq_vec(x.velocity, y.velocity, tol)
    })
}
