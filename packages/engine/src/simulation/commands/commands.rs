use crate::core::random::next_unit_f32;
use crate::core::Vec2;
use crate::domain::{Particle, ParticleId};
use crate::systems::forces;

use super::SolverCore;

pub(super) fn add_object(solver: &mut SolverCore, particle: Particle) -> ParticleId {
    solver.particles.push(particle)
}

pub(super) fn add_random_objects(solver: &mut SolverCore, count: u32, seed: u32) -> ParticleId {
    let first = solver.particles.len() as ParticleId;
    let size = solver.world_size;
    let mut rng_state = seed;
    solver.particles.reserve(count as usize);
    for _ in 0..count {
        let x = next_unit_f32(&mut rng_state) * size.x;
        let y = next_unit_f32(&mut rng_state) * size.y;
        solver.particles.push(Particle::at(x, y));
    }
    log::debug!("spawned {} particles (seed {})", count, seed);
    first
}

pub(super) fn apply_central_force(solver: &mut SolverCore, center: Vec2, strength: f32) {
    forces::apply_central_force(&mut solver.particles, center, strength);
}

pub(super) fn apply_drag(solver: &mut SolverCore, coef: f32) {
    forces::apply_drag(&mut solver.particles, coef);
}
