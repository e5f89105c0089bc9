//! Velocity-implicit (Verlet) integration
//!
//! new = pos + (pos - prev) + acc * dt^2, prev = old pos, acc = 0.
//! Every particle is independent, so the pass is a plain data-parallel map.

use crate::core::Vec2;
use crate::domain::ParticleStore;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[inline(always)]
fn integrate_one(pos: &mut Vec2, prev: &mut Vec2, acc: &mut Vec2, gravity: Vec2, dt2: f32) {
    let a = *acc + gravity;
    let current = *pos;
    *pos = current + (current - *prev) + a * dt2;
    *prev = current;
    *acc = Vec2::ZERO;
}

/// Add `gravity` to every accumulator, then advance all particles by `dt`
pub fn integrate(store: &mut ParticleStore, gravity: Vec2, dt: f32) {
    let dt2 = dt * dt;
    let positions = &mut store.positions;
    let prev_positions = &mut store.prev_positions;
    let accelerations = &mut store.accelerations;

    #[cfg(feature = "parallel")]
    {
        positions
            .par_iter_mut()
            .zip(prev_positions.par_iter_mut())
            .zip(accelerations.par_iter_mut())
            .for_each(|((pos, prev), acc)| integrate_one(pos, prev, acc, gravity, dt2));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for ((pos, prev), acc) in positions
            .iter_mut()
            .zip(prev_positions.iter_mut())
            .zip(accelerations.iter_mut())
        {
            integrate_one(pos, prev, acc, gravity, dt2);
        }
    }
}
