//! External forcing helpers applied between `update()` calls
//!
//! The solver itself only knows gravity. Embedding applications that want
//! a swirling / collapsing cloud use these per frame before `update()`.

use crate::core::Vec2;
use crate::domain::ParticleStore;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Accelerate every particle toward `center` with magnitude `strength`.
/// Particles exactly on the center are left alone (no direction).
pub fn apply_central_force(store: &mut ParticleStore, center: Vec2, strength: f32) {
    let pull = |pos: &Vec2, acc: &mut Vec2| {
        let to_center = center - *pos;
        let len = to_center.length();
        if len > 0.0 {
            *acc += to_center / len * strength;
        }
    };

    #[cfg(feature = "parallel")]
    {
        store
            .positions
            .par_iter()
            .zip(store.accelerations.par_iter_mut())
            .for_each(|(pos, acc)| pull(pos, acc));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (pos, acc) in store.positions.iter().zip(store.accelerations.iter_mut()) {
            pull(pos, acc);
        }
    }
}

/// Damp velocities by `coef / (1 + pressure)`: crowded particles are
/// damped less, so dense regions keep churning.
pub fn apply_drag(store: &mut ParticleStore, coef: f32) {
    let slow = |pos: &Vec2, prev: &mut Vec2, pressure: &f32| {
        let ratio = coef / (1.0 + pressure);
        let v = *pos - *prev;
        *prev += v * ratio;
    };

    #[cfg(feature = "parallel")]
    {
        store
            .positions
            .par_iter()
            .zip(store.prev_positions.par_iter_mut())
            .zip(store.pressures.par_iter())
            .for_each(|((pos, prev), pressure)| slow(pos, prev, pressure));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for ((pos, prev), pressure) in store
            .positions
            .iter()
            .zip(store.prev_positions.iter_mut())
            .zip(store.pressures.iter())
        {
            slow(pos, prev, pressure);
        }
    }
}
