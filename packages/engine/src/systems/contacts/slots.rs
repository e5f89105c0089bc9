use crate::core::Vec2;
use crate::domain::{ParticleId, ParticleStore};

use super::{ContactParams, DEGENERATE_AXIS};

/// Raw view over the store's SoA arrays for concurrent contact solving.
///
/// # Safety
///
/// Concurrent callers must touch disjoint particle ids. The grid's color
/// classes guarantee this: cells solved at the same time never share a
/// touched cell, and a particle lives in at most one cell.
pub(super) struct ParticleSlots {
    positions: *mut Vec2,
    prev_positions: *mut Vec2,
    pressures: *mut f32,
    len: usize,
}

unsafe impl Send for ParticleSlots {}
unsafe impl Sync for ParticleSlots {}

impl ParticleSlots {
    pub(super) fn new(store: &mut ParticleStore) -> Self {
        Self {
            positions: store.positions.as_mut_ptr(),
            prev_positions: store.prev_positions.as_mut_ptr(),
            pressures: store.pressures.as_mut_ptr(),
            len: store.positions.len(),
        }
    }

    /// Resolve one ordered pair. Returns true if they overlapped.
    ///
    /// # Safety
    /// `a` and `b` must be `< len` and not accessed by any other thread.
    #[inline(always)]
    pub(super) unsafe fn resolve(&self, params: &ContactParams, a: ParticleId, b: ParticleId) -> bool {
        if a == b {
            return false;
        }
        let (a, b) = (a as usize, b as usize);
        debug_assert!(a < self.len && b < self.len);

        let pos_a = self.positions.add(a);
        let pos_b = self.positions.add(b);
        let d = *pos_a - *pos_b;
        let dist2 = d.length_squared();
        // Also rejects NaN
        if !(dist2 < 1.0) {
            return false;
        }

        let dist = dist2.sqrt();
        let axis = if dist2 > 0.0 { d / dist } else { DEGENERATE_AXIS };
        let delta = params.response_coef * 0.5 * (1.0 - dist);
        *pos_a += axis * delta;
        *pos_b -= axis * delta;
        *self.pressures.add(a) += delta;
        *self.pressures.add(b) += delta;

        let prev_a = self.prev_positions.add(a);
        let prev_b = self.prev_positions.add(b);
        let delta_v = (*pos_a - *prev_a) - (*pos_b - *prev_b);
        let exchange = delta_v * params.velocity_coef;
        // add_velocity(v) == prev -= v
        *prev_a += exchange;
        *prev_b -= exchange;
        true
    }
}
