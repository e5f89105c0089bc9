use crate::domain::ParticleId;

use super::SolverCore;

impl SolverCore {
    /// Clear the grid and insert every particle inside the collision margin.
    /// Out-of-margin particles still integrate, they just never collide.
    pub(crate) fn rebuild_grid(&mut self) {
        self.grid.clear();

        let mut out_of_margin = 0u32;
        for (id, pos) in self.particles.positions().iter().enumerate() {
            if self.grid.in_margin(pos.x, pos.y) {
                self.grid.insert(pos.x, pos.y, id as ParticleId);
            } else {
                out_of_margin += 1;
            }
        }
        self.out_of_margin = out_of_margin;

        let dropped = self.grid.dropped_inserts();
        if dropped > 0 {
            log::debug!(
                "frame {}: {} particles dropped from full collision cells",
                self.frame,
                dropped
            );
        }
    }
}
