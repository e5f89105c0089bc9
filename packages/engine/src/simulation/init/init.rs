use crate::core::Vec2;
use crate::domain::{ParticleStore, SolverConfig};
use crate::grid::CollisionGrid;

use super::perf_stats::PerfStats;
use super::SolverCore;

/// Build a solver from an already validated configuration
pub(super) fn create_solver_core(config: &SolverConfig) -> SolverCore {
    debug_assert!(config.validate().is_ok());
    log::info!(
        "solver: {}x{} world, {} substeps, {} solver iterations",
        config.world_width,
        config.world_height,
        config.substeps,
        config.solver_iterations
    );

    SolverCore {
        particles: ParticleStore::new(),
        grid: CollisionGrid::new(config.world_width, config.world_height),
        world_size: Vec2::new(config.world_width as f32, config.world_height as f32),
        substeps: config.substeps,
        solver_iterations: config.solver_iterations,
        response_coef: config.response_coef,
        velocity_coef: config.velocity_coef,
        gravity: config.gravity,
        pressure_policy: config.pressure_policy,
        frame: 0,
        out_of_margin: 0,
        render_buffer: Vec::new(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
