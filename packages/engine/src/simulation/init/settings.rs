use crate::core::Vec2;
use crate::domain::{PressurePolicy, SolverConfig};

use super::perf_stats::PerfStats;
use super::SolverCore;

pub(super) fn config(solver: &SolverCore) -> SolverConfig {
    SolverConfig {
        world_width: solver.grid.width(),
        world_height: solver.grid.height(),
        substeps: solver.substeps,
        solver_iterations: solver.solver_iterations,
        response_coef: solver.response_coef,
        velocity_coef: solver.velocity_coef,
        gravity: solver.gravity,
        pressure_policy: solver.pressure_policy,
    }
}

pub(super) fn enable_perf_metrics(solver: &mut SolverCore, enabled: bool) {
    solver.perf_enabled = enabled;
    if !enabled {
        solver.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(solver: &SolverCore) -> PerfStats {
    solver.perf_stats.clone()
}

pub(super) fn set_response_coef(solver: &mut SolverCore, coef: f32) {
    if !coef.is_finite() {
        log::warn!("ignoring non-finite response coefficient {}", coef);
        return;
    }
    solver.response_coef = coef;
}

pub(super) fn set_velocity_coef(solver: &mut SolverCore, coef: f32) {
    if !coef.is_finite() {
        log::warn!("ignoring non-finite velocity coefficient {}", coef);
        return;
    }
    solver.velocity_coef = coef;
}

pub(super) fn set_gravity(solver: &mut SolverCore, x: f32, y: f32) {
    let gravity = Vec2::new(x, y);
    if !gravity.is_finite() {
        log::warn!("ignoring non-finite gravity ({}, {})", x, y);
        return;
    }
    solver.gravity = gravity;
}

pub(super) fn set_pressure_policy(solver: &mut SolverCore, policy: PressurePolicy) {
    solver.pressure_policy = policy;
}
