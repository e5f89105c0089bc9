use crate::domain::PressurePolicy;
use crate::systems::contacts::solve_contacts;
use crate::systems::integration::integrate;

use super::perf_timer::timed;
use super::{PerfTimer, SolverCore};

pub(super) fn update(solver: &mut SolverCore, dt: f32) {
    if !dt.is_finite() || dt < 0.0 {
        log::warn!("update: ignoring invalid dt {}", dt);
        return;
    }

    let perf_on = solver.perf_enabled;
    if perf_on {
        solver.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    if solver.pressure_policy == PressurePolicy::PerFrame {
        solver.particles.reset_pressures();
    }

    let frame_dt = dt / solver.substeps as f32;

    // Grid is rebuilt once per frame; particles drift less than a cell per
    // sub-step so contacts found from frame-start cells stay valid.
    if perf_on {
        let t0 = PerfTimer::start();
        solver.rebuild_grid();
        solver.perf_stats.grid_ms = t0.elapsed_ms();
    } else {
        solver.rebuild_grid();
    }

    let params = solver.contact_params();
    let iterations = solver.solver_iterations;
    let gravity = solver.gravity;
    for _ in 0..solver.substeps {
        timed(perf_on, &mut solver.perf_stats.contacts_ms, || {
            solve_contacts(&mut solver.particles, &solver.grid, &params, iterations)
        });
        timed(perf_on, &mut solver.perf_stats.integrate_ms, || {
            integrate(&mut solver.particles, gravity, frame_dt)
        });
    }

    if perf_on {
        solver.perf_stats.particle_count = solver.particles.len() as u32;
        solver.perf_stats.occupied_cells = solver.grid.occupied().len() as u32;
        solver.perf_stats.dropped_inserts = solver.grid.dropped_inserts() as u32;
        solver.perf_stats.out_of_margin = solver.out_of_margin;
        solver.perf_stats.substeps = solver.substeps;
        if let Some(start) = step_start {
            solver.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    solver.frame += 1;
}
