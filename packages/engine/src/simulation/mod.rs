//! Solver - per-frame particle pipeline
//!
//! update(dt):
//!   1. frame_dt = dt / substeps
//!   2. rebuild the collision grid from current positions (once per frame)
//!   3. substeps x { contact passes (solver_iterations), Verlet integrate }
//!
//! SolverCore only orchestrates; contact math lives in systems/contacts,
//! integration in systems/integration, the grid in spatial/grid.

use crate::core::Vec2;
use crate::domain::{Particle, ParticleId, ParticleStore, PressurePolicy, SolverConfig};
use crate::grid::CollisionGrid;
use crate::systems::contacts::ContactParams;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "step/rebuild.rs"]
mod rebuild;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Solver;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The particle solver
pub struct SolverCore {
    particles: ParticleStore,
    grid: CollisionGrid,
    world_size: Vec2,

    // Fixed for the solver's lifetime
    substeps: u32,
    solver_iterations: u32,

    // Tunables (take effect on the next update)
    response_coef: f32,
    velocity_coef: f32,
    gravity: Vec2,
    pressure_policy: PressurePolicy,

    // State
    frame: u64,
    out_of_margin: u32,
    render_buffer: Vec<f32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SolverCore {
    /// Create a solver for a `width` x `height` world.
    ///
    /// Panics on zero dimensions, substeps or iterations: these are
    /// construction-time preconditions, not runtime errors.
    pub fn new(width: u32, height: u32, substeps: u32, solver_iterations: u32) -> Self {
        let mut config = SolverConfig::new(width, height);
        config.substeps = substeps;
        config.solver_iterations = solver_iterations;
        if let Err(e) = config.validate() {
            panic!("invalid solver configuration: {}", e);
        }
        init::create_solver_core(&config)
    }

    pub fn from_config(config: &SolverConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(init::create_solver_core(config))
    }

    pub fn from_config_json(json: &str) -> Result<Self, String> {
        let config = SolverConfig::from_json(json)?;
        Ok(init::create_solver_core(&config))
    }

    /// Current configuration (including live tunables) as JSON
    pub fn config_json(&self) -> Result<String, String> {
        self.config().to_json()
    }

    pub fn config(&self) -> SolverConfig {
        settings::config(self)
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn world_size(&self) -> Vec2 { self.world_size }

    pub fn substeps(&self) -> u32 { self.substeps }

    pub fn solver_iterations(&self) -> u32 { self.solver_iterations }

    pub fn particle_count(&self) -> usize { self.particles.len() }

    pub fn frame(&self) -> u64 { self.frame }

    /// Particles skipped by the last grid rebuild (outside the 1-unit margin)
    pub fn out_of_margin_count(&self) -> u32 { self.out_of_margin }

    pub fn particles(&self) -> &ParticleStore { &self.particles }

    pub fn particles_mut(&mut self) -> &mut ParticleStore { &mut self.particles }

    pub fn grid(&self) -> &CollisionGrid { &self.grid }

    // === Tunables ===

    pub fn response_coef(&self) -> f32 { self.response_coef }

    pub fn set_response_coef(&mut self, coef: f32) {
        settings::set_response_coef(self, coef);
    }

    pub fn velocity_coef(&self) -> f32 { self.velocity_coef }

    pub fn set_velocity_coef(&mut self, coef: f32) {
        settings::set_velocity_coef(self, coef);
    }

    pub fn gravity(&self) -> Vec2 { self.gravity }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    pub fn pressure_policy(&self) -> PressurePolicy { self.pressure_policy }

    pub fn set_pressure_policy(&mut self, policy: PressurePolicy) {
        settings::set_pressure_policy(self, policy);
    }

    /// Enable or disable per-update perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last update perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === Commands ===

    /// Append a particle; the returned id is permanent
    pub fn add_object(&mut self, particle: Particle) -> ParticleId {
        commands::add_object(self, particle)
    }

    /// Scatter `count` resting particles uniformly over the world.
    /// Returns the id of the first one.
    pub fn add_random_objects(&mut self, count: u32, seed: u32) -> ParticleId {
        commands::add_random_objects(self, count, seed)
    }

    /// Pull every particle toward `center` (added to the acceleration accumulator)
    pub fn apply_central_force(&mut self, center: Vec2, strength: f32) {
        commands::apply_central_force(self, center, strength);
    }

    /// Pressure-scaled velocity damping
    pub fn apply_drag(&mut self, coef: f32) {
        commands::apply_drag(self, coef);
    }

    /// Advance the simulation by `dt`
    pub fn update(&mut self, dt: f32) {
        step::update(self, dt);
    }

    // === Render access ===

    /// Fill the interleaved `[x, y, pressure]` buffer and return it
    pub fn extract_render_buffer(&mut self) -> &[f32] {
        render_extract::extract_render_buffer(self)
    }

    pub fn positions_ptr(&self) -> *const f32 {
        render_extract::positions_ptr(self)
    }

    pub fn positions_len(&self) -> usize {
        render_extract::positions_len(self)
    }

    pub fn pressures_ptr(&self) -> *const f32 {
        render_extract::pressures_ptr(self)
    }

    pub fn pressures_len(&self) -> usize {
        self.particles.len()
    }

    fn contact_params(&self) -> ContactParams {
        ContactParams {
            response_coef: self.response_coef,
            velocity_coef: self.velocity_coef,
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
